//! rHRMS library root.
//! Exposes the request pipeline, tenant config store, location resolver,
//! per-resource services, the CLI parser and the high-level run() function.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod db;
pub mod errors;
pub mod location;
pub mod models;
pub mod services;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use context::AppContext;
use errors::{AppError, AppResult};

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => return cli::commands::init::handle(cli),
        Commands::Config { .. } => return cli::commands::config::handle(&cli.command, &cfg),
        _ => {}
    }

    let ctx = AppContext::open(cfg)?;

    match &cli.command {
        Commands::Org { .. } => cli::commands::org::handle(&cli.command, &ctx).await,
        Commands::Login { .. } | Commands::Logout => {
            cli::commands::session::handle(&cli.command, &ctx).await
        }
        Commands::Request { .. } => cli::commands::request::handle(&cli.command, &ctx).await,
        Commands::Checkin { .. }
        | Commands::Checkout { .. }
        | Commands::Locate { .. }
        | Commands::Attendance { .. } => {
            cli::commands::attendance::handle(&cli.command, &ctx).await
        }
        Commands::Expense { .. } => cli::commands::expense::handle(&cli.command, &ctx).await,
        Commands::Leave { .. } => cli::commands::leave::handle(&cli.command, &ctx).await,
        Commands::Project { .. } => cli::commands::project::handle(&cli.command, &ctx).await,
        Commands::Task { .. } => cli::commands::task::handle(&cli.command, &ctx).await,
        Commands::Student { .. } => cli::commands::student::handle(&cli.command, &ctx).await,
        Commands::Profile { .. } => cli::commands::profile::handle(&cli.command, &ctx).await,
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, &ctx),
        Commands::Init | Commands::Config { .. } => Ok(()),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once (file + environment overrides)
    let mut cfg = Config::load()?;

    // 3️⃣ command-line override of the device store
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    // 4️⃣ async runtime for network and location calls
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::Other(format!("cannot start async runtime: {}", e)))?;

    runtime.block_on(dispatch(&cli, cfg))
}
