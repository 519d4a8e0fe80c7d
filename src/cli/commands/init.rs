use crate::config::Config;
use crate::db::{DeviceStorage, SqliteStorage};
use crate::errors::AppResult;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite device store and its migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing rHRMS…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Device store: {}", &db_path);

    let storage = SqliteStorage::open(&db_path)?;
    println!("✅ Device store initialized at {}", &db_path);

    storage.log_event(
        "init",
        "Device store initialized",
        &format!("Device store initialized at {}", &db_path),
    );

    println!("🎉 rHRMS initialization completed!");
    Ok(())
}
