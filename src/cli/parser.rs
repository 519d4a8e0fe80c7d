use clap::{Parser, Subcommand};

/// Command-line interface definition for rHRMS
/// CLI client for a multi-tenant HRMS backend
#[derive(Parser)]
#[command(
    name = "rhrms",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple HRMS client CLI: attendance check-in with location, leave, expenses, projects and tasks",
    long_about = None
)]
pub struct Cli {
    /// Override device store path (useful for tests or multiple profiles)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the device store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Select or show the organization (tenant) whose backend is used
    Org {
        #[command(subcommand)]
        action: OrgAction,
    },

    /// Log in and store the access token
    Login {
        #[arg(long, help = "Account e-mail")]
        email: Option<String>,

        #[arg(long, env = "RHRMS_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        #[arg(long, help = "Store an access token directly instead of logging in")]
        token: Option<String>,
    },

    /// Log out and clear the device store
    Logout,

    /// Send a raw request through the pipeline
    Request {
        /// Path relative to the organization base URL (or absolute with --exact)
        path: String,

        #[arg(long, short = 'X', default_value = "GET")]
        method: String,

        #[arg(long, help = "Attach the stored bearer token")]
        secure: bool,

        #[arg(long, help = "JSON body")]
        data: Option<String>,

        #[arg(
            long = "file",
            value_name = "FIELD=PATH",
            help = "Attach a file (switches to multipart/form-data)"
        )]
        files: Vec<String>,

        #[arg(long = "header", short = 'H', value_name = "NAME:VALUE")]
        headers: Vec<String>,

        #[arg(long, help = "Use PATH verbatim, without the base URL")]
        exact: bool,

        #[arg(long, value_name = "SECS", help = "Per-request deadline")]
        timeout: Option<u64>,
    },

    /// Check in with the current location
    Checkin {
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,

        #[arg(long)]
        note: Option<String>,
    },

    /// Check out with the current location
    Checkout {
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,

        #[arg(long)]
        note: Option<String>,
    },

    /// Resolve coordinates to a postal address
    Locate {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },

    /// Attendance history (defaults to the current month)
    Attendance {
        #[arg(long, help = "First day (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, help = "Last day (YYYY-MM-DD)")]
        to: Option<String>,
    },

    /// Expense claims
    Expense {
        #[command(subcommand)]
        action: ExpenseAction,
    },

    /// Leave requests
    Leave {
        #[command(subcommand)]
        action: LeaveAction,
    },

    /// Projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Students and tutoring sessions
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Show the employee profile
    Profile {
        #[arg(long = "salary", help = "List salary slips")]
        salary: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum OrgAction {
    /// Select the organization backend and fetch its company info
    Select { url: String },

    /// Show the selected organization
    Show,
}

#[derive(Subcommand)]
pub enum ExpenseAction {
    List,

    Submit {
        #[arg(long)]
        title: String,

        #[arg(long)]
        amount: f64,

        #[arg(long, help = "Expense date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long, value_name = "FILE")]
        receipt: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum LeaveAction {
    List,

    Apply {
        #[arg(long = "type")]
        leave_type: String,

        #[arg(long, help = "First day (YYYY-MM-DD)")]
        from: String,

        #[arg(long, help = "Last day (YYYY-MM-DD)")]
        to: String,

        #[arg(long)]
        reason: String,

        #[arg(long = "half-day")]
        half_day: bool,
    },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    List,
    Show { id: u64 },
}

#[derive(Subcommand)]
pub enum TaskAction {
    List {
        #[arg(long)]
        project: Option<u64>,
    },

    Status {
        id: u64,

        /// todo, in_progress, done
        status: String,
    },
}

#[derive(Subcommand)]
pub enum StudentAction {
    List,
    Sessions { id: u64 },
}
