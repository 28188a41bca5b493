use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchclock
/// CLI application to track punch events and payroll with SQLite
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: record punches, calculate payroll and follow savings goals using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Override the current time (YYYY-MM-DD HH:MM), for deterministic tests
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a punch event (in, break, resume, out)
    Punch {
        /// Punch action: in | break | resume | out
        action: String,

        /// Punch time (YYYY-MM-DD HH:MM); defaults to now
        #[arg(long = "at", help = "Punch time (YYYY-MM-DD HH:MM); defaults to now")]
        at: Option<String>,

        /// Employee id (defaults to configuration)
        #[arg(long = "employee", help = "Employee id (defaults to configuration)")]
        employee: Option<i64>,
    },

    /// List punch history
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "employee", help = "Employee id (defaults to configuration)")]
        employee: Option<i64>,

        #[arg(long = "today", help = "Show only today's punches")]
        today: bool,
    },

    /// Calculate payroll for a period (current month by default)
    Payroll {
        #[arg(long, short, help = "Payroll month (YYYY-MM); defaults to the current month")]
        period: Option<String>,

        #[arg(long = "employee", help = "Employee id (defaults to configuration)")]
        employee: Option<i64>,

        #[arg(long = "json", help = "Print the result as JSON")]
        json: bool,
    },

    /// Show or set hourly pay rates (owner)
    Rate {
        #[command(subcommand)]
        command: RateCommands,
    },

    /// Manage savings goals
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },

    /// Export punch history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long = "employee", help = "Employee id (defaults to configuration)")]
        employee: Option<i64>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum RateCommands {
    /// Set the hourly and late-night rates
    Set {
        #[arg(long, help = "Hourly rate (currency units per hour)")]
        hourly: f64,

        #[arg(long = "late-night", help = "Late-night rate (22:00-04:00)")]
        late_night: f64,
    },

    /// Show the configured rates
    Show,
}

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Set a new savings goal (archives the previous active goal)
    Set {
        #[arg(long, help = "Target amount (whole currency units)")]
        target: i64,

        #[arg(long, help = "What you are saving for")]
        description: String,

        #[arg(long = "employee", help = "Employee id (defaults to configuration)")]
        employee: Option<i64>,
    },

    /// Show progress toward the active goal
    Progress {
        #[arg(long = "employee", help = "Employee id (defaults to configuration)")]
        employee: Option<i64>,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },
}
