use clap::{Parser, Subcommand};

/// Command-line interface definition for worklogger:
/// track jobs, timers and daily notes backed by SQLite.
#[derive(Parser)]
#[command(
    name = "worklogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track working time per job: categories, start/stop timers, manual intervals and daily notes",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
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
    /// Initialize the database and configuration
    Init,

    /// Register or list categories
    Category {
        #[arg(long = "add", help = "Register a new category with this name")]
        add: Option<String>,

        #[arg(long = "list", help = "List all categories ordered by name")]
        list: bool,
    },

    /// Register or list jobs
    Job {
        #[arg(long = "add", help = "Register a new job with this name")]
        add: Option<String>,

        #[arg(
            long = "category",
            help = "Category the new job belongs to (must already exist)"
        )]
        category: Option<String>,

        #[arg(long = "list", help = "List all jobs grouped by category")]
        list: bool,
    },

    /// Register a finished time interval for a job
    Add {
        /// Job id the interval belongs to
        job_id: i64,

        /// Start of the interval ("YYYY-MM-DD HH:MM")
        start: String,

        /// End of the interval ("YYYY-MM-DD HH:MM")
        end: String,
    },

    /// Revise an existing record: replace its job, start and end
    Revise {
        /// Record id to revise
        record_id: i64,

        /// New job id
        job_id: i64,

        /// New start ("YYYY-MM-DD HH:MM")
        start: String,

        /// New end ("YYYY-MM-DD HH:MM")
        end: String,
    },

    /// Start a timer on a job (one open record per day)
    Start {
        /// Job id to start working on
        job_id: i64,
    },

    /// Stop an open record, setting its end to now
    Stop {
        /// Record id to stop
        record_id: i64,
    },

    /// Show the day report: finished records, open record and note
    Log {
        /// Date to report on (YYYY-MM-DD, defaults to today)
        date: Option<String>,

        #[arg(long = "json", help = "Emit the day report as JSON")]
        json: bool,
    },

    /// Show or save the daily note
    Note {
        /// Date of the note (YYYY-MM-DD, defaults to today)
        date: Option<String>,

        #[arg(long = "set", help = "Save this content as the note for the date")]
        set: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, audit log)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "log", help = "Print rows from the internal audit log")]
        log: bool,
    },
}
