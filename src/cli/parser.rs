use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small work-hours log: add, edit, search and analyze entries stored as JSON",
    long_about = None
)]
pub struct Cli {
    /// Override data file path (useful for tests or a second log)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty data file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add a work entry
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        start: String,

        /// End time (HH:MM)
        end: String,

        #[arg(long = "project", short = 'p', help = "Project label for this entry")]
        project: Option<String>,
    },

    /// List entries, optionally only those of one date
    List {
        #[arg(long = "date", short = 'd', help = "Show only entries for this date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Change start and end time of an entry
    Edit {
        /// Entry number as shown by `list`
        index: usize,

        /// New start time (HH:MM)
        start: String,

        /// New end time (HH:MM)
        end: String,
    },

    /// Delete an entry
    Del {
        /// Entry number as shown by `list`
        index: usize,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show entries that lasted at least the given number of hours
    Filter {
        #[arg(long = "min-hours", value_name = "HOURS", allow_hyphen_values = true)]
        min_hours: String,
    },

    /// Show total, average and per-month hours
    Analyze,

    /// Show hours per day and write them as a bar chart (PDF)
    Plot {
        #[arg(long, value_name = "FILE", help = "Output file (default: chart_file from config)")]
        file: Option<String>,
    },

    /// Export entries to CSV
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Import entries from CSV (invalid rows are skipped)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}
