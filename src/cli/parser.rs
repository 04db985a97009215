use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for vendcal
/// Maintenance console for a vending machine fleet
#[derive(Parser)]
#[command(
    name = "vendcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Vending fleet console: maintenance calendar, work schedule and exports from backend snapshots",
    long_about = None
)]
pub struct Cli {
    /// Machines snapshot (JSON array from GET /api/v1/VendingMachines)
    #[arg(global = true, long = "machines", value_name = "FILE")]
    pub machines: Option<String>,

    /// Maintenance snapshot (JSON array from GET /api/v1/Maintenance)
    #[arg(global = true, long = "maintenance", value_name = "FILE")]
    pub maintenance: Option<String>,

    /// Users snapshot (JSON array from GET /api/v1/Users)
    #[arg(global = true, long = "users", value_name = "FILE")]
    pub users: Option<String>,

    /// Disable terminal colours
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Verbose diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init {
        #[arg(
            long = "reference",
            value_name = "DATE",
            help = "Pin the reference date used for calendar colours (YYYY-MM-DD)"
        )]
        reference: Option<String>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// List the vending machines of the fleet with their maintenance status
    Machines {
        #[arg(long, value_name = "DATE", help = "Reference date (default: config or today)")]
        reference: Option<String>,
    },

    /// List maintenance records
    Maintenance {
        #[arg(long = "machine", value_name = "ID", help = "Only records of this machine")]
        machine: Option<i64>,
    },

    /// Render the maintenance calendar (year by default)
    Calendar {
        #[arg(
            long,
            conflicts_with = "week",
            help = "Calendar year (default: year of the reference date)"
        )]
        year: Option<i32>,

        #[arg(long, help = "Show a single month (1-12)")]
        month: Option<u32>,

        #[arg(
            long,
            value_name = "DATE",
            conflicts_with = "month",
            help = "Show the week containing DATE (YYYY-MM-DD)"
        )]
        week: Option<String>,

        #[arg(long = "machine", value_name = "ID", help = "Only events of this machine")]
        machine: Option<i64>,

        #[arg(long, value_name = "DATE", help = "Reference date (default: config or today)")]
        reference: Option<String>,

        #[arg(long = "details", help = "List the events of every coloured day")]
        details: bool,
    },

    /// Show the maintenance events of one day
    Day {
        /// Day to inspect (YYYY-MM-DD)
        date: String,

        #[arg(long = "machine", value_name = "ID")]
        machine: Option<i64>,

        #[arg(long, value_name = "DATE")]
        reference: Option<String>,
    },

    /// Show the per-employee work schedule
    Schedule,

    /// Export calendar events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range (start:end)"
        )]
        range: Option<String>,

        #[arg(long, value_name = "DATE")]
        reference: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
