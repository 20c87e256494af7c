use crate::export::{ExportFormat, ExportKind, OutputFormat};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for tkdash
#[derive(Parser)]
#[command(
    name = "tkdash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Timekeeping dashboard in the terminal: attendance KPIs, time records, users and activity logs",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.tkdash/tkdash.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(global = true, long = "anchor", value_name = "DATE")]
    pub anchor: Option<String>,

    /// Debug logging on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Date window shared by the listing commands.
#[derive(Args, Clone, Debug, Default)]
pub struct RangeArgs {
    #[arg(
        long = "range",
        value_name = "PRESET",
        help = "today, this-week, this-2-weeks or this-month"
    )]
    pub preset: Option<String>,

    #[arg(long, value_name = "DATE", help = "Custom range start (YYYY-MM-DD)")]
    pub from: Option<String>,

    #[arg(long, value_name = "DATE", help = "Custom range end (YYYY-MM-DD)")]
    pub to: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
pub struct PageArgs {
    #[arg(long, default_value_t = 1, help = "Page number (1-based)")]
    pub page: usize,

    #[arg(long = "page-size", help = "Rows per page (default from config)")]
    pub page_size: Option<usize>,

    #[arg(long = "all", help = "Show every row instead of one page")]
    pub all: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a date-range preset or a custom pair
    Range {
        /// Preset name; omit to list every preset
        preset: Option<String>,

        #[arg(long, value_name = "DATE")]
        from: Option<String>,

        #[arg(long, value_name = "DATE")]
        to: Option<String>,
    },

    /// KPI cards, late trend and optional per-user breakdown
    Overview {
        #[command(flatten)]
        range: RangeArgs,

        #[arg(
            long,
            value_name = "KPI",
            help = "timed-in, not-timed-in, late, on-time, incomplete or violations"
        )]
        breakdown: Option<String>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// List time records
    Records {
        #[command(flatten)]
        range: RangeArgs,

        #[arg(long, short, help = "Filter by employee name")]
        search: Option<String>,

        #[arg(long, help = "on-time, late, absent or incomplete")]
        status: Option<String>,

        #[arg(long, help = "Time-in location: compliant, outside or nodata")]
        location: Option<String>,

        #[command(flatten)]
        page: PageArgs,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// List dashboard users
    Users {
        #[arg(long, short, help = "Filter by name or email")]
        search: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long, help = "active, suspended or inactive")]
        status: Option<String>,

        #[command(flatten)]
        page: PageArgs,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// List activity logs
    Logs {
        #[command(flatten)]
        range: RangeArgs,

        #[arg(long, short, help = "Filter by user, employee, activity or details")]
        search: Option<String>,

        #[arg(long, help = "time-record, user-management, adjustment or system")]
        category: Option<String>,

        #[arg(long, help = "hq, store1, store2, store3 or all")]
        store: Option<String>,

        #[command(flatten)]
        page: PageArgs,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// List generated breaklists and approve or reject pending ones
    Breaklists {
        #[arg(long, short, help = "Filter by store, generator or notification recipient")]
        search: Option<String>,

        #[arg(long, help = "hq, store1, store2, store3 or all")]
        store: Option<String>,

        #[arg(long, help = "pending, approved, rejected or all")]
        status: Option<String>,

        #[arg(long, value_name = "ID", conflicts_with = "reject", help = "Approve a pending breaklist")]
        approve: Option<String>,

        #[arg(long, value_name = "ID", help = "Reject a pending breaklist")]
        reject: Option<String>,

        #[command(flatten)]
        page: PageArgs,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Latest clock location of a record, with map link and geofence check
    Location {
        /// Record id (YYYY-MM-DD-uN)
        id: String,

        #[arg(long = "time-in", help = "Inspect the time-in samples instead of time-out")]
        time_in: bool,
    },

    /// Build a Google Maps link from coordinates or an address
    MapsUrl {
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        lng: Option<f64>,

        #[arg(long)]
        address: Option<String>,
    },

    /// Rank and total breakdown rows read from a JSON file
    Breakdown {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Export a dashboard table to a file
    Export {
        #[arg(long, value_enum, default_value = "records")]
        what: ExportKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        range: RangeArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Inspect or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report missing or unknown keys in the file")]
        check: bool,

        #[arg(long = "init", help = "Write a configuration file with defaults")]
        init: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file with --init")]
        force: bool,
    },
}
