use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to a JSON dashboard configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the live dashboard feed until interrupted
    Dashboard(DashboardArgs),
    /// Search the record collection
    Search(SearchArgs),
    /// Show the metrics snapshot
    Metrics(FeedArgs),
    /// Show the top alerts
    Alerts(AlertsArgs),
    /// Show the hourly activity histogram
    Activity(FeedArgs),
    /// Build the investigation view for a record
    Investigate(InvestigateArgs),
    /// Export a record as JSON
    Export(ExportArgs),
    /// Manage investigation notes
    Notes {
        #[command(subcommand)]
        command: NotesCommands,
    },
    /// Show version information
    Version,
}

#[derive(Parser, Debug)]
pub struct DashboardArgs {
    /// RNG seed for the synthetic record feed
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Shared options for one-shot commands that materialize a record collection
/// (the seeded samples plus optional synthetic records).
#[derive(Parser, Debug)]
pub struct FeedArgs {
    /// Number of synthetic records to generate on top of the samples
    #[arg(short, long, default_value_t = 0)]
    pub generate: usize,

    /// RNG seed for the synthetic records
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub feed: FeedArgs,

    /// Free-text query matched against source, event type and message
    #[arg(short, long)]
    pub query: Option<String>,

    /// Time range to look back over (1h, 24h, 7d, 30d)
    #[arg(short, long, default_value = "24h")]
    pub time_range: String,

    /// Severity filter (all, low, medium, high, critical)
    #[arg(long, default_value = "all")]
    pub severity: String,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

#[derive(Parser, Debug)]
pub struct AlertsArgs {
    #[command(flatten)]
    pub feed: FeedArgs,

    /// Maximum number of alerts to show
    #[arg(long, default_value_t = 5)]
    pub limit: usize,
}

#[derive(Parser, Debug)]
pub struct InvestigateArgs {
    #[command(flatten)]
    pub feed: FeedArgs,

    /// Position of the record in the collection (most recent first)
    #[arg(short, long, default_value_t = 0)]
    pub index: usize,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub feed: FeedArgs,

    /// Position of the record in the collection (most recent first)
    #[arg(short, long, default_value_t = 0)]
    pub index: usize,

    /// Write to this path instead of the default log_<id>.json
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Subcommand, Debug)]
pub enum NotesCommands {
    /// Save a note for a record
    Save {
        /// Record id the note belongs to
        record_id: String,
        /// Note text
        text: String,
    },
    /// Show the note for a record
    Show {
        /// Record id to look up
        record_id: String,
    },
    /// Delete the note for a record
    Delete {
        /// Record id to delete the note for
        record_id: String,
    },
}
