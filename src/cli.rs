use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Bridgeday leave planner.
#[derive(Parser)]
#[command(
    name = "bridgeday",
    version,
    about = "Plan paid leave around public holidays for the longest breaks"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Recommend leave days that bridge holidays and weekends.
    Plan(PlanArgs),
    /// Harvest holiday dates from a document and print them as JSON.
    Extract(ExtractArgs),
}

/// Output rendering for `plan`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Arguments for the `plan` subcommand.
#[derive(clap::Args)]
pub struct PlanArgs {
    /// Path to TOML configuration file [default: bridgeday.toml, if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the leave budget from config.
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub leaves: Option<i64>,

    /// Rank by total days off instead of efficiency.
    #[arg(long)]
    pub prefer_longer: bool,

    /// Holiday document to extract dates from (overrides [holidays].file).
    #[arg(long)]
    pub holidays: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `extract` subcommand.
#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Document to extract holiday dates from.
    pub document: PathBuf,

    /// Path to TOML configuration file [default: bridgeday.toml, if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Read ambiguous numeric dates as MM/DD/YYYY.
    #[arg(long)]
    pub month_first: bool,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
