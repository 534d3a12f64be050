use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "riskcycle",
    version,
    about = "Bounded risk aggregation and cyclic time-of-day distance"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory searched for riskcycle.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate a JSON array of groups into one bounded score
    Aggregate(AggregateCommand),
    /// Aggregate a JSON array of pre-computed group means
    Means(MeansCommand),
    /// Group flat observation records by id and aggregate them
    Records(RecordsCommand),
    /// Encode a time of day as unit-circle coordinates
    Encode(EncodeCommand),
    /// Shortest distance in hours between two times of day
    Distance(DistanceCommand),
    /// Write a seeded synthetic dataset of groups
    Generate(GenerateCommand),
    /// Rank net-worth records by threat score
    Wealth(WealthCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct BoundsArgs {
    /// Override the configured lower score bound
    #[arg(long, allow_negative_numbers = true)]
    pub low: Option<f64>,
    /// Override the configured upper score bound
    #[arg(long, allow_negative_numbers = true)]
    pub high: Option<f64>,
}

#[derive(Args)]
pub struct AggregateCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Skip the observation range check
    #[arg(long)]
    pub no_validate: bool,
    #[command(flatten)]
    pub bounds: BoundsArgs,
}

#[derive(Args)]
pub struct MeansCommand {
    pub path: PathBuf,
    #[command(flatten)]
    pub bounds: BoundsArgs,
}

#[derive(Args)]
pub struct RecordsCommand {
    pub path: PathBuf,
    /// JSON object mapping group id to member count
    #[arg(long)]
    pub sizes: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[command(flatten)]
    pub bounds: BoundsArgs,
}

#[derive(Args)]
pub struct EncodeCommand {
    #[arg(allow_negative_numbers = true)]
    pub hours: f64,
}

#[derive(Args)]
pub struct DistanceCommand {
    #[arg(allow_negative_numbers = true)]
    pub first: f64,
    #[arg(allow_negative_numbers = true)]
    pub second: f64,
}

#[derive(Args)]
pub struct GenerateCommand {
    #[arg(long)]
    pub groups: Option<usize>,
    #[arg(long)]
    pub seed: Option<u64>,
    /// Output file; prints to stdout when absent
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct WealthCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub top: Option<usize>,
}
