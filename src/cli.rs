use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "niceness",
    version,
    about = "Weighted rating score and trust level calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the weighted score from raw signal values
    Score(ScoreCommand),
    /// Classify the trust level from per-source rating counts
    Trust(TrustCommand),
    /// Score and trust level in one report
    Eval(EvalCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Chart,
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Raw signal values, comma separated, one per configured signal
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub values: Vec<f64>,

    /// Override the configured per-signal weights
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub weights: Option<Vec<f64>>,

    /// Apply premium damping to signals that define it
    #[arg(long)]
    pub premium: bool,

    /// Config file (defaults to ./niceness.toml, then built-in defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "chart")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct TrustCommand {
    /// Rating counts, comma separated, one per configured trust source
    #[arg(long, value_delimiter = ',', required = true)]
    pub counts: Vec<u32>,

    /// Config file (defaults to ./niceness.toml, then built-in defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "chart")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct EvalCommand {
    /// Raw signal values, comma separated, one per configured signal
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub values: Vec<f64>,

    /// Override the configured per-signal weights
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub weights: Option<Vec<f64>>,

    /// Rating counts, comma separated, one per configured trust source
    #[arg(long, value_delimiter = ',', required = true)]
    pub counts: Vec<u32>,

    /// Apply premium damping to signals that define it
    #[arg(long)]
    pub premium: bool,

    /// Config file (defaults to ./niceness.toml, then built-in defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "chart")]
    pub format: ReportFormat,
}
