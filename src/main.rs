mod cli;
mod config;
mod error;
mod report;
mod score;
mod types;

use crate::error::NicenessError;
use crate::types::report::ScoreReport;
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Chart => report::OutputFormat::Chart,
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

/// An all-zero weight vector or all-zero value vector still yields a score
/// of 0, but that 0 means "no information" rather than "neutral"; surface
/// it as a warning exit so scripts can tell the two apart.
fn score_exit(report: &ScoreReport) -> i32 {
    let card = &report.card;
    let no_information =
        card.total_weight == 0.0 || card.signals.iter().all(|signal| signal.value == 0.0);
    if no_information {
        eprintln!("warning: score carries no information (all weights or all values are zero)");
        exit_code::WARNINGS
    } else {
        exit_code::SUCCESS
    }
}

fn run() -> Result<i32, NicenessError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let cfg = config::load_config(cmd.config.as_deref())?;
            let request = score::EvalRequest {
                values: cmd.values,
                weights: cmd.weights,
                premium: cmd.premium,
                counts: None,
            };
            let report = score::evaluate(&cfg, &request)?;
            let rendered = report::render(&report, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(score_exit(&report))
        }
        cli::Commands::Trust(cmd) => {
            let cfg = config::load_config(cmd.config.as_deref())?;
            let trust = score::trust::evaluate_trust(&cfg, &cmd.counts)?;
            let rendered = report::render_trust(&trust, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Eval(cmd) => {
            let cfg = config::load_config(cmd.config.as_deref())?;
            let request = score::EvalRequest {
                values: cmd.values,
                weights: cmd.weights,
                premium: cmd.premium,
                counts: Some(cmd.counts),
            };
            let report = score::evaluate(&cfg, &request)?;
            let rendered = report::render(&report, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(score_exit(&report))
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
