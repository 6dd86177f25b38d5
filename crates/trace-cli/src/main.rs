//! TraceCode CLI
//!
//! Traces development files to the deployed files they became.

mod cli;
mod error;
mod report;

use clap::Parser;
use colored::Colorize;
use trace_core::{AnalysisOptions, DeploymentAnalysis};
use trace_scan::{load_codebase, load_options};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::Cli;
use error::{CliError, Result};
use report::{Report, ReportOptions};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let options = match &cli.config {
        Some(path) => load_options(path)?,
        None => AnalysisOptions::default(),
    };
    tracing::debug!(?options, "Analysis options");

    let develop = load_codebase(&cli.develop)?;
    let deploy = load_codebase(&cli.deploy)?;

    let results = DeploymentAnalysis::new(develop.resources(), deploy.resources())
        .with_options(options)
        .run();

    let output = cli.output_path();
    Report::new(ReportOptions::from(&cli), &results).write(output.as_deref())?;
    if let Some(path) = output {
        tracing::info!(path = %path.display(), traced = results.len(), "Report written");
    }
    Ok(())
}

/// Log to stderr so stdout stays a clean JSON document.
fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
    tracing::debug!("Verbose mode enabled");
    Ok(())
}
