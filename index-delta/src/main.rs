mod args;
mod config;
mod error;
mod invariants;
mod models;
mod report;
mod scanner;

use std::{io, process::ExitCode};

use args::CliArgs;
use clap::Parser;
use config::Config;
use error::Result;
use invariants::Timestamp;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "report aborted");
            eprintln!("index-delta: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let config = Config::resolve(args)?;
    let now = Timestamp::now();
    report::report(&config, now, io::stdout().lock())?;
    Ok(())
}

// stdout carries the report, so diagnostics go to stderr
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("index_delta=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
