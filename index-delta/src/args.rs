use std::path::PathBuf;

use clap::Parser;
use derive_getters::Getters;

use crate::models::OutputFormat;

/// Flags left unset fall back to the config file, then to built-in defaults.
#[derive(Parser, Debug, Getters)]
#[command(name = "index-delta", version)]
#[command(about = "Report gaps between periodic index requests in a server log", long_about = None)]
pub struct CliArgs {
    /// Log file to scan
    #[arg(long)]
    log_path: Option<PathBuf>,

    /// Client address that issues the periodic request
    #[arg(long)]
    client_ip: Option<String>,

    /// Regex with one capture group holding the timestamp; overrides --client-ip
    #[arg(long)]
    pattern: Option<String>,

    /// strftime format of the captured timestamp
    #[arg(long)]
    timestamp_format: Option<String>,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// TOML file providing any of the above
    #[arg(long)]
    config: Option<PathBuf>,
}
