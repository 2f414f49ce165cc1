use std::{
    fs,
    path::{Path, PathBuf},
};

use derive_getters::Getters;
use serde::Deserialize;
use tracing::debug;

use crate::{
    args::CliArgs,
    error::{ReportError, Result},
    invariants::DEFAULT_TIMESTAMP_FORMAT,
    models::OutputFormat,
};

pub const DEFAULT_LOG_PATH: &str = "log/production.log";
pub const DEFAULT_CLIENT_IP: &str = "127.0.0.1";

/// Pattern for the monitored request issued from `client_ip`, anchored at line start.
pub fn default_pattern(client_ip: &str) -> String {
    format!(
        r"^Processing ObserverController#index \(for {} at (\d{{4}}-\d{{2}}-\d{{2}} \d{{2}}:\d{{2}}:\d{{2}})\)",
        regex::escape(client_ip)
    )
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    log_path: Option<PathBuf>,
    client_ip: Option<String>,
    match_pattern: Option<String>,
    timestamp_format: Option<String>,
    output_format: Option<OutputFormat>,
}

impl ConfigFile {
    fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ReportError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| ReportError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Config {
    log_path: PathBuf,
    match_pattern: String,
    timestamp_format: String,
    output_format: OutputFormat,
}

impl Config {
    /// Command-line flags win over the config file, which wins over defaults.
    pub fn resolve(args: &CliArgs) -> Result<Self> {
        let file = match args.config() {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let match_pattern = match args.pattern().clone().or(file.match_pattern) {
            Some(pattern) => pattern,
            None => {
                let ip = args.client_ip().clone().or(file.client_ip);
                default_pattern(ip.as_deref().unwrap_or(DEFAULT_CLIENT_IP))
            }
        };

        let config = Self {
            log_path: args
                .log_path()
                .clone()
                .or(file.log_path)
                .unwrap_or_else(|| DEFAULT_LOG_PATH.into()),
            match_pattern,
            timestamp_format: args
                .timestamp_format()
                .clone()
                .or(file.timestamp_format)
                .unwrap_or_else(|| DEFAULT_TIMESTAMP_FORMAT.into()),
            output_format: (*args.format())
                .or(file.output_format)
                .unwrap_or_default(),
        };
        debug!(?config, "resolved config");
        Ok(config)
    }
}
