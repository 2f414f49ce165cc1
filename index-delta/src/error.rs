use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse timestamp {value:?}: {source}")]
    TimestampParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("timestamp {value:?} does not exist in local time")]
    NonexistentLocalTime { value: String },

    #[error("invalid match pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("match pattern must have exactly one capture group, found {found}")]
    PatternCaptures { found: usize },

    #[error("config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("cannot write report: {0}")]
    Output(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
