use clap::ValueEnum;
use serde::Deserialize;

use crate::invariants::Timestamp;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Seconds only
    #[default]
    Terse,
    /// Seconds followed by both endpoints
    Verbose,
}

/// Gap between a reference point and the next matched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta {
    pub seconds: i64,
    pub reference: Timestamp,
    pub matched: Timestamp,
}

impl Delta {
    pub fn between(reference: Timestamp, matched: Timestamp) -> Self {
        Self {
            seconds: reference.epoch_seconds() - matched.epoch_seconds(),
            reference,
            matched,
        }
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Terse => self.seconds.to_string(),
            OutputFormat::Verbose => format!(
                "{}: {}, {}",
                self.seconds,
                self.reference.readable(),
                self.matched.readable()
            ),
        }
    }
}
