use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use derive_more::{AsRef, Debug, Display, From};

use crate::error::{ReportError, Result};

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ctime style, e.g. "Wed Jun 23 10:15:00 2021"
const READABLE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// A matched event time, interpreted in the local time zone.
#[derive(Debug, Display, AsRef, From, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Local>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Local::now())
    }

    /// Parses `value` with a strftime `format` that carries no offset.
    ///
    /// Ambiguous wall-clock times (DST fall-back) resolve to the earlier
    /// instant; times inside a DST gap are rejected.
    pub fn parse(value: &str, format: &str) -> Result<Self> {
        let naive = NaiveDateTime::parse_from_str(value, format).map_err(|source| {
            ReportError::TimestampParse {
                value: value.into(),
                source,
            }
        })?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(Self)
            .ok_or_else(|| ReportError::NonexistentLocalTime {
                value: value.into(),
            })
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    pub fn readable(&self) -> String {
        self.0.format(READABLE_FORMAT).to_string()
    }
}
