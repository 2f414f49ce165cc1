use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use regex::Regex;
use tracing::{debug, trace};

use crate::{
    error::{ReportError, Result},
    invariants::Timestamp,
};

const LINE_CAPACITY: usize = 512;

/// Compiled line pattern plus the format of its single capture.
#[derive(Debug, Clone)]
pub struct LinePattern {
    regex: Regex,
    timestamp_format: String,
}

impl LinePattern {
    pub fn new(pattern: &str, timestamp_format: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        // captures_len counts the implicit whole-match group
        let found = regex.captures_len() - 1;
        if found != 1 {
            return Err(ReportError::PatternCaptures { found });
        }
        Ok(Self {
            regex,
            timestamp_format: timestamp_format.into(),
        })
    }

    pub fn match_line(&self, line: &str) -> Result<Option<Timestamp>> {
        let Some(capture) = self.regex.captures(line).and_then(|caps| caps.get(1)) else {
            return Ok(None);
        };
        Timestamp::parse(capture.as_str(), &self.timestamp_format).map(Some)
    }
}

/// Collects the timestamp of every matching line, in file order.
///
/// Lines are decoded lossily so stray bytes in a log never abort the scan.
/// `origin` only labels read errors.
pub fn scan<R: BufRead>(mut reader: R, pattern: &LinePattern, origin: &Path) -> Result<Vec<Timestamp>> {
    let mut matches = Vec::new();
    let mut buf = Vec::with_capacity(LINE_CAPACITY);
    let mut line_number = 0usize;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| ReportError::FileAccess {
                path: origin.to_path_buf(),
                source,
            })?;
        if read == 0 {
            break;
        }
        line_number += 1;
        let line = String::from_utf8_lossy(&buf);
        match pattern.match_line(line.trim_end_matches(['\r', '\n']))? {
            Some(timestamp) => {
                trace!(line_number, %timestamp, "matched");
                matches.push(timestamp);
            }
            None => trace!(line_number, "skipped"),
        }
    }
    debug!(lines = line_number, matches = matches.len(), path = %origin.display(), "scan complete");
    Ok(matches)
}

pub fn scan_file(path: &Path, pattern: &LinePattern) -> Result<Vec<Timestamp>> {
    let file = File::open(path).map_err(|source| ReportError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    scan(BufReader::new(file), pattern, path)
}
