use std::io::Write;

use tracing::info;

use crate::{
    config::Config,
    error::{ReportError, Result},
    invariants::Timestamp,
    models::Delta,
    scanner::{LinePattern, scan_file},
};

/// Pairs each timestamp with the one before it, after reversing file order.
///
/// The first reference point is `now`. Each delta is `reference - matched`,
/// and the matched timestamp becomes the next reference.
pub fn deltas(mut timestamps: Vec<Timestamp>, now: Timestamp) -> Vec<Delta> {
    timestamps.reverse();
    let capacity = timestamps.len();
    let (_, out) = timestamps.into_iter().fold(
        (now, Vec::with_capacity(capacity)),
        |(reference, mut out), matched| {
            out.push(Delta::between(reference, matched));
            (matched, out)
        },
    );
    out
}

/// Scans the configured log and writes one line per delta to `sink`.
pub fn report<W: Write>(config: &Config, now: Timestamp, mut sink: W) -> Result<usize> {
    let pattern = LinePattern::new(config.match_pattern(), config.timestamp_format())?;
    let timestamps = scan_file(config.log_path(), &pattern)?;
    let deltas = deltas(timestamps, now);
    for delta in &deltas {
        writeln!(sink, "{}", delta.render(*config.output_format())).map_err(ReportError::Output)?;
    }
    sink.flush().map_err(ReportError::Output)?;
    info!(count = deltas.len(), path = %config.log_path().display(), "report written");
    Ok(deltas.len())
}
