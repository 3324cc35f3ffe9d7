//! Netskope URL-list sanitization pipeline.
//!
//! Each raw line flows classifier → parser → wildcard/hostname validators →
//! path sanitizer → canonicalizer → deduplicator. The first failure for a
//! line is terminal for that line; processing always continues to the next.

mod canonical;
mod classify;
mod collect;
mod error;
mod host;
mod parse;
mod path;
mod wildcard;

pub use canonical::CanonicalEntry;
pub use classify::{classify_line, LineClass};
pub use collect::Collector;
pub use error::{LineError, RejectKind};
pub use host::validate_host;

pub(crate) use parse::strip_scheme;

/// Everything a single run produced: ordered unique entries, per-line
/// rejections, and the bookkeeping counts the summary reports.
#[derive(Debug, Default)]
pub struct SanitizeReport {
    /// Accepted entries in first-seen order.
    pub accepted: Vec<CanonicalEntry>,
    /// Rejected lines in input order.
    pub rejected: Vec<LineError>,
    /// Accepted-then-dropped duplicates.
    pub duplicates: usize,
    /// Comment and blank lines.
    pub skipped: usize,
    /// Total input lines seen.
    pub total_lines: usize,
}

/// Run the full pipeline over one candidate's trimmed text.
pub fn sanitize_entry(text: &str) -> Result<CanonicalEntry, RejectKind> {
    let parsed = parse::parse_entry(text)?;
    let wc = wildcard::check_wildcard(parsed.host)?;
    host::validate_host(wc.rest)?;
    let path = path::sanitize_path(parsed.path);
    Ok(canonical::canonicalize(wc.rest, wc.wildcard, &path))
}

/// Sanitize a sequence of raw input lines in one pass.
///
/// The deduplication set lives inside the per-run [`Collector`]; nothing
/// persists across calls.
pub fn sanitize_lines<I>(lines: I) -> SanitizeReport
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut collector = Collector::new();
    let mut report = SanitizeReport::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        report.total_lines += 1;

        let text = match classify::classify_line(line.as_ref()) {
            LineClass::Blank | LineClass::Comment => {
                report.skipped += 1;
                continue;
            }
            LineClass::Candidate(text) => text,
        };

        match sanitize_entry(text) {
            Ok(entry) => {
                if !collector.push(entry) {
                    tracing::debug!("line {}: duplicate dropped: {}", line_no, text);
                }
            }
            Err(kind) => {
                tracing::debug!("line {}: rejected: {}", line_no, kind);
                report.rejected.push(LineError {
                    line_no,
                    raw: text.to_string(),
                    kind,
                });
            }
        }
    }

    let (accepted, duplicates) = collector.into_parts();
    report.accepted = accepted;
    report.duplicates = duplicates;
    report
}
