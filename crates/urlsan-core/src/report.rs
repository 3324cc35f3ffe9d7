//! Human-readable run summary.
//!
//! Pure string rendering over a [`SanitizeReport`]; the CLI decides whether
//! and where to print it.

use std::collections::HashMap;

use crate::sanitize::SanitizeReport;

/// Render the summary: counts, every rejected line with its reason, the
/// wildcard tally, and a top-10 TLD histogram of the accepted entries.
pub fn render_summary(report: &SanitizeReport) -> String {
    let mut out = String::new();

    out.push_str("Summary:\n");
    out.push_str(&format!("  Lines processed:  {}\n", report.total_lines));
    out.push_str(&format!("  Accepted:         {}\n", report.accepted.len()));
    out.push_str(&format!("  Duplicates:       {}\n", report.duplicates));
    out.push_str(&format!("  Rejected:         {}\n", report.rejected.len()));
    out.push_str(&format!("  Comments/blank:   {}\n", report.skipped));

    let wildcards = report.accepted.iter().filter(|e| e.wildcard).count();
    out.push_str(&format!("  Wildcard entries: {}\n", wildcards));

    if !report.rejected.is_empty() {
        out.push_str("\nRejected lines:\n");
        for err in &report.rejected {
            out.push_str(&format!(
                "  line {}: {} ({})\n",
                err.line_no, err.raw, err.kind
            ));
        }
    }

    let tlds = top_tlds(report, 10);
    if !tlds.is_empty() {
        out.push_str("\nTop TLDs:\n");
        for (tld, count) in tlds {
            out.push_str(&format!("  .{}: {}\n", tld, count));
        }
    }

    out
}

/// Count accepted entries per TLD, most common first. Ties break
/// alphabetically so the output is deterministic.
fn top_tlds(report: &SanitizeReport, limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for entry in &report.accepted {
        let host = entry
            .text
            .strip_prefix("*.")
            .unwrap_or(&entry.text)
            .split('/')
            .next()
            .unwrap_or("");
        if let Some((_, tld)) = host.rsplit_once('.') {
            *counts.entry(tld.to_string()).or_default() += 1;
        }
    }
    let mut tlds: Vec<(String, usize)> = counts.into_iter().collect();
    tlds.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tlds.truncate(limit);
    tlds
}
