//! List file reading and writing.
//!
//! The only fatal error in a run is failing to read the input file; every
//! per-line problem is recorded in the report instead.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::sanitize::CanonicalEntry;

/// Read an input list file into raw lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read input file: {}", path.display()))?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Write the sanitized list: a header comment block, then one canonical entry
/// per line. The header lines classify as comments, so re-sanitizing the
/// output reproduces it byte for byte.
pub fn write_sanitized(path: &Path, entries: &[CanonicalEntry]) -> Result<()> {
    let mut out = String::new();
    out.push_str("# Sanitized URLs for Netskope\n");
    out.push_str(&format!("# Total URLs: {}\n\n", entries.len()));
    for entry in entries {
        out.push_str(&entry.text);
        out.push('\n');
    }
    fs::write(path, out).with_context(|| format!("write output file: {}", path.display()))
}

/// Default output path for an input file: `<stem>_sanitized.txt` next to it.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("urls");
    input.with_file_name(format!("{stem}_sanitized.txt"))
}
