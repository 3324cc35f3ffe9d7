//! `urlsan sanitize` – sanitize a URL list file.

use anyhow::Result;
use std::path::Path;
use urlsan_core::{listfile, report, sanitize};

pub fn run_sanitize(input: &Path, output: Option<&Path>, no_summary: bool) -> Result<()> {
    let lines = listfile::read_lines(input)?;
    tracing::info!("processing {} lines from {}", lines.len(), input.display());
    let result = sanitize::sanitize_lines(&lines);

    let out_path = match output {
        Some(p) => p.to_path_buf(),
        None => listfile::default_output_path(input),
    };
    listfile::write_sanitized(&out_path, &result.accepted)?;
    println!(
        "Wrote {} sanitized URLs to {}",
        result.accepted.len(),
        out_path.display()
    );

    if !no_summary {
        print!("{}", report::render_summary(&result));
    }
    Ok(())
}
