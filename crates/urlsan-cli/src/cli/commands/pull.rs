//! `urlsan pull <id> <output>` – download a list's raw entries to a file.

use anyhow::{Context, Result};
use std::path::Path;
use urlsan_core::config::UrlsanConfig;

use super::connect;
use crate::cli::RemoteArgs;

pub fn run_pull(cfg: &UrlsanConfig, remote: &RemoteArgs, id: u64, output: &Path) -> Result<()> {
    let client = connect(cfg, remote)?;
    let list = client.get_url_list(id)?;
    let urls = list.data.map(|d| d.urls).unwrap_or_default();

    let mut content = String::new();
    for url in &urls {
        content.push_str(url);
        content.push('\n');
    }
    std::fs::write(output, content)
        .with_context(|| format!("write list file: {}", output.display()))?;

    println!(
        "Wrote {} raw entries from '{}' to {}",
        urls.len(),
        list.name,
        output.display()
    );
    Ok(())
}
