//! `urlsan push <id> <input>` – sanitize a file and replace a remote list.

use anyhow::{bail, Result};
use std::path::Path;
use urlsan_core::config::UrlsanConfig;
use urlsan_core::{listfile, sanitize};

use super::connect;
use crate::cli::RemoteArgs;

pub fn run_push(
    cfg: &UrlsanConfig,
    remote: &RemoteArgs,
    id: u64,
    input: &Path,
    name: Option<String>,
    deploy: bool,
) -> Result<()> {
    let client = connect(cfg, remote)?;
    // Surface auth problems before sanitizing anything.
    client.test_connection()?;

    let lines = listfile::read_lines(input)?;
    let result = sanitize::sanitize_lines(&lines);
    if result.accepted.is_empty() {
        bail!(
            "refusing to push: no entries survived sanitization ({} rejected)",
            result.rejected.len()
        );
    }
    if !result.rejected.is_empty() {
        println!(
            "{} line(s) rejected locally and left out of the push:",
            result.rejected.len()
        );
        for err in &result.rejected {
            println!("  {}", err);
        }
    }

    // Keep the existing name unless the caller renamed the list.
    let name = match name {
        Some(n) => n,
        None => client.get_url_list(id)?.name,
    };

    let urls: Vec<String> = result.accepted.iter().map(|e| e.text.clone()).collect();
    client.replace_url_list(id, &name, &urls)?;
    println!(
        "Replaced list {} ('{}') with {} sanitized URLs ({} duplicates dropped).",
        id,
        name,
        urls.len(),
        result.duplicates
    );

    if deploy {
        client.deploy()?;
        println!("Deployed pending URL list changes.");
    } else {
        println!("Changes are pending; run again with --deploy to activate them.");
    }
    Ok(())
}
