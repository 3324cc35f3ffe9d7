//! `urlsan show <id>` – show one URL list with its entries.

use anyhow::Result;
use urlsan_core::config::UrlsanConfig;

use super::connect;
use crate::cli::RemoteArgs;

pub fn run_show(cfg: &UrlsanConfig, remote: &RemoteArgs, id: u64) -> Result<()> {
    let client = connect(cfg, remote)?;
    let list = client.get_url_list(id)?;

    println!("ID:          {}", list.id);
    println!("Name:        {}", list.name);
    println!("Modified by: {}", list.modify_by.as_deref().unwrap_or("-"));
    println!("Modified:    {}", list.modify_time.as_deref().unwrap_or("-"));
    println!(
        "Pending:     {}",
        list.pending.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())
    );

    let (list_type, urls) = list
        .data
        .map(|d| (d.list_type, d.urls))
        .unwrap_or_default();
    if !list_type.is_empty() {
        println!("Type:        {}", list_type);
    }

    if urls.is_empty() {
        println!("\nNo URLs in this list.");
    } else {
        println!("\nURLs ({} total):", urls.len());
        for (i, url) in urls.iter().enumerate() {
            println!("  {}. {}", i + 1, url);
        }
    }
    Ok(())
}
