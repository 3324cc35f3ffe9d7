//! `urlsan lists` – show the tenant's URL lists.

use anyhow::Result;
use urlsan_core::config::UrlsanConfig;

use super::connect;
use crate::cli::RemoteArgs;

pub fn run_lists(cfg: &UrlsanConfig, remote: &RemoteArgs) -> Result<()> {
    let client = connect(cfg, remote)?;
    let lists = client.list_url_lists()?;
    if lists.is_empty() {
        println!("No URL lists found.");
        return Ok(());
    }

    println!(
        "{:<8} {:<32} {:<24} {:<20} {}",
        "ID", "NAME", "MODIFIED BY", "MODIFIED", "PENDING"
    );
    for l in lists {
        let pending = match l.pending {
            Some(0) => "no",
            Some(_) => "yes",
            None => "-",
        };
        println!(
            "{:<8} {:<32} {:<24} {:<20} {}",
            l.id,
            l.name,
            l.modify_by.as_deref().unwrap_or("-"),
            l.modify_time.as_deref().unwrap_or("-"),
            pending
        );
    }
    Ok(())
}
