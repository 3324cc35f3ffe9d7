//! Subcommand implementations.

mod completions;
mod lists;
mod pull;
mod push;
mod sanitize;
mod show;

pub use completions::run_completions;
pub use lists::run_lists;
pub use pull::run_pull;
pub use push::run_push;
pub use sanitize::run_sanitize;
pub use show::run_show;

use anyhow::{bail, Context, Result};
use urlsan_core::config::UrlsanConfig;
use urlsan_core::netskope::NetskopeClient;

use crate::cli::RemoteArgs;

/// Env var holding the bearer token when `--token-file` is not given.
const TOKEN_ENV: &str = "URLSAN_TOKEN";

/// Build an authenticated client from CLI flags and config.
pub(crate) fn connect(cfg: &UrlsanConfig, remote: &RemoteArgs) -> Result<NetskopeClient> {
    let tenant = remote
        .tenant
        .clone()
        .or_else(|| cfg.tenant_fqdn.clone())
        .context("no tenant configured; pass --tenant or set tenant_fqdn in the config file")?;

    let token = match &remote.token_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read token file: {}", path.display()))?,
        None => std::env::var(TOKEN_ENV)
            .with_context(|| format!("no bearer token; set ${TOKEN_ENV} or pass --token-file"))?,
    };
    let token = token.trim();
    if token.is_empty() {
        bail!("bearer token is empty");
    }

    let client = NetskopeClient::new(&tenant, token, cfg)?;
    tracing::debug!("connecting to {}", client.base_url());
    Ok(client)
}
