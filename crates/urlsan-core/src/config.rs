use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/urlsan/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlsanConfig {
    /// Netskope tenant FQDN (e.g. "tenant.goskope.com"). The CLI `--tenant`
    /// flag overrides this.
    #[serde(default)]
    pub tenant_fqdn: Option<String>,
    /// TCP connect timeout for API requests, in seconds.
    pub connect_timeout_secs: u64,
    /// Total per-request timeout for API requests, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for UrlsanConfig {
    fn default() -> Self {
        Self {
            tenant_fqdn: None,
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlsan")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlsanConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlsanConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UrlsanConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UrlsanConfig::default();
        assert!(cfg.tenant_fqdn.is_none());
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.request_timeout_secs, 30);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrlsanConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrlsanConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
        assert_eq!(parsed.request_timeout_secs, cfg.request_timeout_secs);
    }

    #[test]
    fn config_toml_with_tenant() {
        let toml = r#"
            tenant_fqdn = "tenant.goskope.com"
            connect_timeout_secs = 5
            request_timeout_secs = 60
        "#;
        let cfg: UrlsanConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.tenant_fqdn.as_deref(), Some("tenant.goskope.com"));
        assert_eq!(cfg.connect_timeout_secs, 5);
        assert_eq!(cfg.request_timeout_secs, 60);
    }

    #[test]
    fn config_toml_tenant_is_optional() {
        let toml = r#"
            connect_timeout_secs = 15
            request_timeout_secs = 30
        "#;
        let cfg: UrlsanConfig = toml::from_str(toml).unwrap();
        assert!(cfg.tenant_fqdn.is_none());
    }
}
