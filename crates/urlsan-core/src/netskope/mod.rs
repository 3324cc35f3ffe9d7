//! Netskope tenant API client for URL-list management.
//!
//! Talks to `/api/v2/policy/urllist` with a bearer token over curl. The
//! client moves plain text entries in and out; sanitization stays in
//! [`crate::sanitize`] and never happens here.

mod error;
mod types;

pub use error::NetskopeError;
pub use types::{UrlList, UrlListData, UrlListPayload, UrlListsResponse};

use std::time::Duration;
use url::Url;

use crate::config::UrlsanConfig;
use crate::sanitize;

const URLLIST_PATH: &str = "/api/v2/policy/urllist";

/// Validate and normalize a tenant FQDN: scheme and trailing slashes are
/// stripped, then the remainder must pass the hostname label rules.
pub fn validate_tenant_fqdn(input: &str) -> Result<String, NetskopeError> {
    let fqdn = sanitize::strip_scheme(input.trim()).trim_end_matches('/');
    sanitize::validate_host(fqdn)
        .map_err(|kind| NetskopeError::InvalidTenant(format!("{}: {}", input.trim(), kind)))?;
    Ok(fqdn.to_string())
}

/// Authenticated client bound to one tenant.
pub struct NetskopeClient {
    base: Url,
    token: String,
    connect_timeout: Duration,
    request_timeout: Duration,
}

enum Method<'a> {
    Get,
    Put(&'a [u8]),
    Post(&'a [u8]),
}

impl NetskopeClient {
    pub fn new(
        tenant_fqdn: &str,
        bearer_token: &str,
        cfg: &UrlsanConfig,
    ) -> Result<Self, NetskopeError> {
        let fqdn = validate_tenant_fqdn(tenant_fqdn)?;
        let base = Url::parse(&format!("https://{fqdn}"))
            .map_err(|e| NetskopeError::InvalidTenant(format!("{fqdn}: {e}")))?;
        Ok(Self {
            base,
            token: bearer_token.to_string(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            request_timeout: Duration::from_secs(cfg.request_timeout_secs),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Probe the tenant: a list-all round trip that surfaces auth problems
    /// before any real work.
    pub fn test_connection(&self) -> Result<(), NetskopeError> {
        let (code, _) = self.request(URLLIST_PATH, Method::Get)?;
        match code {
            200 => Ok(()),
            401 => Err(NetskopeError::AuthFailed),
            403 => Err(NetskopeError::Forbidden),
            other => Err(NetskopeError::UnexpectedStatus(other)),
        }
    }

    /// Fetch all URL lists defined on the tenant.
    pub fn list_url_lists(&self) -> Result<Vec<UrlList>, NetskopeError> {
        let (code, body) = self.request(URLLIST_PATH, Method::Get)?;
        match code {
            200 => {
                let resp: UrlListsResponse = serde_json::from_slice(&body)?;
                Ok(resp.into_lists())
            }
            401 => Err(NetskopeError::AuthFailed),
            403 => Err(NetskopeError::Forbidden),
            other => Err(NetskopeError::UnexpectedStatus(other)),
        }
    }

    /// Fetch one URL list, including its entries.
    pub fn get_url_list(&self, id: u64) -> Result<UrlList, NetskopeError> {
        let (code, body) = self.request(&format!("{URLLIST_PATH}/{id}"), Method::Get)?;
        match code {
            200 => Ok(serde_json::from_slice(&body)?),
            401 => Err(NetskopeError::AuthFailed),
            403 => Err(NetskopeError::Forbidden),
            404 => Err(NetskopeError::NotFound(id)),
            other => Err(NetskopeError::UnexpectedStatus(other)),
        }
    }

    /// Replace a list's name and entries. The change stays pending on the
    /// tenant until [`deploy`](Self::deploy) runs.
    pub fn replace_url_list(
        &self,
        id: u64,
        name: &str,
        urls: &[String],
    ) -> Result<(), NetskopeError> {
        let payload = UrlListPayload {
            name: name.to_string(),
            data: UrlListData {
                list_type: "exact".to_string(),
                urls: urls.to_vec(),
            },
        };
        let body = serde_json::to_vec(&payload)?;
        let (code, _) =
            self.request(&format!("{URLLIST_PATH}/{id}"), Method::Put(&body))?;
        match code {
            200..=299 => {
                tracing::info!("replaced URL list {} with {} entries", id, urls.len());
                Ok(())
            }
            401 => Err(NetskopeError::AuthFailed),
            403 => Err(NetskopeError::Forbidden),
            404 => Err(NetskopeError::NotFound(id)),
            other => Err(NetskopeError::UnexpectedStatus(other)),
        }
    }

    /// Activate all pending URL-list changes on the tenant.
    pub fn deploy(&self) -> Result<(), NetskopeError> {
        let (code, _) = self.request(&format!("{URLLIST_PATH}/deploy"), Method::Post(b"{}"))?;
        match code {
            200..=299 => {
                tracing::info!("deployed pending URL list changes");
                Ok(())
            }
            401 => Err(NetskopeError::AuthFailed),
            403 => Err(NetskopeError::Forbidden),
            other => Err(NetskopeError::UnexpectedStatus(other)),
        }
    }

    /// One curl round trip; returns status code and response body.
    fn request(&self, path: &str, method: Method<'_>) -> Result<(u32, Vec<u8>), NetskopeError> {
        let url = self
            .base
            .join(path)
            .map_err(|e| NetskopeError::InvalidTenant(format!("{}: {e}", self.base)))?;

        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.request_timeout)?;

        let mut list = curl::easy::List::new();
        list.append(&format!("Authorization: Bearer {}", self.token))?;
        list.append("Content-Type: application/json")?;
        easy.http_headers(list)?;

        match method {
            Method::Get => {}
            Method::Put(data) => {
                easy.post(true)?;
                easy.post_fields_copy(data)?;
                easy.custom_request("PUT")?;
            }
            Method::Post(data) => {
                easy.post(true)?;
                easy.post_fields_copy(data)?;
            }
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        tracing::debug!("{} -> HTTP {}", url, code);
        Ok((code, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenant_fqdn_accepts_plain_domains() {
        assert_eq!(
            validate_tenant_fqdn("tenant.goskope.com").unwrap(),
            "tenant.goskope.com"
        );
    }

    #[test]
    fn tenant_fqdn_strips_scheme_and_trailing_slash() {
        assert_eq!(
            validate_tenant_fqdn("https://tenant.goskope.com/").unwrap(),
            "tenant.goskope.com"
        );
        assert_eq!(
            validate_tenant_fqdn("  http://tenant.goskope.com  ").unwrap(),
            "tenant.goskope.com"
        );
    }

    #[test]
    fn tenant_fqdn_rejects_garbage() {
        assert!(validate_tenant_fqdn("").is_err());
        assert!(validate_tenant_fqdn("tenant dot com").is_err());
        assert!(validate_tenant_fqdn("tenant.goskope.com:443/extra").is_err());
    }

    #[test]
    fn client_builds_base_url_from_fqdn() {
        let cfg = UrlsanConfig::default();
        let client = NetskopeClient::new("https://tenant.goskope.com/", "token", &cfg).unwrap();
        assert_eq!(client.base_url().as_str(), "https://tenant.goskope.com/");
    }

    #[test]
    fn bad_tenant_fails_construction() {
        let cfg = UrlsanConfig::default();
        assert!(matches!(
            NetskopeClient::new("not a tenant", "token", &cfg),
            Err(NetskopeError::InvalidTenant(_))
        ));
    }
}
