//! Error taxonomy for the Netskope API client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetskopeError {
    #[error("authentication failed, check your bearer token")]
    AuthFailed,
    #[error("access forbidden, check your permissions")]
    Forbidden,
    #[error("URL list with id {0} not found")]
    NotFound(u64),
    #[error("API request failed with status code {0}")]
    UnexpectedStatus(u32),
    #[error("request error: {0}")]
    Transport(#[from] curl::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid tenant FQDN: {0}")]
    InvalidTenant(String),
}
