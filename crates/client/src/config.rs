//! Connection configuration for the access-control API.

use std::time::Duration;

use url::Url;

use crate::cli::ConnectionArgs;
use crate::error::{ClientError, Result};

/// Default address of the access-control HTTP API.
pub const DEFAULT_HTTP_ADDR: &str = "http://127.0.0.1:8500";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved connection settings shared by every command.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the HTTP API.
    pub http_addr: Url,
    /// ACL token sent with every request.
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build a config for `addr` with no token and the default timeout.
    pub fn new(addr: &str) -> Result<Self> {
        Ok(Self {
            http_addr: parse_http_addr(addr)?,
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Build a config from the global connection flags.
    pub fn from_args(args: &ConnectionArgs) -> Result<Self> {
        Ok(Self {
            http_addr: parse_http_addr(&args.http_addr)?,
            token: args.token.clone().filter(|t| !t.is_empty()),
            timeout: Duration::from_secs(args.timeout_secs),
        })
    }

    /// Sets the ACL token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Parse an HTTP address, defaulting to `http://` when no scheme is given.
///
/// The returned URL always ends with `/` so endpoint paths join under any
/// path prefix in the address.
pub fn parse_http_addr(addr: &str) -> Result<Url> {
    let with_scheme = if addr.contains("://") {
        addr.to_string()
    } else {
        format!("http://{addr}")
    };
    let mut url = Url::parse(&with_scheme).map_err(|source| ClientError::InvalidAddress {
        addr: addr.to_string(),
        source,
    })?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
