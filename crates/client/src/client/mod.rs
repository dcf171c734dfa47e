//! HTTP client for the access-control API.

pub mod idp;
pub mod memory;

use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

pub use memory::InMemoryIdentityProviders;

/// HTTP client for the access-control API.
#[derive(Debug, Clone)]
pub struct AclClient {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl AclClient {
    /// Create a new client from connection settings.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.http_addr.clone(),
            token: config.token.clone(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a URL for an endpoint. `path` is relative so any prefix in the
    /// configured address is kept.
    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|source| ClientError::InvalidAddress {
                addr: format!("{}{}", self.base_url, path),
                source,
            })
    }

    /// Start a request, attaching the ACL token when one is configured.
    fn request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Handle error responses.
    ///
    /// A 404 is reported as [`ClientError::NotFound`] for `name`.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        name: &str,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        } else if status == reqwest::StatusCode::NOT_FOUND {
            Err(ClientError::NotFound {
                name: name.to_string(),
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: message.trim().to_string(),
            })
        }
    }
}
