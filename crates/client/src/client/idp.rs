//! Identity provider API operations.

use async_trait::async_trait;
use idpctl_core::acl::{self, IdentityProvider, IdentityProviderApi};
use reqwest::Method;
use url::Url;

use super::AclClient;
use crate::error::{ClientError, Result};

impl AclClient {
    /// URL of a single identity provider, with `name` percent-encoded as one segment.
    fn idp_url(&self, name: &str) -> Result<Url> {
        let mut url = self.url("v1/acl/idp")?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidAddress {
                addr: self.base_url.to_string(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            })?
            .push(name);
        Ok(url)
    }

    /// Create a new identity provider.
    pub async fn create_idp(&self, idp: &IdentityProvider) -> Result<IdentityProvider> {
        tracing::debug!(name = %idp.name, "creating identity provider");
        let response = self
            .request(Method::PUT, self.url("v1/acl/idp")?)
            .json(idp)
            .send()
            .await?;
        self.handle_response(response, &idp.name).await
    }

    /// Get identity provider by name. Returns `None` when it does not exist.
    pub async fn read_idp(&self, name: &str) -> Result<Option<IdentityProvider>> {
        tracing::debug!(%name, "reading identity provider");
        let response = self.request(Method::GET, self.idp_url(name)?).send().await?;
        match self.handle_response(response, name).await {
            Ok(idp) => Ok(Some(idp)),
            Err(ClientError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// List all identity providers.
    pub async fn list_idps(&self) -> Result<Vec<IdentityProvider>> {
        tracing::debug!("listing identity providers");
        let response = self
            .request(Method::GET, self.url("v1/acl/idps")?)
            .send()
            .await?;
        self.handle_response(response, "").await
    }

    /// Replace an identity provider.
    pub async fn update_idp(&self, idp: &IdentityProvider) -> Result<IdentityProvider> {
        tracing::debug!(name = %idp.name, "updating identity provider");
        let response = self
            .request(Method::PUT, self.idp_url(&idp.name)?)
            .json(idp)
            .send()
            .await?;
        self.handle_response(response, &idp.name).await
    }
}

#[async_trait]
impl IdentityProviderApi for AclClient {
    async fn create_identity_provider(
        &self,
        idp: &IdentityProvider,
    ) -> acl::Result<IdentityProvider> {
        Ok(self.create_idp(idp).await?)
    }

    async fn read_identity_provider(&self, name: &str) -> acl::Result<Option<IdentityProvider>> {
        Ok(self.read_idp(name).await?)
    }

    async fn list_identity_providers(&self) -> acl::Result<Vec<IdentityProvider>> {
        Ok(self.list_idps().await?)
    }

    async fn update_identity_provider(
        &self,
        idp: &IdentityProvider,
    ) -> acl::Result<IdentityProvider> {
        Ok(self.update_idp(idp).await?)
    }
}
