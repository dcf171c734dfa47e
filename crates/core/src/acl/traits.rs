use async_trait::async_trait;

use super::error::Result;
use super::types::IdentityProvider;

/// Remote access-control API for identity providers.
///
/// Writes are full-record replacements. There is no partial patch and no
/// conditional write, so callers that merge must read first and accept the
/// read-modify-write window between the two calls.
#[async_trait]
pub trait IdentityProviderApi: Send + Sync {
    /// Creates a new identity provider and returns the stored record.
    async fn create_identity_provider(&self, idp: &IdentityProvider) -> Result<IdentityProvider>;

    /// Gets an identity provider by name. `None` means it does not exist.
    async fn read_identity_provider(&self, name: &str) -> Result<Option<IdentityProvider>>;

    /// Lists all identity providers.
    async fn list_identity_providers(&self) -> Result<Vec<IdentityProvider>>;

    /// Replaces the identity provider named by `idp.name`.
    async fn update_identity_provider(&self, idp: &IdentityProvider) -> Result<IdentityProvider>;
}
