//! Request types for identity provider writes.
//!
//! These carry raw, possibly absent, flag values and turn them into records.
//! Following the Functional Core pattern, everything here is pure: the value-or-`@file`
//! indirection and the remote calls happen in the shell.

use super::error::IdentityProviderError;
use super::types::{IdentityProvider, IdentityProviderType};

/// An empty flag value counts as not supplied.
fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn require(value: Option<String>, flag: &'static str) -> Result<String, IdentityProviderError> {
    supplied(value).ok_or(IdentityProviderError::MissingFlag(flag))
}

/// Raw input for creating an identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateIdentityProviderRequest {
    pub idp_type: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub kubernetes_host: Option<String>,
    pub kubernetes_ca_cert: Option<String>,
    pub kubernetes_service_account_jwt: Option<String>,
}

impl CreateIdentityProviderRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identity provider type.
    pub fn with_type(mut self, idp_type: impl Into<String>) -> Self {
        self.idp_type = Some(idp_type.into());
        self
    }

    /// Set the identity provider name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the Kubernetes API server URL.
    pub fn with_kubernetes_host(mut self, host: impl Into<String>) -> Self {
        self.kubernetes_host = Some(host.into());
        self
    }

    /// Set the Kubernetes CA certificate.
    pub fn with_kubernetes_ca_cert(mut self, ca_cert: impl Into<String>) -> Self {
        self.kubernetes_ca_cert = Some(ca_cert.into());
        self
    }

    /// Set the service account JWT used for token review.
    pub fn with_kubernetes_service_account_jwt(mut self, jwt: impl Into<String>) -> Self {
        self.kubernetes_service_account_jwt = Some(jwt.into());
        self
    }

    /// Validate the request and build the record to create.
    ///
    /// Checks run in flag order and the first failure is returned: type, name,
    /// supported type, then the fields the type requires.
    pub fn into_identity_provider(self) -> Result<IdentityProvider, IdentityProviderError> {
        let idp_type = require(self.idp_type, "type")?;
        let name = require(self.name, "name")?;
        let idp_type: IdentityProviderType = idp_type.parse()?;

        let idp = match idp_type {
            IdentityProviderType::Kubernetes => IdentityProvider::kubernetes(
                name,
                require(self.kubernetes_host, "kubernetes-host")?,
                require(self.kubernetes_ca_cert, "kubernetes-ca-cert")?,
                require(
                    self.kubernetes_service_account_jwt,
                    "kubernetes-service-account-jwt",
                )?,
            ),
        };

        Ok(IdentityProvider {
            description: supplied(self.description),
            ..idp
        })
    }
}

/// How an update combines flags with the stored record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// Fetch the stored record and overwrite only the supplied fields.
    #[default]
    Merge,
    /// Build the whole record from flags without reading the stored one.
    Replace,
}

impl UpdateMode {
    /// Maps the `--no-merge` flag to a mode.
    pub fn from_no_merge(no_merge: bool) -> Self {
        if no_merge {
            UpdateMode::Replace
        } else {
            UpdateMode::Merge
        }
    }
}

/// Raw input for updating an identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateIdentityProviderRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub kubernetes_host: Option<String>,
    pub kubernetes_ca_cert: Option<String>,
    pub kubernetes_service_account_jwt: Option<String>,
}

impl UpdateIdentityProviderRequest {
    /// Create an update request targeting `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the Kubernetes API server URL.
    pub fn with_kubernetes_host(mut self, host: impl Into<String>) -> Self {
        self.kubernetes_host = Some(host.into());
        self
    }

    /// Set the Kubernetes CA certificate.
    pub fn with_kubernetes_ca_cert(mut self, ca_cert: impl Into<String>) -> Self {
        self.kubernetes_ca_cert = Some(ca_cert.into());
        self
    }

    /// Set the service account JWT used for token review.
    pub fn with_kubernetes_service_account_jwt(mut self, jwt: impl Into<String>) -> Self {
        self.kubernetes_service_account_jwt = Some(jwt.into());
        self
    }

    /// Returns the target name, or an error when none was supplied.
    pub fn name(&self) -> Result<&str, IdentityProviderError> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(IdentityProviderError::UpdateWithoutName),
        }
    }

    /// Transform the CA certificate value, if one was supplied.
    pub fn try_map_ca_cert<E>(
        mut self,
        f: impl FnOnce(String) -> Result<String, E>,
    ) -> Result<Self, E> {
        self.kubernetes_ca_cert = match supplied(self.kubernetes_ca_cert) {
            Some(ca_cert) => Some(f(ca_cert)?),
            None => None,
        };
        Ok(self)
    }

    /// Apply the supplied fields to a stored record. Omitted fields keep their value.
    pub fn apply_to(self, idp: &mut IdentityProvider) {
        if let Some(description) = supplied(self.description) {
            idp.description = Some(description);
        }
        if let Some(host) = supplied(self.kubernetes_host) {
            idp.kubernetes_host = host;
        }
        if let Some(ca_cert) = supplied(self.kubernetes_ca_cert) {
            idp.kubernetes_ca_cert = ca_cert;
        }
        if let Some(jwt) = supplied(self.kubernetes_service_account_jwt) {
            idp.kubernetes_service_account_jwt = jwt;
        }
    }

    /// Build a full replacement record from the supplied fields alone.
    ///
    /// Every Kubernetes field is mandatory here, checked in flag order.
    pub fn into_replacement(self) -> Result<IdentityProvider, IdentityProviderError> {
        let name = self.name()?.to_string();
        let idp = IdentityProvider::kubernetes(
            name,
            require(self.kubernetes_host, "kubernetes-host")?,
            require(self.kubernetes_ca_cert, "kubernetes-ca-cert")?,
            require(
                self.kubernetes_service_account_jwt,
                "kubernetes-service-account-jwt",
            )?,
        );

        Ok(IdentityProvider {
            description: supplied(self.description),
            ..idp
        })
    }
}
