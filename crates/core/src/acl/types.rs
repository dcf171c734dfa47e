use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::IdentityProviderError;

/// The kind of external authentication source an identity provider describes.
///
/// Only Kubernetes service-account token review is implemented today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityProviderType {
    Kubernetes,
}

impl IdentityProviderType {
    /// Returns the wire name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityProviderType::Kubernetes => "kubernetes",
        }
    }
}

impl fmt::Display for IdentityProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentityProviderType {
    type Err = IdentityProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kubernetes" => Ok(IdentityProviderType::Kubernetes),
            other => Err(IdentityProviderError::UnsupportedType(other.to_string())),
        }
    }
}

/// A named identity provider as stored by the access-control service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdentityProvider {
    pub name: String,
    #[serde(rename = "Type")]
    pub idp_type: IdentityProviderType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub kubernetes_host: String,
    #[serde(rename = "KubernetesCACert", default)]
    pub kubernetes_ca_cert: String,
    #[serde(rename = "KubernetesServiceAccountJWT", default)]
    pub kubernetes_service_account_jwt: String,
    /// Raft index at which the record was created. Maintained by the server.
    #[serde(default)]
    pub create_index: u64,
    /// Raft index of the last write. Maintained by the server.
    #[serde(default)]
    pub modify_index: u64,
}

impl IdentityProvider {
    /// Creates a Kubernetes identity provider.
    pub fn kubernetes(
        name: impl Into<String>,
        host: impl Into<String>,
        ca_cert: impl Into<String>,
        service_account_jwt: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            idp_type: IdentityProviderType::Kubernetes,
            description: None,
            kubernetes_host: host.into(),
            kubernetes_ca_cert: ca_cert.into(),
            kubernetes_service_account_jwt: service_account_jwt.into(),
            create_index: 0,
            modify_index: 0,
        }
    }

    /// Sets the description for this identity provider.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
