//! Identity provider CLI commands.
//!
//! Required values are modelled as `Option`: presence is validated by
//! the commands so that failures come out in a fixed order with fixed messages.

use clap::{Args, Parser, Subcommand};
use idpctl_core::acl::{CreateIdentityProviderRequest, UpdateIdentityProviderRequest, UpdateMode};

/// Identity provider management commands.
#[derive(Debug, Parser)]
pub struct IdpCommand {
    #[command(subcommand)]
    pub action: IdpAction,
}

/// Available identity provider actions.
#[derive(Debug, Subcommand)]
pub enum IdpAction {
    /// Create a new identity provider.
    Create(CreateArgs),
    /// Read an identity provider by name.
    Read(ReadArgs),
    /// List all identity providers.
    List,
    /// Update an identity provider.
    ///
    /// By default the supplied fields are merged into the stored identity
    /// provider. With --no-merge the identity provider is replaced with only the
    /// supplied values and every Kubernetes field must be given.
    Update(UpdateArgs),
}

/// Flags for `idp create`.
#[derive(Debug, Clone, Default, Args)]
pub struct CreateArgs {
    /// Identity provider type. Only "kubernetes" is supported.
    #[arg(long = "type")]
    pub idp_type: Option<String>,
    /// Unique name of the identity provider.
    #[arg(long)]
    pub name: Option<String>,
    /// Human readable description.
    #[arg(long)]
    pub description: Option<String>,
    /// Address of the Kubernetes API server.
    #[arg(long)]
    pub kubernetes_host: Option<String>,
    /// PEM encoded CA certificate of the Kubernetes API server, or @path to read it from a file.
    #[arg(long, allow_hyphen_values = true)]
    pub kubernetes_ca_cert: Option<String>,
    /// Service account JWT used to call the TokenReview API.
    #[arg(long)]
    pub kubernetes_service_account_jwt: Option<String>,
}

impl From<CreateArgs> for CreateIdentityProviderRequest {
    fn from(args: CreateArgs) -> Self {
        Self {
            idp_type: args.idp_type,
            name: args.name,
            description: args.description,
            kubernetes_host: args.kubernetes_host,
            kubernetes_ca_cert: args.kubernetes_ca_cert,
            kubernetes_service_account_jwt: args.kubernetes_service_account_jwt,
        }
    }
}

/// Flags for `idp read`.
#[derive(Debug, Clone, Default, Args)]
pub struct ReadArgs {
    /// Name of the identity provider to read.
    #[arg(long)]
    pub name: Option<String>,
}

/// Flags for `idp update`.
#[derive(Debug, Clone, Default, Args)]
pub struct UpdateArgs {
    /// Name of the identity provider to update.
    #[arg(long)]
    pub name: Option<String>,
    /// New description.
    #[arg(long)]
    pub description: Option<String>,
    /// New address of the Kubernetes API server.
    #[arg(long)]
    pub kubernetes_host: Option<String>,
    /// New PEM encoded CA certificate, or @path to read it from a file.
    #[arg(long, allow_hyphen_values = true)]
    pub kubernetes_ca_cert: Option<String>,
    /// New service account JWT.
    #[arg(long)]
    pub kubernetes_service_account_jwt: Option<String>,
    /// Replace the identity provider instead of merging into the stored one.
    #[arg(long)]
    pub no_merge: bool,
}

impl UpdateArgs {
    /// Returns the update mode selected by `--no-merge`.
    pub fn mode(&self) -> UpdateMode {
        UpdateMode::from_no_merge(self.no_merge)
    }
}

impl From<UpdateArgs> for UpdateIdentityProviderRequest {
    fn from(args: UpdateArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            kubernetes_host: args.kubernetes_host,
            kubernetes_ca_cert: args.kubernetes_ca_cert,
            kubernetes_service_account_jwt: args.kubernetes_service_account_jwt,
        }
    }
}
