//! `idp create`.

use std::io::Write;

use idpctl_core::acl::{resolve_value, CreateIdentityProviderRequest, IdentityProviderApi};

use super::{CommandError, Context};
use crate::cli::idp::CreateArgs;

/// Validate the flags, create the identity provider and print what was stored.
pub async fn run<A>(
    api: &A,
    args: CreateArgs,
    ctx: &Context,
    out: &mut dyn Write,
) -> Result<(), CommandError>
where
    A: IdentityProviderApi + ?Sized,
{
    let mut idp = CreateIdentityProviderRequest::from(args).into_identity_provider()?;
    idp.kubernetes_ca_cert =
        resolve_value(&idp.kubernetes_ca_cert).map_err(|source| CommandError::InvalidValue {
            flag: "kubernetes-ca-cert",
            source,
        })?;

    let created = api
        .create_identity_provider(&idp)
        .await
        .map_err(|e| CommandError::remote("Failed to create new identity provider", e))?;
    tracing::debug!(name = %created.name, "identity provider created");

    ctx.print_written(out, &created)
}
