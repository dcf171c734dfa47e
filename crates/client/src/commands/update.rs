//! `idp update`.
//!
//! Merge mode reads the stored identity provider, overwrites the supplied fields
//! and writes the whole record back. The API has no conditional write, so a
//! concurrent update landing between the read and the write is overwritten.
//! No-merge mode skips the read and requires every Kubernetes field.

use std::io::Write;

use idpctl_core::acl::{
    resolve_value, ApiError, IdentityProvider, IdentityProviderApi,
    UpdateIdentityProviderRequest, UpdateMode, ValueError,
};

use super::{CommandError, Context};
use crate::cli::idp::UpdateArgs;

fn invalid_ca_cert(source: ValueError) -> CommandError {
    CommandError::InvalidValue {
        flag: "kubernetes-ca-cert",
        source,
    }
}

/// Build the record to write according to `mode`.
///
/// All local validation happens before the first remote call.
async fn plan<A>(
    api: &A,
    request: UpdateIdentityProviderRequest,
    mode: UpdateMode,
) -> Result<IdentityProvider, CommandError>
where
    A: IdentityProviderApi + ?Sized,
{
    let name = request.name()?.to_string();

    match mode {
        UpdateMode::Merge => {
            let request =
                request.try_map_ca_cert(|raw| resolve_value(&raw).map_err(invalid_ca_cert))?;

            let mut idp = api
                .read_identity_provider(&name)
                .await
                .map_err(|e| {
                    CommandError::remote("Error when retrieving current identity provider", e)
                })?
                .ok_or_else(|| CommandError::NotFound { name: name.clone() })?;

            tracing::debug!(
                %name,
                modify_index = idp.modify_index,
                "merging into stored identity provider"
            );
            request.apply_to(&mut idp);
            Ok(idp)
        }
        UpdateMode::Replace => {
            let mut idp = request.into_replacement()?;
            idp.kubernetes_ca_cert =
                resolve_value(&idp.kubernetes_ca_cert).map_err(invalid_ca_cert)?;

            tracing::debug!(%name, "replacing identity provider without merge");
            Ok(idp)
        }
    }
}

/// Update an identity provider and print the stored result.
pub async fn run<A>(
    api: &A,
    args: UpdateArgs,
    ctx: &Context,
    out: &mut dyn Write,
) -> Result<(), CommandError>
where
    A: IdentityProviderApi + ?Sized,
{
    let mode = args.mode();
    let idp = plan(api, UpdateIdentityProviderRequest::from(args), mode).await?;

    let updated = api
        .update_identity_provider(&idp)
        .await
        .map_err(|e| match e {
            ApiError::NotFound { name } => CommandError::NotFound { name },
            e => CommandError::remote(
                format!("Error updating identity provider {}", idp.name),
                e,
            ),
        })?;

    ctx.print_written(out, &updated)
}
