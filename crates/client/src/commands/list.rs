//! `idp list`.

use std::io::Write;

use idpctl_core::acl::IdentityProviderApi;

use super::{CommandError, Context};
use crate::cli::OutputFormat;
use crate::output;

/// Print every identity provider. Prints nothing when there are none.
pub async fn run<A>(api: &A, ctx: &Context, out: &mut dyn Write) -> Result<(), CommandError>
where
    A: IdentityProviderApi + ?Sized,
{
    let idps = api
        .list_identity_providers()
        .await
        .map_err(|e| CommandError::remote("Failed to retrieve the identity provider list", e))?;
    tracing::debug!(count = idps.len(), "listed identity providers");

    if idps.is_empty() && ctx.format == OutputFormat::Pretty {
        return Ok(());
    }

    writeln!(out, "{}", output::format_identity_providers(&idps, ctx.format))?;
    Ok(())
}
