//! `idp read`.

use std::io::Write;

use idpctl_core::acl::IdentityProviderApi;

use super::{CommandError, Context};
use crate::cli::idp::ReadArgs;

/// Fetch one identity provider by name and print it.
pub async fn run<A>(
    api: &A,
    args: ReadArgs,
    ctx: &Context,
    out: &mut dyn Write,
) -> Result<(), CommandError>
where
    A: IdentityProviderApi + ?Sized,
{
    let name = args
        .name
        .filter(|n| !n.is_empty())
        .ok_or(CommandError::ReadWithoutName)?;

    let idp = api
        .read_identity_provider(&name)
        .await
        .map_err(|e| CommandError::remote(format!("Error reading identity provider {name}"), e))?
        .ok_or_else(|| CommandError::NotFound { name: name.clone() })?;

    ctx.print(out, &idp)
}
