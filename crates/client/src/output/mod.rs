//! Output formatting functions.

pub mod json;
pub mod pretty;

use idpctl_core::acl::IdentityProvider;

use crate::cli::OutputFormat;

/// Format a single identity provider in the requested format.
pub fn format_identity_provider(idp: &IdentityProvider, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(idp),
        OutputFormat::Pretty => pretty::format_identity_provider(idp),
    }
}

/// Format a list of identity providers in the requested format.
///
/// An empty list renders as nothing in pretty mode and as `[]` in JSON mode.
pub fn format_identity_providers(idps: &[IdentityProvider], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(idps),
        OutputFormat::Pretty => pretty::format_identity_providers(idps),
    }
}
