//! Pretty output formatting.

use idpctl_core::acl::IdentityProvider;

/// Number of JWT characters shown before it is cut off.
const JWT_PREVIEW_CHARS: usize = 16;

/// Abbreviate a bearer token so it is recognisable without being reusable.
pub fn abbreviate_jwt(jwt: &str) -> String {
    match jwt.char_indices().nth(JWT_PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}...", &jwt[..idx]),
        None => jwt.to_string(),
    }
}

/// Format an identity provider for display.
pub fn format_identity_provider(idp: &IdentityProvider) -> String {
    let mut output = format!("Name:            {}\nType:            {}", idp.name, idp.idp_type);
    if let Some(desc) = idp.description.as_deref().filter(|d| !d.is_empty()) {
        output.push_str(&format!("\nDescription:     {}", desc));
    }
    if idp.create_index != 0 || idp.modify_index != 0 {
        output.push_str(&format!(
            "\nCreate Index:    {}\nModify Index:    {}",
            idp.create_index, idp.modify_index
        ));
    }
    output.push_str(&format!("\nKubernetes Host: {}", idp.kubernetes_host));
    output.push_str(&format!(
        "\nKubernetes Service Account JWT: {}",
        abbreviate_jwt(&idp.kubernetes_service_account_jwt)
    ));
    output.push_str("\nKubernetes CA Cert:\n");
    output.push_str(idp.kubernetes_ca_cert.trim_end());
    output
}

/// Format identity providers for display, separated by blank lines.
pub fn format_identity_providers(idps: &[IdentityProvider]) -> String {
    idps.iter()
        .map(format_identity_provider)
        .collect::<Vec<_>>()
        .join("\n\n")
}
