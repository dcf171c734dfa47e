use thiserror::Error;

/// Errors raised by local validation before any remote call is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityProviderError {
    #[error("Missing required '--{0}' flag")]
    MissingFlag(&'static str),
    #[error("This tool can only create identity providers of type=kubernetes at this time.")]
    UnsupportedType(String),
    #[error("Cannot update an identity provider without specifying the --name parameter")]
    UpdateWithoutName,
}

/// Errors returned by an [`IdentityProviderApi`](super::IdentityProviderApi) implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("identity provider not found: {name}")]
    NotFound { name: String },
    #[error("identity provider already exists: {name}")]
    AlreadyExists { name: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected response code {status}: {message}")]
    Server { status: u16, message: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for remote identity provider operations.
pub type Result<T> = std::result::Result<T, ApiError>;
