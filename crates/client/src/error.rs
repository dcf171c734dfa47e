//! Client error types.

use idpctl_core::acl::ApiError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Identity provider not found: {name}")]
    NotFound { name: String },

    #[error("Invalid HTTP address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: url::ParseError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound { name } => ApiError::NotFound { name },
            ClientError::ServerError { status, message } => ApiError::Server { status, message },
            ClientError::Request(e) if e.is_decode() => ApiError::InvalidResponse(e.to_string()),
            ClientError::Request(e) => ApiError::Transport(e.to_string()),
            ClientError::Json(e) => ApiError::InvalidResponse(e.to_string()),
            ClientError::InvalidAddress { addr, source } => {
                ApiError::Transport(format!("invalid address '{addr}': {source}"))
            }
        }
    }
}
