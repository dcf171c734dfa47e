//! Command error types.

use idpctl_core::acl::{ApiError, IdentityProviderError, ValueError};
use thiserror::Error;

/// Errors reported to the user by a command.
///
/// The `Display` output is exactly what is written to the error stream.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    Validation(#[from] IdentityProviderError),

    #[error("Invalid '--{flag}' value: {source}")]
    InvalidValue {
        flag: &'static str,
        #[source]
        source: ValueError,
    },

    #[error("Must specify the --name parameter")]
    ReadWithoutName,

    #[error("Identity provider not found with name {name}")]
    NotFound { name: String },

    #[error("{context}: {source}")]
    Remote {
        context: String,
        #[source]
        source: ApiError,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CommandError {
    /// Wrap a remote failure with a description of what was being attempted.
    pub fn remote(context: impl Into<String>, source: ApiError) -> Self {
        CommandError::Remote {
            context: context.into(),
            source,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
