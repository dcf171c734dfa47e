mod error;
mod requests;
mod traits;
mod types;
pub mod value;

pub use error::{ApiError, IdentityProviderError, Result};
pub use requests::{CreateIdentityProviderRequest, UpdateIdentityProviderRequest, UpdateMode};
pub use traits::IdentityProviderApi;
pub use types::{IdentityProvider, IdentityProviderType};
pub use value::{resolve_value, ValueError, ValueSource};
