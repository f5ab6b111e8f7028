//! jwtauth-core - Core types and traits for the jwtauth client.

pub mod credentials;
pub mod error;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::{Credentials, SignupRequest};
pub use error::Error;
pub use tokens::{AccessToken, CredentialPair, RefreshToken};
pub use traits::{CredentialStore, Navigator};
pub use types::{BaseUrl, User};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
