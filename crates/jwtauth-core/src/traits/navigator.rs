//! Navigation signal for forced re-authentication.

/// Path of the unauthenticated entry point.
pub const ENTRY_PATH: &str = "/";

/// Receives the redirect issued when the refresh token is no longer usable.
///
/// The request client calls [`Navigator::navigate`] with [`ENTRY_PATH`]
/// after it has cleared the credential store. What "navigating" means is up
/// to the front end: a browser router push, a CLI prompt to log in again.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}
