//! Login state for the CLI: the credential file and the re-login prompt.

pub mod storage;

use std::fmt;

use anyhow::Result;
use tracing::debug;

use jwtauth_core::Navigator;
use jwtauth_http::Fetched;

use crate::output;

pub use storage::FileStore;

/// Returned by a command whose session ended with a forced re-login.
///
/// The user has already been told; `main` exits without printing it again.
#[derive(Debug)]
pub struct SessionEnded;

impl fmt::Display for SessionEnded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("session ended, log in again")
    }
}

impl std::error::Error for SessionEnded {}

/// The CLI's entry point is the login command, so navigating there means
/// telling the user to run it.
#[derive(Debug, Clone, Copy)]
pub struct CliNavigator;

impl Navigator for CliNavigator {
    fn navigate(&self, path: &str) {
        debug!(path, "redirect to entry point");
        output::error("Your session has expired. Run 'jwtauth login' to sign in again.");
    }
}

/// Unwrap a protected result, turning a relogin into [`SessionEnded`].
pub fn require<T>(fetched: Fetched<T>) -> Result<T> {
    match fetched {
        Fetched::Data(data) => Ok(data),
        Fetched::Relogin => Err(SessionEnded.into()),
    }
}
