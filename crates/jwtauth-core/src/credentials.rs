//! Login and signup input types.

use std::fmt;

use serde::Serialize;

use crate::error::InvalidInputError;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const PASSWORD_MIN: usize = 6;

/// Login credentials.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use jwtauth_core::Credentials;
///
/// let creds = Credentials::new("alice", "hunter22");
/// assert_eq!(creds.username(), "alice");
/// ```
#[derive(Clone, Serialize)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    ///
    /// Use this only when constructing the login request.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A new account registration.
///
/// [`SignupRequest::validate`] applies the same length rules the server
/// enforces, so obviously bad input fails before any network call.
#[derive(Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub fullname: String,
    password: String,
}

impl SignupRequest {
    pub fn new(
        username: impl Into<String>,
        fullname: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            fullname: fullname.into(),
            password: password.into(),
        }
    }

    /// Check field lengths.
    ///
    /// # Errors
    ///
    /// Returns the first field that is out of range.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        check_len("username", &self.username, NAME_MIN, Some(NAME_MAX))?;
        check_len("fullname", &self.fullname, NAME_MIN, Some(NAME_MAX))?;
        check_len("password", &self.password, PASSWORD_MIN, None)?;
        Ok(())
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("username", &self.username)
            .field("fullname", &self.fullname)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

fn check_len(
    field: &'static str,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> Result<(), InvalidInputError> {
    let len = value.chars().count();
    if len < min {
        return Err(InvalidInputError::Field {
            field,
            reason: format!("must be at least {min} characters"),
        });
    }
    if let Some(max) = max
        && len > max
    {
        return Err(InvalidInputError::Field {
            field,
            reason: format!("must be at most {max} characters"),
        });
    }
    Ok(())
}
