//! Endpoint paths and request/response schemas.

use serde::{Deserialize, Serialize};

use jwtauth_core::User;

// ============================================================================
// Endpoint Paths
// ============================================================================

pub const SIGNUP: &str = "/signup";

pub const LOGIN: &str = "/login";

/// Exchanges a refresh token (bearer, empty body) for a new credential pair.
pub const REFRESH: &str = "/refresh";

pub const USERS: &str = "/users";

/// Path of a single user.
pub fn user(id: &str) -> String {
    format!("/user/{id}")
}

// ============================================================================
// Error Messages
// ============================================================================

/// `error` value of a refresh failure meaning the user must log in again.
pub const RELOGIN_SENTINEL: &str = "relogin";

/// Message used when a failed response carries no readable `error`.
pub const GENERIC_ERROR: &str = "Unauthorized";

/// Message used when a failed refresh carries no readable `error`.
pub const REFRESH_FAILED: &str = "Failed to refresh token";

/// Substrings of an error message that trigger a token refresh.
pub const REFRESH_TRIGGERS: [&str; 2] = ["token expired", "Unauthorized"];

// ============================================================================
// Request/Response Types
// ============================================================================

/// Error body returned by every endpoint: `{ "error": "..." }`.
///
/// `error` is kept as raw JSON because some server paths serialize an
/// error object instead of a string.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Returns the error string, if present and non-empty.
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(|e| e.as_str())
            .filter(|e| !e.is_empty())
    }

    /// Returns the error string or `default`.
    pub fn message_or(&self, default: &str) -> String {
        self.message().unwrap_or(default).to_string()
    }

    /// True when this is the relogin sentinel.
    pub fn is_relogin(&self) -> bool {
        self.message() == Some(RELOGIN_SENTINEL)
    }
}

/// Response from signup.
#[derive(Debug, Deserialize)]
pub struct SignupResponse {
    pub message: String,
}

/// Response from login.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
    pub refresh_token: String,
}

/// Response from refresh.
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ErrorResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn error_message_present() {
        assert_eq!(parse(r#"{"error":"token expired"}"#).message(), Some("token expired"));
    }

    #[test]
    fn empty_or_missing_error_falls_back() {
        assert_eq!(parse(r#"{"error":""}"#).message_or(GENERIC_ERROR), GENERIC_ERROR);
        assert_eq!(parse("{}").message_or(GENERIC_ERROR), GENERIC_ERROR);
    }

    #[test]
    fn object_error_falls_back() {
        assert_eq!(parse(r#"{"error":{}}"#).message_or(GENERIC_ERROR), GENERIC_ERROR);
    }

    #[test]
    fn relogin_sentinel_is_exact() {
        assert!(parse(r#"{"error":"relogin"}"#).is_relogin());
        assert!(!parse(r#"{"error":"please relogin"}"#).is_relogin());
        assert!(!parse(r#"{"error":"Relogin"}"#).is_relogin());
    }

    #[test]
    fn user_path() {
        assert_eq!(user("65f0"), "/user/65f0");
    }
}
