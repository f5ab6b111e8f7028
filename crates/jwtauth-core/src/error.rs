//! Error types for the jwtauth client.
//!
//! Failures of a protected call surface as [`Error::MissingCredentials`],
//! [`Error::RequestFailed`] or [`Error::RefreshFailed`]. Transport, decode,
//! storage and input problems have their own variants so callers can tell
//! a server rejection apart from a local fault.

use std::path::PathBuf;

use thiserror::Error;

/// The unified error type for jwtauth operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The access or refresh token is not in the credential store.
    #[error("missing tokens, please log in again")]
    MissingCredentials,

    /// The server rejected the request and no refresh applies, or the
    /// single retry after a refresh was rejected too.
    #[error("{message} (HTTP {status})")]
    RequestFailed { status: u16, message: String },

    /// The refresh endpoint rejected the refresh token for a reason other
    /// than the relogin sentinel.
    #[error("token refresh failed: {message} (HTTP {status})")]
    RefreshFailed { status: u16, message: String },

    /// Network transport errors (connection, timeout, protocol).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A success response body did not match the expected schema.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The credential store could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Input validation errors.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the server-supplied message for request and refresh failures.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::RequestFailed { message, .. } | Error::RefreshFailed { message, .. } => {
                Some(message)
            }
            _ => None,
        }
    }

    /// Returns the HTTP status for request and refresh failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RequestFailed { status, .. } | Error::RefreshFailed { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP client error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A response body that could not be decoded.
#[derive(Debug, Error)]
#[error("unexpected response body from {endpoint}: {source}")]
pub struct DecodeError {
    /// The URL or endpoint that produced the body.
    pub endpoint: String,
    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    pub fn new(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        Self {
            endpoint: endpoint.into(),
            source,
        }
    }
}

/// Credential storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a valid store.
    #[error("corrupt store {path}: {message}")]
    Corrupt { path: PathBuf, message: String },

    /// The store location could not be determined.
    #[error("store unavailable: {message}")]
    Unavailable { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// A request URL could not be resolved against the base URL.
    #[error("invalid request URL '{value}': {reason}")]
    Url { value: String, reason: String },

    /// A caller-supplied header name or value is malformed.
    #[error("invalid header '{name}': {reason}")]
    Header { name: String, reason: String },

    /// A form field failed validation.
    #[error("{field}: {reason}")]
    Field { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_displays_server_message() {
        let err = Error::RequestFailed {
            status: 401,
            message: "Wrong access token used".to_string(),
        };
        assert_eq!(err.to_string(), "Wrong access token used (HTTP 401)");
        assert_eq!(err.server_message(), Some("Wrong access token used"));
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn missing_credentials_has_no_status() {
        let err = Error::MissingCredentials;
        assert!(err.status().is_none());
        assert!(err.to_string().contains("log in again"));
    }

    #[test]
    fn decode_error_names_endpoint() {
        let source = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err: Error = DecodeError::new("http://localhost:8080/users", source).into();
        assert!(err.to_string().contains("http://localhost:8080/users"));
    }
}
