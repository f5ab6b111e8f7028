//! Per-call request options and the outcome of a protected call.

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use jwtauth_core::Result;
use jwtauth_core::error::InvalidInputError;

/// Method, extra headers and optional JSON body of a protected request.
///
/// Options are borrowed by the client so the same request can be replayed
/// after a token refresh.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    method: Method,
    headers: HeaderMap,
    body: Option<serde_json::Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post(body: serde_json::Value) -> Self {
        Self::new(Method::POST).with_body(body)
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a header. `Content-Type` and `Authorization` are always replaced
    /// by the client's own values.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Add a header from strings.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or value is not a valid header.
    pub fn try_header(self, name: &str, value: &str) -> Result<Self> {
        let invalid = |reason: String| InvalidInputError::Header {
            name: name.to_string(),
            reason,
        };
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
        let value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
        Ok(self.header(name, value))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}

/// Outcome of a protected call that did not fail.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Fetched<T> {
    /// The decoded response body.
    Data(T),
    /// The refresh token was rejected; credentials were cleared and the
    /// navigator was sent to the entry point. There is no value.
    Relogin,
}

impl<T> Fetched<T> {
    /// Returns the data, discarding a relogin.
    pub fn data(self) -> Option<T> {
        match self {
            Fetched::Data(data) => Some(data),
            Fetched::Relogin => None,
        }
    }

    pub fn is_relogin(&self) -> bool {
        matches!(self, Fetched::Relogin)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Data(data) => Fetched::Data(f(data)),
            Fetched::Relogin => Fetched::Relogin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_get_without_body() {
        let options = RequestOptions::default();
        assert_eq!(options.method(), Method::GET);
        assert!(options.body().is_none());
        assert!(options.headers().is_empty());
    }

    #[test]
    fn post_carries_body() {
        let options = RequestOptions::post(serde_json::json!({"name": "x"}));
        assert_eq!(options.method(), Method::POST);
        assert_eq!(options.body().unwrap()["name"], "x");
    }

    #[test]
    fn try_header_rejects_bad_name() {
        assert!(RequestOptions::get().try_header("bad header", "v").is_err());
    }

    #[test]
    fn try_header_adds_header() {
        let options = RequestOptions::get().try_header("X-Trace", "1").unwrap();
        assert_eq!(options.headers()["x-trace"], "1");
    }

    #[test]
    fn fetched_map_and_data() {
        assert_eq!(Fetched::Data(2).map(|n| n * 2).data(), Some(4));
        let relogin: Fetched<i32> = Fetched::Relogin;
        assert!(relogin.is_relogin());
        assert_eq!(relogin.map(|n| n * 2).data(), None);
    }
}
