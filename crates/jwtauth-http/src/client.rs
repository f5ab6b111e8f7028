//! HTTP client for the auth service.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use jwtauth_core::error::{DecodeError, InvalidInputError, TransportError};
use jwtauth_core::{BaseUrl, Error, Result};

use crate::endpoints::ErrorResponse;
use crate::options::RequestOptions;

/// HTTP client bound to one service base URL.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base: BaseUrl,
}

impl ApiClient {
    /// Create a new client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the TLS backend cannot be initialised.
    pub fn new(base: BaseUrl) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("jwtauth/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport_error)?;

        Ok(Self { client, base })
    }

    /// Returns the base URL this client is configured for.
    pub fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// Send a request with `token` as bearer credential.
    ///
    /// `target` is an absolute URL or a path relative to the base URL. The
    /// JSON content type and the bearer credential are applied after the
    /// caller's headers and take precedence over them.
    #[instrument(skip(self, options, token), fields(method = %options.method()))]
    pub async fn send_authed(
        &self,
        target: &str,
        options: &RequestOptions,
        token: &str,
    ) -> Result<Response> {
        let url = self.base.resolve(target)?;
        debug!(%url, "authenticated request");

        let headers = merge_headers(options.headers(), token)?;
        let mut request = self
            .client
            .request(options.method().clone(), url)
            .headers(headers);

        if let Some(body) = options.body() {
            trace!(?body, "request body");
            request = request.json(body);
        }

        let response = request.send().await.map_err(transport_error)?;
        trace!(status = %response.status(), "response");
        Ok(response)
    }

    /// POST to `path` with `token` as bearer credential and no body.
    #[instrument(skip(self, token))]
    pub async fn post_bearer(&self, path: &str, token: &str) -> Result<Response> {
        let url = self.base.endpoint(path);
        debug!(%url, "bearer POST");

        let response = self
            .client
            .post(&url)
            .headers(merge_headers(&HeaderMap::new(), token)?)
            .send()
            .await
            .map_err(transport_error)?;

        trace!(status = %response.status(), "response");
        Ok(response)
    }

    /// Make an unauthenticated JSON POST and decode the response.
    ///
    /// A non-success status becomes [`Error::RequestFailed`] carrying the
    /// server's `error` message.
    #[instrument(skip(self, body))]
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(path);
        debug!(%url, "JSON POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            decode_body(response, &url).await
        } else {
            let error = error_body(response).await;
            Err(Error::RequestFailed {
                status: status.as_u16(),
                message: error.message_or(fallback_reason(status)),
            })
        }
    }
}

/// Caller headers first, then the fixed ones, so the fixed ones win.
fn merge_headers(caller: &HeaderMap, token: &str) -> Result<HeaderMap> {
    let mut headers = caller.clone();

    let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
        InvalidInputError::Header {
            name: AUTHORIZATION.to_string(),
            reason: e.to_string(),
        }
    })?;
    auth.set_sensitive(true);

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(AUTHORIZATION, auth);
    Ok(headers)
}

fn fallback_reason(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("request failed")
}

/// Decode a success body into `R`.
pub(crate) async fn decode_body<R: DeserializeOwned>(
    response: Response,
    endpoint: &str,
) -> Result<R> {
    let bytes = response.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&bytes).map_err(|e| DecodeError::new(endpoint, e).into())
}

/// Read an error body; anything unreadable counts as an empty body.
pub(crate) async fn error_body(response: Response) -> ErrorResponse {
    match response.bytes().await {
        Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
        Err(e) => {
            debug!(error = %e, "failed to read error body");
            ErrorResponse::default()
        }
    }
}

pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout {
            message: err.to_string(),
        }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}
