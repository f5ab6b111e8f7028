//! Authenticated requests with transparent token refresh.

use std::sync::Arc;

use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use jwtauth_core::traits::ENTRY_PATH;
use jwtauth_core::{CredentialPair, CredentialStore, Error, Navigator, RefreshToken, Result};

use crate::client::{ApiClient, decode_body, error_body};
use crate::endpoints::{
    GENERIC_ERROR, REFRESH, REFRESH_FAILED, REFRESH_TRIGGERS, RefreshResponse,
};
use crate::options::{Fetched, RequestOptions};

/// Client for protected endpoints.
///
/// Each call reads the credential pair from the store and sends the access
/// token. When the server answers with an error whose message mentions an
/// expired or unauthorized token, the refresh token is exchanged for a new
/// pair, the pair is stored, and the request is retried exactly once. A
/// second rejection is returned as [`Error::RequestFailed`].
///
/// If the refresh endpoint answers with the relogin sentinel, the store is
/// cleared, the navigator is sent to `/`, and the call returns
/// [`Fetched::Relogin`].
///
/// Concurrent calls are not coordinated: two calls that both hit an expired
/// token will both refresh, and the last pair written wins.
#[derive(Clone)]
pub struct ProtectedClient {
    api: ApiClient,
    store: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator>,
}

/// Result of exchanging a refresh token.
enum Exchange {
    Renewed(CredentialPair),
    Relogin,
}

impl ProtectedClient {
    pub fn new(
        api: ApiClient,
        store: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            store,
            navigator,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Make a protected request and decode the JSON response as `T`.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingCredentials`] if either token is absent; no request is sent
    /// - [`Error::RequestFailed`] for a non-refreshable failure or a failed retry
    /// - [`Error::RefreshFailed`] if the refresh endpoint fails without the sentinel
    /// - [`Error::Decode`] if a success body does not match `T`
    #[instrument(skip(self, options), fields(method = %options.method()))]
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        target: &str,
        options: &RequestOptions,
    ) -> Result<Fetched<T>> {
        let pair = self
            .store
            .credential_pair()
            .await?
            .ok_or(Error::MissingCredentials)?;

        let response = self
            .api
            .send_authed(target, options, pair.access_token.as_str())
            .await?;

        let status = response.status();
        if status.is_success() {
            return decode_body(response, target).await.map(Fetched::Data);
        }

        let message = error_body(response).await.message_or(GENERIC_ERROR);
        if !is_refreshable(&message) {
            debug!(%status, %message, "request rejected");
            return Err(Error::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        info!(%status, %message, "access token rejected, refreshing");

        let pair = match self.exchange(&pair.refresh_token).await? {
            Exchange::Renewed(pair) => pair,
            Exchange::Relogin => {
                self.relogin().await?;
                return Ok(Fetched::Relogin);
            }
        };
        self.store.set_pair(&pair).await?;

        let retry = self
            .api
            .send_authed(target, options, pair.access_token.as_str())
            .await?;
        finish_retry(retry, target).await.map(Fetched::Data)
    }

    /// Make a protected request returning untyped JSON.
    pub async fn fetch_json(
        &self,
        target: &str,
        options: &RequestOptions,
    ) -> Result<Fetched<serde_json::Value>> {
        self.fetch(target, options).await
    }

    /// Exchange the stored refresh token for a new pair and store it.
    ///
    /// Follows the same relogin rule as [`ProtectedClient::fetch`].
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<Fetched<()>> {
        let pair = self
            .store
            .credential_pair()
            .await?
            .ok_or(Error::MissingCredentials)?;

        match self.exchange(&pair.refresh_token).await? {
            Exchange::Renewed(pair) => {
                self.store.set_pair(&pair).await?;
                Ok(Fetched::Data(()))
            }
            Exchange::Relogin => {
                self.relogin().await?;
                Ok(Fetched::Relogin)
            }
        }
    }

    async fn exchange(&self, refresh_token: &RefreshToken) -> Result<Exchange> {
        let response = self
            .api
            .post_bearer(REFRESH, refresh_token.as_str())
            .await?;

        let status = response.status();
        if status.is_success() {
            let endpoint = self.api.base().endpoint(REFRESH);
            let renewed: RefreshResponse = decode_body(response, &endpoint).await?;
            debug!("credential pair renewed");
            return Ok(Exchange::Renewed(CredentialPair::new(
                renewed.access_token,
                renewed.refresh_token,
            )));
        }

        let error = error_body(response).await;
        if error.is_relogin() {
            return Ok(Exchange::Relogin);
        }

        warn!(%status, "refresh rejected");
        Err(Error::RefreshFailed {
            status: status.as_u16(),
            message: error.message_or(REFRESH_FAILED),
        })
    }

    async fn relogin(&self) -> Result<()> {
        info!("refresh token rejected, clearing credentials");
        self.store.clear().await?;
        self.navigator.navigate(ENTRY_PATH);
        Ok(())
    }
}

impl std::fmt::Debug for ProtectedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProtectedClient")
            .field("base", self.api.base())
            .finish_non_exhaustive()
    }
}

async fn finish_retry<T: DeserializeOwned>(response: Response, target: &str) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return decode_body(response, target).await;
    }

    let message = error_body(response).await.message_or(GENERIC_ERROR);
    debug!(%status, %message, "retry rejected");
    Err(Error::RequestFailed {
        status: status.as_u16(),
        message,
    })
}

/// Whether an error message asks for a token refresh.
fn is_refreshable(message: &str) -> bool {
    REFRESH_TRIGGERS
        .iter()
        .any(|trigger| message.contains(trigger))
}
