//! Account operations: signup, login, logout.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use jwtauth_core::traits::keys;
use jwtauth_core::{CredentialPair, CredentialStore, Credentials, Result, SignupRequest, User};

use crate::client::ApiClient;
use crate::endpoints::{LOGIN, LoginResponse, SIGNUP, SignupResponse};

/// Output of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub user: User,
    pub pair: CredentialPair,
}

/// Unauthenticated account operations.
///
/// Login writes the credential pair and the user's full name to the store
/// in one update; logout clears the store.
#[derive(Clone)]
pub struct Accounts {
    api: ApiClient,
    store: Arc<dyn CredentialStore>,
}

impl Accounts {
    pub fn new(api: ApiClient, store: Arc<dyn CredentialStore>) -> Self {
        Self { api, store }
    }

    /// Register a new account and return the server's confirmation message.
    ///
    /// Signup does not log in; call [`Accounts::login`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns an input error if a field is out of range (no request is
    /// sent), or [`jwtauth_core::Error::RequestFailed`] with the server's
    /// message, e.g. `Username already exists`.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn signup(&self, request: &SignupRequest) -> Result<String> {
        request.validate()?;

        let response: SignupResponse = self.api.post_json(SIGNUP, request).await?;
        debug!(message = %response.message, "account created");
        Ok(response.message)
    }

    /// Authenticate and persist the issued credential pair.
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginOutput> {
        let response: LoginResponse = self.api.post_json(LOGIN, credentials).await?;

        self.store
            .set_many(&[
                (keys::ACCESS_TOKEN, response.token.as_str()),
                (keys::REFRESH_TOKEN, response.refresh_token.as_str()),
                (keys::FULLNAME, response.user.fullname.as_str()),
            ])
            .await?;

        info!(user_id = %response.user.user_id, "logged in");

        Ok(LoginOutput {
            pair: CredentialPair::new(response.token, response.refresh_token),
            user: response.user,
        })
    }

    /// Forget all stored credentials.
    pub async fn logout(&self) -> Result<()> {
        self.store.clear().await?;
        info!("logged out");
        Ok(())
    }

    /// Full name of the logged-in user, if any.
    pub async fn fullname(&self) -> Result<Option<String>> {
        self.store.get(keys::FULLNAME).await
    }
}

impl std::fmt::Debug for Accounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accounts")
            .field("base", self.api.base())
            .finish_non_exhaustive()
    }
}
