//! Protected user endpoints.

use jwtauth_core::error::InvalidInputError;
use jwtauth_core::{Result, User};

use crate::endpoints::{self, USERS};
use crate::options::{Fetched, RequestOptions};
use crate::protected::ProtectedClient;

impl ProtectedClient {
    /// List all users, in server order.
    pub async fn users(&self) -> Result<Fetched<Vec<User>>> {
        self.fetch(USERS, &RequestOptions::get()).await
    }

    /// Fetch one user by id.
    ///
    /// # Errors
    ///
    /// Returns an input error for an empty id or one containing URL
    /// delimiters, before any request is sent.
    pub async fn user(&self, id: &str) -> Result<Fetched<User>> {
        if id.is_empty() || id.contains(['/', '?', '#']) {
            return Err(InvalidInputError::Field {
                field: "user_id",
                reason: format!("'{id}' is not a valid user id"),
            }
            .into());
        }
        self.fetch(&endpoints::user(id), &RequestOptions::get())
            .await
    }
}
