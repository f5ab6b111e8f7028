//! jwtauth-http - HTTP client with bearer authentication and transparent
//! token refresh.
//!
//! All protected calls flow through a [`ProtectedClient`], which reads the
//! credential pair from a [`CredentialStore`](jwtauth_core::CredentialStore),
//! refreshes it once when the server reports an expired token, and clears it
//! when the server demands a fresh login.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use jwtauth_core::{BaseUrl, Credentials, Navigator};
//! use jwtauth_http::{Accounts, ApiClient, Fetched, MemoryStore, ProtectedClient};
//!
//! struct Quiet;
//! impl Navigator for Quiet {
//!     fn navigate(&self, _path: &str) {}
//! }
//!
//! # async fn example() -> Result<(), jwtauth_core::Error> {
//! let api = ApiClient::new(BaseUrl::new("http://localhost:8080")?)?;
//! let store = Arc::new(MemoryStore::new());
//!
//! Accounts::new(api.clone(), store.clone())
//!     .login(&Credentials::new("alice", "secret123"))
//!     .await?;
//!
//! let client = ProtectedClient::new(api, store, Arc::new(Quiet));
//! if let Fetched::Data(users) = client.users().await? {
//!     for user in users {
//!         println!("{} ({})", user.fullname, user.username);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod accounts;
mod client;
pub mod endpoints;
mod memory;
mod options;
mod protected;
mod users;

pub use accounts::{Accounts, LoginOutput};
pub use client::ApiClient;
pub use memory::MemoryStore;
pub use options::{Fetched, RequestOptions};
pub use protected::ProtectedClient;

pub use reqwest::Method;
pub use reqwest::header;
