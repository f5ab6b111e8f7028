//! Seams between the request client and its environment.

mod navigator;
mod store;

pub use navigator::{ENTRY_PATH, Navigator};
pub use store::{CredentialStore, keys};
