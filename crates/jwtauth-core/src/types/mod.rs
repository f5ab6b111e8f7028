//! Core jwtauth types.
//!
//! [`BaseUrl`] is validated at construction time so an invalid service
//! address never reaches the HTTP layer.

mod base_url;
mod user;

pub use base_url::BaseUrl;
pub use user::User;
