//! Credential store trait.

use async_trait::async_trait;

use crate::{CredentialPair, Result};

/// Well-known store keys.
pub mod keys {
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const REFRESH_TOKEN: &str = "refresh_token";
    pub const FULLNAME: &str = "fullname";
}

/// Process-wide key-value storage for credentials.
///
/// Implementations must make [`CredentialStore::set_many`] atomic with
/// respect to later reads: after it returns, every key reflects the new
/// value. The default implementation writes keys one by one and is only
/// suitable for stores where each `set` is itself durable and ordered.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read a value.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a single value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a single value. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Remove every key.
    async fn clear(&self) -> Result<()>;

    /// Write several values as one update.
    async fn set_many(&self, entries: &[(&str, &str)]) -> Result<()> {
        for (key, value) in entries {
            self.set(key, value).await?;
        }
        Ok(())
    }

    /// Read the stored credential pair, if both halves are present.
    async fn credential_pair(&self) -> Result<Option<CredentialPair>> {
        let access = self.get(keys::ACCESS_TOKEN).await?;
        let refresh = self.get(keys::REFRESH_TOKEN).await?;

        Ok(match (access, refresh) {
            (Some(access), Some(refresh)) if !access.is_empty() && !refresh.is_empty() => {
                Some(CredentialPair::new(access, refresh))
            }
            _ => None,
        })
    }

    /// Replace both tokens in one update.
    async fn set_pair(&self, pair: &CredentialPair) -> Result<()> {
        self.set_many(&[
            (keys::ACCESS_TOKEN, pair.access_token.as_str()),
            (keys::REFRESH_TOKEN, pair.refresh_token.as_str()),
        ])
        .await
    }
}
