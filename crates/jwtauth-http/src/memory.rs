//! In-memory credential store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use jwtauth_core::traits::keys;
use jwtauth_core::{CredentialPair, CredentialStore, Result};

/// A [`CredentialStore`] held in process memory.
///
/// Useful for tests and for embedding the client where persistence is
/// handled elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `pair`.
    pub fn with_pair(pair: &CredentialPair) -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            keys::ACCESS_TOKEN.to_string(),
            pair.access_token.as_str().to_string(),
        );
        entries.insert(
            keys::REFRESH_TOKEN.to_string(),
            pair.refresh_token.as_str().to_string(),
        );
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Copy of every entry.
    pub async fn snapshot(&self) -> HashMap<String, String> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.entries.write().await.clear();
        Ok(())
    }

    async fn set_many(&self, entries: &[(&str, &str)]) -> Result<()> {
        let mut map = self.entries.write().await;
        for (key, value) in entries {
            map.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_has_no_pair() {
        let store = MemoryStore::new();
        assert!(store.credential_pair().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn half_a_pair_is_no_pair() {
        let store = MemoryStore::new();
        store.set(keys::ACCESS_TOKEN, "a").await.unwrap();
        assert!(store.credential_pair().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn empty_token_is_no_pair() {
        let store = MemoryStore::with_pair(&CredentialPair::new("", "r"));
        assert!(store.credential_pair().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_pair_replaces_both() {
        let store = MemoryStore::with_pair(&CredentialPair::new("a1", "r1"));
        store
            .set_pair(&CredentialPair::new("a2", "r2"))
            .await
            .unwrap();

        let pair = store.credential_pair().await.unwrap().unwrap();
        assert_eq!(pair, CredentialPair::new("a2", "r2"));
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let store = MemoryStore::with_pair(&CredentialPair::new("a", "r"));
        store.set(keys::FULLNAME, "Alice").await.unwrap();
        store.clear().await.unwrap();
        assert!(store.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn remove_missing_key_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove(keys::FULLNAME).await.is_ok());
    }
}
