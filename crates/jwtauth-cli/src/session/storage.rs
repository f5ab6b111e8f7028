//! File-backed credential store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result as AnyResult};
use async_trait::async_trait;
use directories::ProjectDirs;
use tokio::sync::Mutex;
use tracing::trace;

use jwtauth_core::error::StorageError;
use jwtauth_core::{CredentialStore, Result};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Default store path inside the user data directory.
pub fn default_path() -> AnyResult<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "jwtauth").context("Could not determine data directory")?;

    Ok(dirs.data_dir().join("credentials.json"))
}

/// A [`CredentialStore`] kept as a JSON object in one file.
///
/// Every update rewrites the whole file through a temporary file and a
/// rename, so a multi-key update is never observed half-applied. The file
/// is created with owner-only permissions on Unix.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

type Entries = BTreeMap<String, String>;

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let json = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        if json.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&json).map_err(|e| {
            StorageError::Corrupt {
                path: self.path.clone(),
                message: e.to_string(),
            }
            .into()
        })
    }

    fn write(&self, entries: &Entries) -> Result<()> {
        if entries.is_empty() {
            return self.delete();
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;

        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&tmp).map_err(|e| self.io_error(e))?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&tmp, perms).map_err(|e| self.io_error(e))?;
        }

        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;
        trace!(path = %self.path().display(), keys = entries.len(), "store written");
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> jwtauth_core::Error {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
        .into()
    }
}

#[async_trait]
impl CredentialStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read()?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_many(&[(key, value)]).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read()?;
        if entries.remove(key).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock().await;
        self.delete()
    }

    async fn set_many(&self, updates: &[(&str, &str)]) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read()?;
        for (key, value) in updates {
            entries.insert(key.to_string(), value.to_string());
        }
        self.write(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jwtauth_core::CredentialPair;
    use jwtauth_core::traits::keys;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("nested").join("credentials.json"))
    }

    #[tokio::test]
    async fn missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        assert!(store.get(keys::ACCESS_TOKEN).await.unwrap().is_none());
        assert!(store.credential_pair().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn pair_round_trips_through_file() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let pair = CredentialPair::new("a1", "r1");
        store.set_pair(&pair).await.unwrap();

        let reopened = FileStore::new(store.path());
        assert_eq!(reopened.credential_pair().await.unwrap(), Some(pair));
    }

    #[tokio::test]
    async fn set_pair_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.set(keys::FULLNAME, "Alice").await.unwrap();
        store
            .set_pair(&CredentialPair::new("a1", "r1"))
            .await
            .unwrap();

        assert_eq!(
            store.get(keys::FULLNAME).await.unwrap().as_deref(),
            Some("Alice")
        );
    }

    #[tokio::test]
    async fn clear_deletes_file() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store
            .set_pair(&CredentialPair::new("a1", "r1"))
            .await
            .unwrap();
        store.clear().await.unwrap();

        assert!(!store.path().exists());
        // Clearing twice is fine.
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn removing_last_key_deletes_file() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.set(keys::FULLNAME, "Alice").await.unwrap();
        store.remove(keys::FULLNAME).await.unwrap();
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        fs::write(&path, "not json").unwrap();

        let err = FileStore::new(&path).get(keys::ACCESS_TOKEN).await.unwrap_err();
        assert!(matches!(
            err,
            jwtauth_core::Error::Storage(StorageError::Corrupt { .. })
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn file_is_owner_only() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.set(keys::FULLNAME, "Alice").await.unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
