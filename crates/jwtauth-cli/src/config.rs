//! Runtime configuration resolved from flags and environment.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use jwtauth_core::BaseUrl;
use jwtauth_http::{Accounts, ApiClient, ProtectedClient};

use crate::cli::Cli;
use crate::session::{CliNavigator, FileStore, storage};

/// Where to talk to and where to keep credentials.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: BaseUrl,
    pub store_path: PathBuf,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let base_url = BaseUrl::new(&cli.base_url).context("Invalid base URL")?;

        let store_path = match &cli.store {
            Some(path) => path.clone(),
            None => storage::default_path()?,
        };

        tracing::debug!(%base_url, store = %store_path.display(), "configuration");

        Ok(Self {
            base_url,
            store_path,
        })
    }

    pub fn store(&self) -> Arc<FileStore> {
        Arc::new(FileStore::new(&self.store_path))
    }

    pub fn api(&self) -> Result<ApiClient> {
        ApiClient::new(self.base_url.clone()).context("Failed to build HTTP client")
    }

    pub fn accounts(&self) -> Result<Accounts> {
        Ok(Accounts::new(self.api()?, self.store()))
    }

    pub fn protected(&self) -> Result<ProtectedClient> {
        Ok(ProtectedClient::new(
            self.api()?,
            self.store(),
            Arc::new(CliNavigator),
        ))
    }
}
