//! Logout command implementation.

use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::output;

pub async fn run(config: &AppConfig) -> Result<()> {
    config
        .accounts()?
        .logout()
        .await
        .context("Failed to clear stored credentials")?;

    output::success("Logged out");
    Ok(())
}
