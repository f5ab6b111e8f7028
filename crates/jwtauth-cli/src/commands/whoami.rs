//! Whoami command implementation.

use anyhow::{Context, Result};

use crate::config::AppConfig;

pub async fn run(config: &AppConfig) -> Result<()> {
    let fullname = config
        .accounts()?
        .fullname()
        .await
        .context("Failed to read stored credentials")?
        .context("No active session. Run 'jwtauth login' first.")?;

    println!("Welcome, {}!", fullname);
    Ok(())
}
