//! Refresh token command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::config::AppConfig;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct RefreshTokenArgs {}

pub async fn run(_args: RefreshTokenArgs, config: &AppConfig) -> Result<()> {
    eprintln!("{}", "Refreshing tokens...".dimmed());

    let refreshed = config
        .protected()?
        .refresh()
        .await
        .context("Failed to refresh tokens")?;
    session::require(refreshed)?;

    output::success("Tokens refreshed successfully");
    Ok(())
}
