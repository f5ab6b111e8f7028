//! Users command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::config::AppConfig;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct UsersArgs {
    /// Print one JSON object per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: UsersArgs, config: &AppConfig) -> Result<()> {
    let users = config
        .protected()?
        .users()
        .await
        .context("Failed to list users")?;
    let users = session::require(users)?;

    if users.is_empty() {
        eprintln!("{}", "No users found.".dimmed());
        return Ok(());
    }

    for user in &users {
        if args.json {
            output::json(user)?;
        } else {
            output::user(user);
        }
    }

    Ok(())
}
