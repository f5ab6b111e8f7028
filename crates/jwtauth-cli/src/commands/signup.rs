//! Signup command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use jwtauth_core::SignupRequest;

use crate::config::AppConfig;
use crate::output;

#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Username (2-100 characters, must be unique)
    #[arg(long)]
    pub username: String,

    /// Full name (2-100 characters)
    #[arg(long)]
    pub fullname: String,

    /// Password (at least 6 characters)
    #[arg(long, env = "JWTAUTH_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run(args: SignupArgs, config: &AppConfig) -> Result<()> {
    let request = SignupRequest::new(args.username, args.fullname, args.password);

    eprintln!("{}", "Creating account...".dimmed());

    let message = config
        .accounts()?
        .signup(&request)
        .await
        .context("Failed to sign up")?;

    output::success(&message);
    output::field("Username", &request.username);
    eprintln!(
        "{}",
        "Run 'jwtauth login' to sign in with the new account.".dimmed()
    );

    Ok(())
}
