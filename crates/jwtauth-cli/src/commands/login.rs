//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use jwtauth_core::Credentials;

use crate::config::AppConfig;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username to authenticate with
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long, env = "JWTAUTH_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run(args: LoginArgs, config: &AppConfig) -> Result<()> {
    let credentials = Credentials::new(&args.username, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    let login = config
        .accounts()?
        .login(&credentials)
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    println!();
    output::field("User ID", &login.user.user_id);
    output::field("Name", &login.user.fullname);
    output::field("Server", config.base_url.as_str());

    Ok(())
}
