//! Subcommand implementations.

pub mod fetch;
pub mod login;
mod logout;
pub mod refresh_token;
pub mod signup;
pub mod user;
pub mod users;
mod whoami;

use anyhow::Result;

use crate::cli::{Cli, Commands};
use crate::config::AppConfig;

pub async fn handle(cli: Cli) -> Result<()> {
    let config = AppConfig::from_cli(&cli)?;

    match cli.command {
        Commands::Signup(args) => signup::run(args, &config).await,
        Commands::Login(args) => login::run(args, &config).await,
        Commands::Logout => logout::run(&config).await,
        Commands::Whoami => whoami::run(&config).await,
        Commands::Users(args) => users::run(args, &config).await,
        Commands::User(args) => user::run(args, &config).await,
        Commands::Fetch(args) => fetch::run(args, &config).await,
        Commands::RefreshToken(args) => refresh_token::run(args, &config).await,
    }
}
