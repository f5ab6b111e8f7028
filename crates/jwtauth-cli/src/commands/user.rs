//! User command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::config::AppConfig;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct UserArgs {
    /// User ID
    pub id: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: UserArgs, config: &AppConfig) -> Result<()> {
    let user = config
        .protected()?
        .user(&args.id)
        .await
        .context("Failed to fetch user")?;
    let user = session::require(user)?;

    if args.pretty {
        output::json_pretty(&user)
    } else {
        output::field("User ID", &user.user_id);
        output::field("Name", &user.fullname);
        output::field("Username", &user.username);
        Ok(())
    }
}
