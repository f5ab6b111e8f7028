//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{fetch, login, refresh_token, signup, user, users};

/// Client for a JWT-authenticated user service.
#[derive(Parser, Debug)]
#[command(name = "jwtauth")]
#[command(author, version = env!("JWTAUTH_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Service base URL
    #[arg(
        long,
        global = true,
        env = "JWTAUTH_BASE_URL",
        default_value = "http://localhost:8080"
    )]
    pub base_url: String,

    /// Credential store file (defaults to the user data directory)
    #[arg(long, global = true, env = "JWTAUTH_STORE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new account
    Signup(signup::SignupArgs),

    /// Log in and store the issued tokens
    Login(login::LoginArgs),

    /// Forget the stored tokens
    Logout,

    /// Greet the logged-in user
    Whoami,

    /// List all users (protected)
    Users(users::UsersArgs),

    /// Show one user (protected)
    User(user::UserArgs),

    /// Make an arbitrary protected request and print the JSON response
    Fetch(fetch::FetchArgs),

    /// Exchange the refresh token for a new token pair
    RefreshToken(refresh_token::RefreshTokenArgs),
}
