//! Generic protected request command.

use anyhow::{Context, Result};
use clap::Args;

use jwtauth_http::{Method, RequestOptions};

use crate::config::AppConfig;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Path relative to the base URL, or an absolute URL
    pub target: String,

    /// HTTP method
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// JSON request body
    #[arg(long)]
    pub data: Option<String>,

    /// Extra header as NAME:VALUE (repeatable)
    #[arg(long = "header", short = 'H')]
    pub headers: Vec<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: FetchArgs, config: &AppConfig) -> Result<()> {
    let options = build_options(&args)?;

    let body = config
        .protected()?
        .fetch_json(&args.target, &options)
        .await
        .with_context(|| format!("Request to {} failed", args.target))?;
    let body = session::require(body)?;

    if args.pretty {
        output::json_pretty(&body)
    } else {
        output::json(&body)
    }
}

fn build_options(args: &FetchArgs) -> Result<RequestOptions> {
    let method = Method::from_bytes(args.method.to_ascii_uppercase().as_bytes())
        .with_context(|| format!("Invalid HTTP method '{}'", args.method))?;

    let mut options = RequestOptions::new(method);

    if let Some(data) = &args.data {
        let body = serde_json::from_str(data).context("Request body is not valid JSON")?;
        options = options.with_body(body);
    }

    for header in &args.headers {
        let (name, value) = header
            .split_once(':')
            .with_context(|| format!("Header '{}' is not NAME:VALUE", header))?;
        options = options.try_header(name.trim(), value.trim())?;
    }

    Ok(options)
}
