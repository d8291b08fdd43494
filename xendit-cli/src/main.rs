//! Xendit disbursement CLI
//!
//! Runs a single disbursement API call and prints the result as JSON.

mod commands;
mod config;

use clap::Parser;
use commands::Command;
use config::ConfigLoader;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use xendit_sdk::{DisbursementClient, RequestHeaders};

/// Xendit disbursement CLI - create and look up disbursements
#[derive(Parser, Debug)]
#[command(name = "xendit")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./xendit.toml")]
    config: PathBuf,

    /// Secret API key (overrides the config file)
    #[arg(long, env = "XENDIT_SECRET_KEY", hide_env_values = true)]
    secret_key: Option<String>,

    /// Perform the call on behalf of this sub-account
    #[arg(long)]
    for_user_id: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    tracing::debug!("Starting xendit-cli v{}", env!("CARGO_PKG_VERSION"));

    let client_config = ConfigLoader::new(&args.config, args.secret_key)
        .load()
        .map_err(|e| {
            tracing::error!("Failed to load configuration: {}", e);
            e
        })?;
    tracing::debug!("Using API at {}", client_config.base_url);

    let client = DisbursementClient::new(client_config)?;
    let headers = RequestHeaders {
        for_user_id: args.for_user_id,
    };

    let output = args
        .command
        .run(&client, &headers)
        .await
        .map_err(|e| {
            tracing::error!("Request failed: {}", e);
            e
        })?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Initialize the tracing subscriber with environment-based filtering.
///
/// Logs go to stderr so stdout carries only the JSON result.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
