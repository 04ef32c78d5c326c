//! es-cli - resolve index paths and run index-scoped requests.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build connection settings from the CLI, environment and settings file.
//! - Execute commands via the shared client library.
//!
//! Does NOT handle:
//! - Path resolution or HTTP details (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr so stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;

use std::time::Duration;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use es_client::EsClient;
use es_config::{ConfigLoader, ConnectionSettings};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = match run(cli, &settings).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Environment first, then the settings file for anything still unset,
/// then CLI flags on top.
fn load_settings(cli: &Cli) -> Result<ConnectionSettings> {
    let mut loader = ConfigLoader::new();

    // Blank values are ignored to allow fallback to env var
    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    loader = loader
        .from_env()
        .context("Failed to load configuration from environment")?
        .from_file()
        .context("Failed to load settings file")?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref index) = cli.default_index {
        loader = loader.with_default_index(index.clone());
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }

    Ok(loader.build()?)
}

async fn run(cli: Cli, settings: &ConnectionSettings) -> Result<()> {
    let client = EsClient::builder().from_settings(settings).build()?;
    run_command(cli.command, &client).await
}
