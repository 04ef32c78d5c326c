//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "es-cli")]
#[command(about = "Resolve index paths and run index-scoped requests against a search cluster", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  es-cli resolve --index logs --index metrics --suffix _search\n  es-cli resolve --all\n  es-cli --default-index logs search --query '{\"query\":{\"match_all\":{}}}'\n  es-cli count --type Tweet\n"
)]
pub struct Cli {
    /// Base URL of the cluster (e.g., http://localhost:9200)
    #[arg(short, long, global = true, env = "ES_BASE_URL")]
    pub base_url: Option<String>,

    /// Index used when no index is selected
    #[arg(short = 'd', long, global = true, env = "ES_DEFAULT_INDEX")]
    pub default_index: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "ES_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Path to a settings file (overrides the default location)
    #[arg(long, global = true, env = "ES_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resolved index segment, path and parameters without sending anything
    Resolve {
        #[command(flatten)]
        selection: Selection,

        /// Operation appended to the index segment (e.g., _search)
        #[arg(long, default_value = "")]
        suffix: String,
    },

    /// Search the selected indices
    Search {
        #[command(flatten)]
        selection: Selection,

        /// Query body as JSON
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Count documents in the selected indices
    Count {
        #[command(flatten)]
        selection: Selection,

        /// Query body as JSON
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Refresh the selected indices
    Refresh {
        #[command(flatten)]
        selection: Selection,
    },
}

/// Index selection and per-request options shared by every command.
#[derive(Args, Debug, Default)]
pub struct Selection {
    /// Address every index (wins over --index and --type)
    #[arg(long)]
    pub all: bool,

    /// Index name to select (repeatable)
    #[arg(short, long = "index", value_name = "NAME")]
    pub indices: Vec<String>,

    /// Type name whose mapped index is selected (repeatable)
    #[arg(short, long = "type", value_name = "TYPE")]
    pub types: Vec<String>,

    /// Query parameter as key=value (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Extra HTTP header as name=value (repeatable)
    #[arg(long = "header", value_name = "NAME=VALUE", value_parser = parse_key_val)]
    pub headers: Vec<(String, String)>,

    /// Id sent as X-Opaque-Id
    #[arg(long)]
    pub opaque_id: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub request_timeout: Option<u64>,

    /// Basic auth username
    #[arg(long, env = "ES_USERNAME", requires = "password")]
    pub username: Option<String>,

    /// Basic auth password
    #[arg(long, env = "ES_PASSWORD", requires = "username", hide_env_values = true)]
    pub password: Option<String>,
}

/// Parse a `key=value` pair. The value may itself contain `=`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.trim().is_empty() {
        return Err(format!("missing key in '{s}'"));
    }
    Ok((key.trim().to_string(), value.to_string()))
}
