//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use es_client::EsClient;

use crate::args::Commands;
use crate::commands;

pub(crate) async fn run_command(command: Commands, client: &EsClient) -> Result<()> {
    match command {
        Commands::Resolve { selection, suffix } => commands::resolve::run(client, &selection, &suffix),
        Commands::Search { selection, query } => {
            commands::search::run_search(client, &selection, query.as_deref()).await
        }
        Commands::Count { selection, query } => {
            commands::search::run_count(client, &selection, query.as_deref()).await
        }
        Commands::Refresh { selection } => commands::search::run_refresh(client, &selection).await,
    }
}
