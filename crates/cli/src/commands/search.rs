//! Search, count and refresh commands.

use anyhow::{Context, Result};
use es_client::EsClient;
use serde_json::Value;
use tracing::info;

use crate::args::Selection;
use crate::commands::{indices_path, request_parameters};

fn parse_query(query: Option<&str>) -> Result<Option<Value>> {
    query
        .map(|q| serde_json::from_str(q).context("--query is not valid JSON"))
        .transpose()
}

pub async fn run_search(client: &EsClient, selection: &Selection, query: Option<&str>) -> Result<()> {
    let body = parse_query(query)?;
    let mut path = indices_path(selection);

    info!("Running search");
    let response = client
        .search(&mut path, request_parameters(selection), body.as_ref())
        .await
        .context("Search failed")?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub async fn run_count(client: &EsClient, selection: &Selection, query: Option<&str>) -> Result<()> {
    let body = parse_query(query)?;
    let mut path = indices_path(selection);

    let count = client
        .count(&mut path, request_parameters(selection), body.as_ref())
        .await
        .context("Count failed")?;

    println!("{count}");
    Ok(())
}

pub async fn run_refresh(client: &EsClient, selection: &Selection) -> Result<()> {
    let mut path = indices_path(selection);

    client
        .refresh(&mut path, request_parameters(selection))
        .await
        .context("Refresh failed")?;

    info!("Refresh completed");
    Ok(())
}
