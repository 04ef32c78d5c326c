//! Resolve command: print what a selection resolves to without sending it.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use es_client::EsClient;
use serde_json::json;

use crate::args::Selection;
use crate::commands::{indices_path, request_parameters};

pub fn run(client: &EsClient, selection: &Selection, suffix: &str) -> Result<()> {
    let mut path = indices_path(selection);
    let resolved = client
        .resolve(&mut path, request_parameters(selection))
        .context("Failed to resolve index path")?;

    let parameters = resolved.parameters();
    let query: BTreeMap<&str, &str> = parameters.query_pairs().collect();
    let configuration = parameters.configuration();

    let output = json!({
        "index": resolved.index(),
        "path": resolved.request_path(suffix),
        "all_indices": resolved.is_all_indices(),
        "query": query,
        "headers": configuration.map(|cfg| cfg.headers.clone()).unwrap_or_default(),
        "opaque_id": configuration.and_then(|cfg| cfg.opaque_id.clone()),
        "request_timeout_secs": configuration
            .and_then(|cfg| cfg.request_timeout)
            .map(|t| t.as_secs()),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
