//! Index-scoped operations: search, count and refresh.
//!
//! Each operation appends its suffix to the resolved index segment, so
//! `_all`, a comma-joined list, or an empty segment all address the cluster
//! the way the path was resolved.

use reqwest::Method;
use serde_json::Value;

use crate::endpoints::send_resolved;
use crate::error::{ClientError, Result};
use crate::path::ResolvedPath;

/// Run a search and return the raw response body.
pub async fn search(
    client: &reqwest::Client,
    base_url: &str,
    path: &ResolvedPath,
    query: Option<&Value>,
) -> Result<Value> {
    send_resolved(client, base_url, Method::POST, path, "_search", query).await
}

/// Count matching documents.
pub async fn count(
    client: &reqwest::Client,
    base_url: &str,
    path: &ResolvedPath,
    query: Option<&Value>,
) -> Result<u64> {
    let body = send_resolved(client, base_url, Method::POST, path, "_count", query).await?;
    body.get("count")
        .and_then(Value::as_u64)
        .ok_or_else(|| ClientError::InvalidResponse("Missing 'count' in response".to_string()))
}

/// Refresh the addressed indices so recent writes become searchable.
pub async fn refresh(client: &reqwest::Client, base_url: &str, path: &ResolvedPath) -> Result<()> {
    send_resolved(client, base_url, Method::POST, path, "_refresh", None).await?;
    Ok(())
}
