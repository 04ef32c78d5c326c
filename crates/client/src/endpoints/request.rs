//! Sending a resolved path over HTTP.
//!
//! This module applies a [`ResolvedPath`] to a `reqwest` request:
//! - the index segment and operation suffix form the URL path
//! - query parameters become the query string
//! - the request configuration supplies timeout, headers and credentials
//!
//! Responses outside 2xx are turned into [`ClientError::ApiError`] unless the
//! request configuration allows that status.

use reqwest::{Method, RequestBuilder};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::parameters::RequestConfiguration;
use crate::path::ResolvedPath;

/// Header carrying a caller-supplied id that the cluster echoes in its logs.
const OPAQUE_ID_HEADER: &str = "X-Opaque-Id";

/// Error body returned by the cluster.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Structured {
        #[serde(rename = "type")]
        error_type: String,
        reason: String,
    },
    Plain(String),
}

/// Send `method` to `{base_url}{path.request_path(suffix)}` and decode the JSON response.
///
/// An empty response body decodes to `Value::Null`.
pub async fn send_resolved(
    client: &reqwest::Client,
    base_url: &str,
    method: Method,
    path: &ResolvedPath,
    suffix: &str,
    body: Option<&Value>,
) -> Result<Value> {
    let url = format!("{}{}", base_url, path.request_path(suffix));
    let params = path.parameters();
    let query: Vec<(&str, &str)> = params.query_pairs().collect();

    let mut builder = client.request(method.clone(), url.as_str()).query(&query);
    if let Some(cfg) = params.configuration() {
        builder = apply_configuration(builder, cfg);
    }
    if let Some(body) = body {
        builder = builder.json(body);
    }

    debug!(%method, %url, "Sending request");
    let response = builder.send().await?;

    let status = response.status().as_u16();
    let allowed = params
        .configuration()
        .map(|cfg| cfg.allows_status(status))
        .unwrap_or_else(|| response.status().is_success());
    let response_url = response.url().to_string();
    let text = response.text().await?;

    if !allowed {
        return Err(ClientError::ApiError {
            status,
            url: response_url,
            message: error_message(text),
        });
    }

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse response body: {}", e)))
}

fn apply_configuration(mut builder: RequestBuilder, cfg: &RequestConfiguration) -> RequestBuilder {
    if let Some(timeout) = cfg.request_timeout {
        builder = builder.timeout(timeout);
    }
    for (name, value) in &cfg.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(id) = &cfg.opaque_id {
        builder = builder.header(OPAQUE_ID_HEADER, id.as_str());
    }
    if let Some(auth) = &cfg.basic_auth {
        builder = builder.basic_auth(&auth.username, Some(auth.password.expose_secret()));
    }
    builder
}

/// Prefer the cluster's structured error reason over the raw body.
fn error_message(body: String) -> String {
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody {
            error: ErrorDetail::Structured { error_type, reason },
        }) => format!("{}: {}", error_type, reason),
        Ok(ErrorBody {
            error: ErrorDetail::Plain(message),
        }) => message,
        Err(_) => body,
    }
}
