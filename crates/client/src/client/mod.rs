//! Search cluster client.
//!
//! This module provides [`EsClient`], which resolves index selections against
//! its connection settings and dispatches the resulting requests.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `search`: Index-scoped operations (search, count, refresh)
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Index selection rules (delegated to [`crate::path::IndicesPath`])

pub mod builder;
mod search;

use es_config::ConnectionSettings;
use reqwest::Method;
use serde_json::Value;

use crate::endpoints;
use crate::error::Result;
use crate::inference::ElasticInferrer;
use crate::parameters::RequestParameters;
use crate::path::{IndicesPath, ResolvedPath};

/// Client for a search cluster's REST API.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use es_client::EsClient;
/// use es_config::ConfigLoader;
///
/// let settings = ConfigLoader::new().from_env()?.build()?;
/// let client = EsClient::builder().from_settings(&settings).build()?;
/// ```
#[derive(Debug, Clone)]
pub struct EsClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) settings: ConnectionSettings,
}

impl EsClient {
    /// Create a new client builder.
    pub fn builder() -> builder::EsClientBuilder {
        builder::EsClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Settings used for index name inference.
    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    /// Inferrer over this client's settings.
    pub fn inferrer(&self) -> ElasticInferrer<'_> {
        ElasticInferrer::new(&self.settings)
    }

    /// Resolve `path` against this client's settings.
    pub fn resolve(
        &self,
        path: &mut IndicesPath,
        parameters: Option<RequestParameters>,
    ) -> Result<ResolvedPath> {
        path.resolve(&self.inferrer(), parameters)
    }

    /// Send an arbitrary request for a resolved path.
    pub async fn send(
        &self,
        method: Method,
        path: &ResolvedPath,
        suffix: &str,
        body: Option<&Value>,
    ) -> Result<Value> {
        endpoints::send_resolved(&self.http, &self.base_url, method, path, suffix, body).await
    }
}
