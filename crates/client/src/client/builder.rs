//! Client builder for constructing [`EsClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects)
//!
//! # Invariants
//! - `base_url` is required, either directly or through `from_settings`
//! - The base URL is always normalized to have no trailing slashes

use std::time::Duration;

use es_config::{
    ConnectionSettings,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

use crate::client::EsClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`EsClient`].
///
/// # Example
///
/// ```rust,ignore
/// use es_client::EsClient;
///
/// let client = EsClient::builder()
///     .base_url("http://localhost:9200".to_string())
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub struct EsClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    settings: Option<ConnectionSettings>,
}

impl Default for EsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            settings: None,
        }
    }
}

impl EsClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the cluster, e.g. `http://localhost:9200`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the default request timeout.
    ///
    /// Default is 30 seconds. Individual requests may override it through
    /// their request configuration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Take base URL, timeout and index inference settings from `settings`.
    pub fn from_settings(mut self, settings: &ConnectionSettings) -> Self {
        self.base_url = Some(settings.base_url.clone());
        self.timeout = settings.timeout;
        self.settings = Some(settings.clone());
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`EsClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<EsClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        let settings = self
            .settings
            .unwrap_or_else(|| ConnectionSettings::new(base_url.clone()));

        Ok(EsClient {
            http,
            base_url,
            settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_base_url() {
        let result = EsClient::builder().build();
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_from_settings_preserves_settings() {
        let settings = ConnectionSettings::new("http://es.example.com:9200")
            .with_default_index("logs")
            .with_timeout(Duration::from_secs(120));

        let builder = EsClient::builder().from_settings(&settings);
        assert_eq!(
            builder.base_url.as_deref(),
            Some("http://es.example.com:9200")
        );
        assert_eq!(builder.timeout, Duration::from_secs(120));

        let client = builder.build().unwrap();
        assert_eq!(client.settings().default_index.as_deref(), Some("logs"));
    }

    #[test]
    fn test_without_settings_has_no_default_index() {
        let client = EsClient::builder()
            .base_url("http://localhost:9200".to_string())
            .build()
            .unwrap();
        assert_eq!(client.settings().default_index, None);
        assert_eq!(client.settings().base_url, "http://localhost:9200");
    }

    #[test]
    fn test_normalize_base_url_trailing_slashes() {
        assert_eq!(
            EsClientBuilder::normalize_base_url("http://localhost:9200//".to_string()),
            "http://localhost:9200"
        );
        assert_eq!(
            EsClientBuilder::normalize_base_url("http://localhost:9200".to_string()),
            "http://localhost:9200"
        );
    }
}
