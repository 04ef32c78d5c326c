//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Support loading from environment variables, the settings file, and direct builder methods.
//! - Build and validate the final `ConnectionSettings`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Settings file parsing (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods and environment variables overwrite earlier values; the
//!   settings file only fills values that are still missing.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::ConnectionSettings;

/// Configuration loader that builds settings from the environment and a settings file.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    default_index: Option<String>,
    type_indices: BTreeMap<String, String>,
    timeout: Option<Duration>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the settings file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from the settings file.
    ///
    /// Values already present on the loader are kept.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Read configuration from `ES_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the default index.
    pub fn with_default_index(mut self, index: String) -> Self {
        self.default_index = Some(index);
        self
    }

    /// Map a type short name to an index.
    pub fn with_type_index(mut self, type_name: String, index: String) -> Self {
        self.type_indices.insert(type_name, index);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the final settings.
    pub fn build(self) -> Result<ConnectionSettings, ConfigError> {
        let base_url = validate_and_normalize_base_url(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        Self::validate_timeout(timeout)?;

        let default_index = self
            .default_index
            .map(|index| index.trim().to_string())
            .filter(|index| !index.is_empty());

        Ok(ConnectionSettings {
            base_url,
            default_index,
            type_indices: self.type_indices,
            timeout,
        })
    }

    /// Checks that the timeout is greater than 0 and at most MAX_TIMEOUT_SECS.
    fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
        let secs = timeout.as_secs();
        if secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }
        if secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }
        Ok(())
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn base_url(&self) -> Option<&String> {
        self.base_url.as_ref()
    }

    pub(crate) fn default_index(&self) -> Option<&String> {
        self.default_index.as_ref()
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn type_index(&self, type_name: &str) -> Option<&String> {
        self.type_indices.get(type_name)
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_default_index(&mut self, index: Option<String>) {
        self.default_index = index;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn insert_type_index(&mut self, type_name: String, index: String) {
        self.type_indices.insert(type_name, index);
    }
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace; blank is treated as missing
/// - Parse as an absolute http(s) URL with a host
/// - Normalize by stripping trailing slashes
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. http://localhost:9200): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!(
                "scheme must be http or https (e.g. http://localhost:9200), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. http://localhost:9200)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
