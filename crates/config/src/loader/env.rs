//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `ES_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Loading the settings file (see file.rs).
//! - Building the final ConnectionSettings (see builder.rs).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid values return ConfigError::InvalidValue naming the variable.

use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_BASE_URL, ENV_CONFIG_PATH, ENV_DEFAULT_INDEX, ENV_TIMEOUT, ENV_TYPE_INDICES,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Environment values overwrite whatever the loader already holds. The
/// settings file path is only taken from the environment when none was set
/// explicitly.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.config_path().is_none()
        && let Some(path) = env_var_or_none(ENV_CONFIG_PATH)
    {
        loader.set_config_path(Some(PathBuf::from(path)));
    }
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(index) = env_var_or_none(ENV_DEFAULT_INDEX) {
        loader.set_default_index(Some(index));
    }
    if let Some(mappings) = env_var_or_none(ENV_TYPE_INDICES) {
        for (type_name, index) in parse_type_indices(ENV_TYPE_INDICES, &mappings)? {
            loader.insert_type_index(type_name, index);
        }
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    Ok(())
}

/// Parse a `Type=index,Other=index2` list of type mappings.
///
/// Blank entries are skipped so trailing commas are tolerated.
pub fn parse_type_indices(var: &str, raw: &str) -> Result<Vec<(String, String)>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (type_name, index) = entry.split_once('=').ok_or_else(|| invalid(var, entry))?;
            let (type_name, index) = (type_name.trim(), index.trim());
            if type_name.is_empty() || index.is_empty() {
                return Err(invalid(var, entry));
            }
            Ok((type_name.to_string(), index.to_string()))
        })
        .collect()
}

fn invalid(var: &str, entry: &str) -> ConfigError {
    ConfigError::InvalidValue {
        var: var.to_string(),
        message: format!("expected Type=index pairs separated by commas, got '{entry}'"),
    }
}
