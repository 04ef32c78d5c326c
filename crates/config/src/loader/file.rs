//! Settings file loading for configuration.
//!
//! Responsibilities:
//! - Read the JSON settings file from an explicit path or the default location.
//! - Apply file values to a ConfigLoader instance without overriding values
//!   that are already present.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//! - Building the final ConnectionSettings (see builder.rs).
//!
//! Invariants:
//! - A missing file at the default location is not an error.
//! - A missing file at an explicitly configured path is an error.
//! - An undeterminable config directory skips the file with a warning.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::paths::default_config_path;

/// On-disk representation of the settings file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SettingsFile {
    pub base_url: Option<String>,
    pub default_index: Option<String>,
    #[serde(default)]
    pub type_indices: BTreeMap<String, String>,
    pub timeout: Option<u64>,
}

/// Apply the settings file to the loader.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let (path, explicit) = match loader.config_path() {
        Some(path) => (path.clone(), true),
        None => match default_config_path() {
            Ok(path) => (path, false),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping settings file: no config directory");
                return Ok(());
            }
        },
    };

    if !explicit && !path.exists() {
        tracing::debug!(path = %path.display(), "No settings file at default location");
        return Ok(());
    }

    let file = read_settings_file(&path)?;
    apply_settings_file(loader, file);
    Ok(())
}

pub(crate) fn read_settings_file(path: &Path) -> Result<SettingsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_settings_file(loader: &mut ConfigLoader, file: SettingsFile) {
    if loader.base_url().is_none() {
        loader.set_base_url(file.base_url);
    }
    if loader.default_index().is_none() {
        loader.set_default_index(file.default_index);
    }
    if loader.timeout().is_none() {
        loader.set_timeout(file.timeout.map(Duration::from_secs));
    }
    for (type_name, index) in file.type_indices {
        if loader.type_index(&type_name).is_none() {
            loader.insert_type_index(type_name, index);
        }
    }
}
