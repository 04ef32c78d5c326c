//! Settings file tests for the configuration loader.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::TempDir;

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

/// Write `content` to `config.json` inside `dir` and return its path.
pub fn write_settings_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_settings_file_values_applied() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_settings_file(
        temp_dir.path(),
        r#"{
            "base_url": "http://file-host:9200/",
            "default_index": "logs",
            "type_indices": {"Tweet": "tweets"},
            "timeout": 10
        }"#,
    );

    let settings = ConfigLoader::new()
        .with_config_path(path)
        .from_file()
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(settings.base_url, "http://file-host:9200");
    assert_eq!(settings.default_index.as_deref(), Some("logs"));
    assert_eq!(settings.index_for_type("Tweet"), Some("tweets"));
    assert_eq!(settings.timeout, Duration::from_secs(10));
}

#[test]
fn test_settings_file_does_not_override_builder() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_settings_file(
        temp_dir.path(),
        r#"{"default_index": "from-file", "type_indices": {"Tweet": "file-tweets"}}"#,
    );

    let settings = ConfigLoader::new()
        .with_default_index("from-builder".to_string())
        .with_type_index("Tweet".to_string(), "builder-tweets".to_string())
        .with_config_path(path)
        .from_file()
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(settings.default_index.as_deref(), Some("from-builder"));
    assert_eq!(settings.index_for_type("Tweet"), Some("builder-tweets"));
}

#[test]
fn test_missing_explicit_settings_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("missing.json"))
        .from_file();

    assert!(matches!(result, Err(ConfigError::ConfigFileRead { .. })));
}

#[test]
fn test_malformed_settings_file_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_settings_file(temp_dir.path(), "{ not json");

    let result = ConfigLoader::new().with_config_path(path.clone()).from_file();
    match result {
        Err(ConfigError::ConfigFileParse { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_unknown_settings_field_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_settings_file(temp_dir.path(), r#"{"default_indx": "typo"}"#);

    let result = ConfigLoader::new().with_config_path(path).from_file();
    assert!(matches!(result, Err(ConfigError::ConfigFileParse { .. })));
}
