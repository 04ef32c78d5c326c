//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the standard settings file path.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use anyhow::Context;

/// Returns the default path to the settings file.
///
/// - Linux: `~/.config/es-client/config.json`
/// - macOS: `~/Library/Application Support/es-client/config.json`
/// - Windows: `%AppData%\es-client\config.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "es-client")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_matches_expected_project_dirs() {
        let expected = directories::ProjectDirs::from("", "", "es-client")
            .unwrap()
            .config_dir()
            .join("config.json");

        assert_eq!(default_config_path().unwrap(), expected);
    }
}
