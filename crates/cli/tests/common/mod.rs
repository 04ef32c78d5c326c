//! Shared test utilities for es-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Keep the host's settings file and ES_* variables out of the test run.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.

use assert_cmd::Command;

/// Returns a hermetic `es-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `HOME` and `XDG_CONFIG_HOME` point at a directory with no settings file.
/// - ES_* env vars are cleared to ensure no leakage from the host.
pub fn es_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("es-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    let home = std::env::temp_dir().join("es-cli-tests-empty-home");
    cmd.env("HOME", &home).env("XDG_CONFIG_HOME", home.join(".config"));

    cmd.env_remove("ES_BASE_URL")
        .env_remove("ES_DEFAULT_INDEX")
        .env_remove("ES_TYPE_INDICES")
        .env_remove("ES_TIMEOUT")
        .env_remove("ES_CONFIG_PATH")
        .env_remove("ES_USERNAME")
        .env_remove("ES_PASSWORD")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `es-cli` command with a specific base URL.
#[allow(dead_code)]
pub fn es_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = es_cmd();
    cmd.env("ES_BASE_URL", base_url);
    cmd
}
