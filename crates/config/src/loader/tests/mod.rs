//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests that touch the environment or cwd use `serial_test` plus `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

mod file_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
