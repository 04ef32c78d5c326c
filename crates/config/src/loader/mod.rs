//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and a JSON settings file.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over settings file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod file;

pub use builder::ConfigLoader;
pub use env::{env_var_or_none, parse_type_indices};
pub use error::ConfigError;

#[cfg(test)]
mod tests;
