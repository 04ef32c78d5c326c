//! Configuration management for the es-client workspace.
//!
//! This crate provides the connection settings consumed by index-name
//! inference and the HTTP transport, loaded from builder calls, environment
//! variables, a JSON settings file, and an optional `.env` file.

pub mod constants;
mod loader;
mod paths;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none, parse_type_indices};
pub use paths::default_config_path;
pub use types::{ConnectionSettings, short_type_name};
