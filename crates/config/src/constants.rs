//! Centralized constants for the es-client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9200";

// =============================================================================
// Path Conventions
// =============================================================================

/// Index segment token that addresses every index in the cluster.
pub const ALL_INDICES: &str = "_all";

/// Separator between index names inside a single path segment.
pub const INDEX_SEPARATOR: &str = ",";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_BASE_URL: &str = "ES_BASE_URL";
pub const ENV_DEFAULT_INDEX: &str = "ES_DEFAULT_INDEX";
pub const ENV_TYPE_INDICES: &str = "ES_TYPE_INDICES";
pub const ENV_TIMEOUT: &str = "ES_TIMEOUT";
pub const ENV_CONFIG_PATH: &str = "ES_CONFIG_PATH";
