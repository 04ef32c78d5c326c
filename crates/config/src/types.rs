//! Configuration types for the es-client workspace.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection settings consumed by index-name inference and the transport.
///
/// Invariants:
/// - `base_url` never carries a trailing slash once produced by `ConfigLoader::build`.
/// - `type_indices` is keyed by short type name (see [`short_type_name`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    /// Base URL of the cluster (e.g., http://localhost:9200)
    pub base_url: String,
    /// Index used when a request does not select any index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_index: Option<String>,
    /// Type short name to index name mappings
    #[serde(default)]
    pub type_indices: BTreeMap<String, String>,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ConnectionSettings {
    /// Create settings for `base_url` with no default index and no type mappings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_index: None,
            type_indices: BTreeMap::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the index used when no index is selected.
    pub fn with_default_index(mut self, index: impl Into<String>) -> Self {
        self.default_index = Some(index.into());
        self
    }

    /// Map the Rust type `T` to `index`.
    ///
    /// The mapping is keyed by the short name of `T`, so it is shared with
    /// mappings loaded from the environment or a settings file.
    pub fn map_type_index<T: ?Sized>(self, index: impl Into<String>) -> Self {
        self.with_type_index(short_type_name(std::any::type_name::<T>()), index)
    }

    /// Map a type short name to `index`.
    pub fn with_type_index(mut self, type_name: impl Into<String>, index: impl Into<String>) -> Self {
        self.type_indices.insert(type_name.into(), index.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Look up the index mapped to a type short name.
    pub fn index_for_type(&self, type_name: &str) -> Option<&str> {
        self.type_indices.get(type_name).map(String::as_str)
    }
}

/// Reduce a fully qualified type name to its short name.
///
/// Generic arguments are dropped along with the module path, so
/// `app::models::Tweet` and `app::models::Tweet<u8>` both yield `Tweet`.
pub fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
