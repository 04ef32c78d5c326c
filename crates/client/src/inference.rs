//! Index name inference.
//!
//! Responsibilities:
//! - Represent index identifiers as literal names or type markers.
//! - Map type markers to index names through [`ConnectionSettings`].
//! - Supply the configured default index.
//!
//! Does NOT handle:
//! - Index name validation; names pass through unchanged.
//!
//! Invariants:
//! - A literal name always resolves to itself.
//! - A type marker resolves to its mapping, else the default index, else fails.

use std::borrow::Cow;
use std::fmt;

use es_config::{ConnectionSettings, short_type_name};

use crate::error::InferenceError;

/// Reference to a type whose index is looked up at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMarker {
    type_name: Cow<'static, str>,
}

impl TypeMarker {
    /// Marker for the Rust type `T`.
    pub fn of<T: ?Sized>() -> Self {
        Self {
            type_name: Cow::Borrowed(std::any::type_name::<T>()),
        }
    }

    /// Marker for a type known only by name, e.g. one given on the command line.
    pub fn named(type_name: impl Into<String>) -> Self {
        Self {
            type_name: Cow::Owned(type_name.into()),
        }
    }

    /// The name the marker was created with.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The key used for type-to-index mappings.
    pub fn short_name(&self) -> &str {
        short_type_name(&self.type_name)
    }
}

impl fmt::Display for TypeMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// An index identifier: either a literal index name or a type marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexNameMarker {
    Name(String),
    Type(TypeMarker),
}

impl From<&str> for IndexNameMarker {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for IndexNameMarker {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<TypeMarker> for IndexNameMarker {
    fn from(marker: TypeMarker) -> Self {
        Self::Type(marker)
    }
}

/// Capability that turns index identifiers into concrete index names.
pub trait IndexNameInferrer {
    /// The configured default index.
    fn default_index(&self) -> Result<String, InferenceError>;

    /// Resolve a single identifier to an index name.
    fn index_name(&self, marker: &IndexNameMarker) -> Result<String, InferenceError>;
}

/// Inferrer backed by [`ConnectionSettings`].
#[derive(Debug, Clone, Copy)]
pub struct ElasticInferrer<'a> {
    settings: &'a ConnectionSettings,
}

impl<'a> ElasticInferrer<'a> {
    pub fn new(settings: &'a ConnectionSettings) -> Self {
        Self { settings }
    }
}

impl IndexNameInferrer for ElasticInferrer<'_> {
    fn default_index(&self) -> Result<String, InferenceError> {
        self.settings
            .default_index
            .clone()
            .ok_or(InferenceError::NoDefaultIndex)
    }

    fn index_name(&self, marker: &IndexNameMarker) -> Result<String, InferenceError> {
        match marker {
            IndexNameMarker::Name(name) => Ok(name.clone()),
            IndexNameMarker::Type(marker) => {
                if let Some(index) = self.settings.index_for_type(marker.short_name()) {
                    return Ok(index.to_string());
                }
                self.settings.default_index.clone().ok_or_else(|| {
                    InferenceError::UnmappedType {
                        type_name: marker.short_name().to_string(),
                    }
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tweet;
    struct User;

    fn settings() -> ConnectionSettings {
        ConnectionSettings::default()
            .with_default_index("logs")
            .map_type_index::<Tweet>("tweets")
    }

    #[test]
    fn test_type_marker_short_name() {
        let marker = TypeMarker::of::<Tweet>();
        assert!(marker.type_name().ends_with("::Tweet"));
        assert_eq!(marker.short_name(), "Tweet");
        assert_eq!(marker.to_string(), "Tweet");
        assert_eq!(TypeMarker::named("Tweet").short_name(), "Tweet");
    }

    #[test]
    fn test_literal_name_resolves_to_itself() {
        let settings = settings();
        let inferrer = ElasticInferrer::new(&settings);
        assert_eq!(
            inferrer.index_name(&"Mixed-Case_name".into()).unwrap(),
            "Mixed-Case_name"
        );
    }

    #[test]
    fn test_mapped_type_resolves_to_mapping() {
        let settings = settings();
        let inferrer = ElasticInferrer::new(&settings);
        let marker = IndexNameMarker::from(TypeMarker::of::<Tweet>());
        assert_eq!(inferrer.index_name(&marker).unwrap(), "tweets");
    }

    #[test]
    fn test_unmapped_type_falls_back_to_default_index() {
        let settings = settings();
        let inferrer = ElasticInferrer::new(&settings);
        let marker = IndexNameMarker::from(TypeMarker::of::<User>());
        assert_eq!(inferrer.index_name(&marker).unwrap(), "logs");
    }

    #[test]
    fn test_unmapped_type_without_default_fails() {
        let settings = ConnectionSettings::default();
        let inferrer = ElasticInferrer::new(&settings);
        let marker = IndexNameMarker::from(TypeMarker::of::<User>());
        assert_eq!(
            inferrer.index_name(&marker),
            Err(InferenceError::UnmappedType {
                type_name: "User".to_string()
            })
        );
    }

    #[test]
    fn test_default_index_missing() {
        let settings = ConnectionSettings::default();
        let inferrer = ElasticInferrer::new(&settings);
        assert_eq!(inferrer.default_index(), Err(InferenceError::NoDefaultIndex));
    }
}
