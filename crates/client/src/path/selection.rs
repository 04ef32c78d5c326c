//! Index selection builder and path resolution.
//!
//! Responsibilities:
//! - Record which indices a request targets: explicit names, type markers,
//!   every index, or nothing (meaning the configured default index).
//! - Resolve the selection into a [`ResolvedPath`] through an [`IndexNameInferrer`].
//!
//! Does NOT handle:
//! - Index name validation.
//! - Sending requests (see `endpoints`).
//!
//! Invariants:
//! - Selection calls replace earlier selections; nothing accumulates.
//! - An enabled all-indices flag wins over any explicit selection.
//! - When neither the flag nor an explicit selection was ever set, resolution
//!   stores the default index as the explicit selection. The write is sticky.
//! - An explicit empty selection resolves to an empty index segment.

use es_config::constants::{ALL_INDICES, INDEX_SEPARATOR};
use tracing::{debug, trace};

use crate::error::{InferenceError, Result};
use crate::inference::{IndexNameInferrer, IndexNameMarker, TypeMarker};
use crate::parameters::{RequestConfiguration, RequestParameters};
use crate::path::ResolvedPath;

/// State of the all-indices flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AllIndices {
    #[default]
    Unset,
    Disabled,
    Enabled,
}

impl AllIndices {
    pub fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl From<bool> for AllIndices {
    fn from(flag: bool) -> Self {
        if flag { Self::Enabled } else { Self::Disabled }
    }
}

/// State of the explicit index selection.
///
/// `Set(vec![])` is a real selection and is distinct from `Unset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExplicitIndices {
    #[default]
    Unset,
    Set(Vec<IndexNameMarker>),
}

impl ExplicitIndices {
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Selected markers in insertion order; empty when unset.
    pub fn markers(&self) -> &[IndexNameMarker] {
        match self {
            Self::Unset => &[],
            Self::Set(markers) => markers,
        }
    }
}

/// Builder for requests addressed to `/{indices}`.
///
/// The index segment is optional: without a selection the configured default
/// index is used, and every index must be requested explicitly with
/// [`all_indices`](Self::all_indices).
///
/// # Example
///
/// ```rust,ignore
/// use es_client::{ElasticInferrer, IndicesPath};
/// use es_config::ConnectionSettings;
///
/// let settings = ConnectionSettings::default().with_default_index("logs");
/// let mut path = IndicesPath::new().indices(["a", "b"]);
/// let resolved = path.resolve(&ElasticInferrer::new(&settings), None)?;
/// assert_eq!(resolved.index(), "a,b");
/// ```
#[derive(Debug, Clone, Default)]
pub struct IndicesPath {
    indices: ExplicitIndices,
    all_indices: AllIndices,
    request_configuration: Option<RequestConfiguration>,
}

impl IndicesPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Address every index.
    pub fn all_indices(self) -> Self {
        self.with_all_indices(true)
    }

    /// Set the all-indices flag explicitly.
    pub fn with_all_indices(mut self, all: bool) -> Self {
        self.all_indices = AllIndices::from(all);
        self
    }

    /// Select a single index by name.
    pub fn index(self, name: impl Into<String>) -> Self {
        self.indices([name.into()])
    }

    /// Select the index mapped to the type `T`.
    ///
    /// The mapping is looked up when the path is resolved.
    pub fn index_for<T: ?Sized>(self) -> Self {
        self.index_types([TypeMarker::of::<T>()])
    }

    /// Replace the selection with the given index names.
    pub fn indices<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_markers(names.into_iter().map(|name| IndexNameMarker::Name(name.into())))
    }

    /// Replace the selection with the given type markers.
    pub fn index_types<I>(self, types: I) -> Self
    where
        I: IntoIterator<Item = TypeMarker>,
    {
        self.index_markers(types.into_iter().map(IndexNameMarker::Type))
    }

    /// Replace the selection with any mix of names and type markers.
    pub fn index_markers<I>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = IndexNameMarker>,
    {
        self.indices = ExplicitIndices::Set(markers.into_iter().collect());
        self
    }

    /// Attach transport overrides applied to the resolved parameters.
    pub fn with_request_configuration(mut self, configuration: RequestConfiguration) -> Self {
        self.request_configuration = Some(configuration);
        self
    }

    pub fn explicit_indices(&self) -> &ExplicitIndices {
        &self.indices
    }

    pub fn all_indices_flag(&self) -> AllIndices {
        self.all_indices
    }

    pub fn request_configuration(&self) -> Option<&RequestConfiguration> {
        self.request_configuration.as_ref()
    }

    /// Store the default index as the selection if nothing was ever selected.
    ///
    /// Returns whether the default was applied. This is the first step of
    /// [`resolve`](Self::resolve) and leaves the builder changed.
    pub fn apply_default_index<N>(&mut self, inferrer: &N) -> std::result::Result<bool, InferenceError>
    where
        N: IndexNameInferrer + ?Sized,
    {
        if self.all_indices.is_set() || self.indices.is_set() {
            return Ok(false);
        }
        let default_index = inferrer.default_index()?;
        debug!(index = %default_index, "No index selected, using default index");
        self.indices = ExplicitIndices::Set(vec![IndexNameMarker::Name(default_index)]);
        Ok(true)
    }

    /// Resolve the selection into an index segment and parameter bundle.
    ///
    /// `existing` parameters are kept; the builder's request configuration is
    /// merged into them.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NameInference`](crate::ClientError::NameInference)
    /// when the default index or a type mapping cannot be inferred.
    pub fn resolve<N>(
        &mut self,
        inferrer: &N,
        existing: Option<RequestParameters>,
    ) -> Result<ResolvedPath>
    where
        N: IndexNameInferrer + ?Sized,
    {
        self.apply_default_index(inferrer)?;

        let index = if self.all_indices.is_enabled() {
            ALL_INDICES.to_string()
        } else {
            self.indices
                .markers()
                .iter()
                .map(|marker| inferrer.index_name(marker))
                .collect::<std::result::Result<Vec<_>, _>>()?
                .join(INDEX_SEPARATOR)
        };

        if index.is_empty() {
            debug!("Explicit index selection is empty, resolving to an empty index segment");
        }

        let mut parameters = existing.unwrap_or_default();
        if let Some(overrides) = &self.request_configuration {
            parameters = parameters.request_configuration(|mut cfg| {
                cfg.merge(overrides);
                cfg
            });
        }

        trace!(index = %index, "Resolved index path");
        Ok(ResolvedPath::new(index, parameters))
    }
}
