//! Resolved request path handed to the transport.

use es_config::constants::{ALL_INDICES, INDEX_SEPARATOR};

use crate::endpoints::url_encoding::encode_path_segment;
use crate::parameters::RequestParameters;

/// Index segment and parameters produced by resolving an [`IndicesPath`](super::IndicesPath).
#[derive(Debug, Clone)]
pub struct ResolvedPath {
    index: String,
    parameters: RequestParameters,
}

impl ResolvedPath {
    pub(crate) fn new(index: String, parameters: RequestParameters) -> Self {
        Self { index, parameters }
    }

    /// Comma-joined index names, `_all`, or empty for no index filter.
    pub fn index(&self) -> &str {
        &self.index
    }

    pub fn is_all_indices(&self) -> bool {
        self.index == ALL_INDICES
    }

    pub fn parameters(&self) -> &RequestParameters {
        &self.parameters
    }

    pub fn into_parameters(self) -> RequestParameters {
        self.parameters
    }

    /// Compose `/{index}/{suffix}` for an operation such as `_search`.
    ///
    /// Each index name is percent-encoded on its own so commas keep separating
    /// names. Names keep their positions, so an empty name inferred between
    /// two others leaves `a,,b`. Only a wholly empty index segment or suffix is
    /// omitted: an empty index segment yields `/{suffix}`.
    pub fn request_path(&self, suffix: &str) -> String {
        let index = self
            .index
            .split(INDEX_SEPARATOR)
            .map(encode_path_segment)
            .collect::<Vec<_>>()
            .join(INDEX_SEPARATOR);
        let suffix = suffix.trim_start_matches('/');

        let parts: Vec<&str> = [index.as_str(), suffix]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        format!("/{}", parts.join("/"))
    }
}
