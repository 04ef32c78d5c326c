//! Error types for the search client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised while inferring index names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    /// A default index was required but none is configured.
    #[error("No default index configured. Set ES_DEFAULT_INDEX or select an index explicitly.")]
    NoDefaultIndex,

    /// A type marker has no index mapping and there is no default index to fall back to.
    #[error("No index mapped for type '{type_name}' and no default index configured")]
    UnmappedType { type_name: String },
}

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Index name inference failed while resolving a request path.
    #[error("Index name inference failed: {0}")]
    NameInference(#[from] InferenceError),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from the cluster.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Invalid response format.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error was raised before any request was sent.
    pub fn is_resolution_error(&self) -> bool {
        matches!(self, Self::NameInference(_))
    }

    /// Check if the cluster reported that the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }
}
