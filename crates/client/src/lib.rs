//! Search cluster REST API client.
//!
//! This crate resolves index selections (explicit names, types mapped to
//! index names, every index, or the configured default index) into request
//! paths and parameter bundles, and dispatches them over HTTP.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod inference;
pub mod parameters;
pub mod path;

pub use client::EsClient;
pub use client::builder::EsClientBuilder;
pub use error::{ClientError, InferenceError, Result};
pub use inference::{ElasticInferrer, IndexNameInferrer, IndexNameMarker, TypeMarker};
pub use parameters::{BasicAuth, RequestConfiguration, RequestParameters};
pub use path::{AllIndices, ExplicitIndices, IndicesPath, ResolvedPath};
