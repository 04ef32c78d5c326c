//! Request path descriptors.
//!
//! A descriptor records which indices a request targets and is resolved once,
//! at request construction time, into a [`ResolvedPath`] for the transport.

mod resolved;
mod selection;

pub use resolved::ResolvedPath;
pub use selection::{AllIndices, ExplicitIndices, IndicesPath};
