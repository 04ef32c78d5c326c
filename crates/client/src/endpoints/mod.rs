//! REST API endpoint implementations.

mod request;
mod search;
pub mod url_encoding;

pub use request::send_resolved;
pub use search::{count, refresh, search};
