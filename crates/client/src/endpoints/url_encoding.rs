//! Percent-encoding for index names placed in request paths.
//!
//! Index names are not validated, so a name containing `/`, `?` or `#` would
//! otherwise change the shape of the request URL.
//!
//! # Example
//!
//! ```
//! use es_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("logs/2024"), "logs%2F2024");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in a single index name.
///
/// Wildcards (`*`), `-`, `_`, `.` and the
/// cross-cluster separator (`:`) pass through unchanged.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode one index name for use inside a path segment.
///
/// # Examples
///
/// ```
/// use es_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("logs-*"), "logs-*");
/// assert_eq!(encode_path_segment("my index"), "my%20index");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
