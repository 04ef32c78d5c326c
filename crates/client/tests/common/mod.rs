//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use es_client::{EsClient, IndicesPath, RequestConfiguration, RequestParameters};
#[allow(unused_imports)]
pub use es_config::ConnectionSettings;
#[allow(unused_imports)]
pub use serde_json::json;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Marker type mapped to the `tweets` index by [`client_for`].
#[allow(dead_code)]
pub struct Tweet;

/// Build a client for `server` with default index `logs` and `Tweet` mapped to `tweets`.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> EsClient {
    let settings = ConnectionSettings::new(server.uri())
        .with_default_index("logs")
        .map_type_index::<Tweet>("tweets");
    EsClient::builder().from_settings(&settings).build().unwrap()
}

/// Minimal search response body.
#[allow(dead_code)]
pub fn search_response(total: u64) -> serde_json::Value {
    json!({
        "took": 1,
        "timed_out": false,
        "hits": { "total": { "value": total, "relation": "eq" }, "hits": [] }
    })
}
