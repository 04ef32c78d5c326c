//! Error handling tests for resolution and dispatch.

mod common;

use common::*;
use es_client::{ClientError, InferenceError};
use wiremock::matchers::{method, path};

struct Unmapped;

#[tokio::test]
async fn test_inference_error_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let settings = ConnectionSettings::new(mock_server.uri());
    let client = EsClient::builder().from_settings(&settings).build().unwrap();
    let mut indices = IndicesPath::new().index_for::<Unmapped>();

    let err = client.search(&mut indices, None, None).await.unwrap_err();
    assert!(err.is_resolution_error());
    assert!(matches!(
        err,
        ClientError::NameInference(InferenceError::UnmappedType { .. })
    ));
}

#[tokio::test]
async fn test_missing_default_index_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = EsClient::builder()
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    let err = client
        .search(&mut IndicesPath::new(), None, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::NameInference(InferenceError::NoDefaultIndex)
    ));
}

#[tokio::test]
async fn test_api_error_uses_cluster_reason() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/missing/_search"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "type": "index_not_found_exception",
                "reason": "no such index [missing]"
            },
            "status": 404
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .search(&mut IndicesPath::new().index("missing"), None, None)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    match err {
        ClientError::ApiError {
            status,
            url,
            message,
        } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/missing/_search"));
            assert_eq!(message, "index_not_found_exception: no such index [missing]");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_allowed_status_returns_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/missing/_search"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "status": 404 })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut indices = IndicesPath::new()
        .index("missing")
        .with_request_configuration(RequestConfiguration::new().with_allowed_status(404));

    let body = client.search(&mut indices, None, None).await.unwrap();
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_non_json_success_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/logs/_search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .search(&mut IndicesPath::new(), None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}
