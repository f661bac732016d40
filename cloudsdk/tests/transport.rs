//! Integration tests for the shared transport.
//!
//! These tests use wiremock to verify URL and header construction, status
//! checking, error bodies and the retry loop.

use cloudsdk::{ApiClient, ApiError, RequestParts, RetryPolicy};
use cloudsdk_define::{AuthStrategy, RestMethod};
use serde_json::{Value, json};
use tracing_test::traced_test;
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        max_retries: 2,
        initial_backoff_ms: 1,
        max_backoff_ms: 5,
        multiplier: 2.0,
    }
}

fn client(server: &MockServer) -> ApiClient {
    ApiClient::builder(Url::parse(&server.uri()).unwrap())
        .default_query("api-version", "2018-06-01-preview")
        .auth(AuthStrategy::BearerToken { header: None })
        .credential("test-token")
        .retry(fast_retry())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_sends_query_and_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nodes/ABC"))
        .and(query_param("api-version", "2018-06-01-preview"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"uuid": "ABC"})))
        .expect(1)
        .mount(&server)
        .await;

    let parts = RequestParts::new("get_node", RestMethod::Get, "/nodes/ABC");
    let response = client(&server).send::<Value>(parts).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body["uuid"], "ABC");
}

#[tokio::test]
async fn test_json_body_and_expected_created() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/things/t1"))
        .and(body_json(json!({"name": "t1"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"name": "t1"})))
        .mount(&server)
        .await;

    let mut parts = RequestParts::new("put_thing", RestMethod::Put, "/things/t1").expect([200, 201]);
    parts.body = Some(json!({"name": "t1"}));
    let response = client(&server).send::<Value>(parts).await.unwrap();
    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn test_unexpected_success_status_is_an_operation_error() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/things/t1"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    let parts = RequestParts::new("delete_thing", RestMethod::Delete, "/things/t1").expect([200, 204]);
    let err = client(&server).send::<()>(parts).await.unwrap_err();
    assert_eq!(err.status(), Some(202));
}

#[tokio::test]
async fn test_empty_body_decodes_to_unit() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let parts = RequestParts::new("delete_thing", RestMethod::Delete, "/things/t1").expect([200, 204]);
    let response = client(&server).send::<()>(parts).await.unwrap();
    assert_eq!(response.status, 204);
}

#[tokio::test]
async fn test_error_body_is_kept() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("opc-request-id", "req-9")
                .set_body_json(json!({"code": "NotAuthorizedOrNotFound", "message": "no such vcn"})),
        )
        .mount(&server)
        .await;

    let parts = RequestParts::new("get_vcn", RestMethod::Get, "/20160918/vcns/x");
    let err = client(&server).send::<Value>(parts).await.unwrap_err();

    let ApiError::Operation(op) = err else {
        panic!("expected operation error, got {err:?}");
    };
    assert_eq!(op.status, 404);
    assert_eq!(op.operation, "get_vcn");
    assert_eq!(op.header("opc-request-id"), Some("req-9"));
    assert_eq!(op.message().as_deref(), Some("no such vcn"));
    assert!(op.to_string().contains("returned HTTP 404"));
}

#[tokio::test]
async fn test_mismatched_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let parts = RequestParts::new("get_vcn", RestMethod::Get, "/x");
    let err = client(&server).send::<Value>(parts).await.unwrap_err();
    assert!(matches!(err, ApiError::Deserialize { ref operation, .. } if operation == "get_vcn"));
}

#[tokio::test]
#[traced_test]
async fn test_retry_on_503_then_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nodes"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let parts = RequestParts::new("list_nodes", RestMethod::Get, "/nodes");
    let response = client(&server).send::<Vec<Value>>(parts).await.unwrap();
    assert!(response.body.is_empty());
    assert!(logs_contain("retrying request"));
}

#[tokio::test]
async fn test_no_retry_on_400() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": "bad filter"})))
        .expect(1)
        .mount(&server)
        .await;

    let parts = RequestParts::new("list_nodes", RestMethod::Get, "/nodes");
    let err = client(&server).send::<Value>(parts).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert!(!err.is_retryable());
}

#[tokio::test]
#[traced_test]
async fn test_retries_exhausted_returns_last_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let parts = RequestParts::new("list_nodes", RestMethod::Get, "/nodes");
    let err = client(&server).send::<Value>(parts).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(logs_contain("retries exhausted"));
}

#[tokio::test]
async fn test_post_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let parts = RequestParts::new("create_vcn", RestMethod::Post, "/20160918/vcns");
    let err = client(&server).send::<Value>(parts).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_post_with_retry_token_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("opc-retry-token", "token-1"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "0"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(header("opc-retry-token", "token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "vcn"})))
        .expect(1)
        .mount(&server)
        .await;

    let parts = RequestParts::new("create_vcn", RestMethod::Post, "/20160918/vcns")
        .header("opc-retry-token", "token-1");
    let response = client(&server).send::<Value>(parts).await.unwrap();
    assert_eq!(response.body["id"], "vcn");
}

#[tokio::test]
async fn test_missing_credential_fails_before_sending() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = ApiClient::builder(Url::parse(&server.uri()).unwrap())
        .auth(AuthStrategy::ApiKey {
            header: "X-Api-Key".to_string(),
        })
        .env_credentials(["CLOUDSDK_TRANSPORT_TEST_UNSET_KEY"])
        .build()
        .unwrap();

    let parts = RequestParts::new("list_nodes", RestMethod::Get, "/nodes");
    let err = client.send::<Value>(parts).await.unwrap_err();
    assert!(matches!(err, ApiError::Auth(_)));
}

#[tokio::test]
async fn test_connection_refused_is_a_client_error() {
    let client = ApiClient::builder(Url::parse("http://127.0.0.1:9").unwrap())
        .retry(RetryPolicy::disabled())
        .build()
        .unwrap();

    let parts = RequestParts::new("list_nodes", RestMethod::Get, "/nodes");
    let err = client.send::<Value>(parts).await.unwrap_err();
    assert!(matches!(err, ApiError::Client(_)));
    assert!(err.is_retryable());
}
