//! KV Store collection data tests.
//!
//! # Invariants
//! - Collections are read from `storage/collections/data/<collection>`
//! - Updates post a JSON document to `storage/collections/data/<collection>/<id>`

mod common;

use common::*;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use splunk_client::{AuthStrategy, ClientError, SplunkClient};
use wiremock::matchers::{body_json, header, method, path};

#[derive(Debug, Deserialize, Serialize, PartialEq)]
struct GoogleToken {
    #[serde(rename = "_key", skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    username: String,
    access_token: String,
    expires_in: u64,
}

const COLLECTION_PATH: &str =
    "/servicesNS/nobody/fitness_for_splunk/storage/collections/data/google_tokens";

fn client_for(server: &MockServer) -> SplunkClient {
    SplunkClient::builder()
        .base_url(server.uri())
        .namespace("fitness_for_splunk")
        .auth_strategy(AuthStrategy::SessionKey {
            key: SecretString::new(TEST_SESSION_KEY.to_string().into()),
        })
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_collection_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .and(header("Authorization", auth_header().as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string(load_fixture("kvstore/google_tokens.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = client_for(&mock_server);
    let tokens: Vec<GoogleToken> = client.kvstore_get_records("google_tokens").await.unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].username, "alice");
    assert_eq!(tokens[1].key.as_deref(), Some("5910a0b3c6b3a4001e6f3a12"));
}

#[tokio::test]
async fn test_get_collection_raw_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("kvstore/google_tokens.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let response = endpoints::kvstore_get_collection(
        &client,
        &mock_server.uri(),
        TEST_SESSION_KEY,
        "google_tokens",
        Some("fitness_for_splunk"),
        Some("nobody"),
    )
    .await
    .unwrap();

    let value: serde_json::Value = response.json().await.unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_get_collection_bad_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let mut client = client_for(&mock_server);
    let err = client
        .kvstore_get_records::<GoogleToken>("google_tokens")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_get_collection_missing_keeps_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"messages":[{"type":"ERROR","text":"Collection: google_tokens does not exist"}]}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::kvstore_get_collection(
        &client,
        &mock_server.uri(),
        TEST_SESSION_KEY,
        "google_tokens",
        Some("fitness_for_splunk"),
        Some("nobody"),
    )
    .await
    .unwrap_err();

    match err {
        ClientError::ApiError { status, url, message } => {
            assert_eq!(status, 404);
            assert!(url.ends_with(COLLECTION_PATH));
            assert_eq!(
                message,
                "404 Not Found: Collection: google_tokens does not exist"
            );
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_records_unauthorized_keeps_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = client_for(&mock_server);
    let err = client
        .kvstore_get_records::<GoogleToken>("google_tokens")
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
    match err {
        ClientError::ApiError { status, message, .. } => {
            assert_eq!(status, 401);
            assert_eq!(message, "401 Unauthorized");
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_record() {
    let mock_server = MockServer::start().await;

    let token = GoogleToken {
        key: None,
        username: "alice".to_string(),
        access_token: "ya29.refreshed".to_string(),
        expires_in: 3600,
    };

    Mock::given(method("POST"))
        .and(path(format!("{}/5910a0b3c6b3a4001e6f3a11", COLLECTION_PATH)))
        .and(header("Authorization", auth_header().as_str()))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&token))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"_key":"5910a0b3c6b3a4001e6f3a11"}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = client_for(&mock_server);
    client
        .kvstore_update("google_tokens", "5910a0b3c6b3a4001e6f3a11", &token)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_record_error_keeps_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{}/missing", COLLECTION_PATH)))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"messages":[{"type":"ERROR","text":"Could not find object id=missing"}]}"#,
        ))
        .mount(&mock_server)
        .await;

    let mut client = client_for(&mock_server);
    let err = client
        .kvstore_update("google_tokens", "missing", &serde_json::json!({"a": 1}))
        .await
        .unwrap_err();

    match err {
        ClientError::ApiError { status, message, .. } => {
            assert_eq!(status, 404);
            assert_eq!(message, "404 Not Found: Could not find object id=missing");
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}
