//! Integration tests for the REST commands against a mock Splunk.

mod common;

use common::splunk_cmd_with_base_url;
use predicates::prelude::*;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROPERTIES_FEED: &str = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:s="http://dev.splunk.com/ns/rest">
  <title>properties</title>
  <id>https://localhost:8089/services/properties</id>
  <updated>2017-05-01T10:00:00-04:00</updated>
  <entry>
    <title>alert_actions</title>
    <content type="text/xml"><s:dict><s:key name="disabled">0</s:key></s:dict></content>
  </entry>
</feed>"#;

#[tokio::test]
async fn test_entities_prints_feed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/properties"))
        .and(header("Authorization", "Splunk test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PROPERTIES_FEED))
        .expect(1)
        .mount(&server)
        .await;

    let output = splunk_cmd_with_base_url(&server.uri())
        .args(["entities", "services", "properties"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["title"], "properties");
    assert_eq!(json["entries"][0]["title"], "alert_actions");
    assert_eq!(json["entries"][0]["content"][0]["name"], "disabled");
}

#[tokio::test]
async fn test_entities_requires_auth() {
    let server = MockServer::start().await;

    splunk_cmd_with_base_url(&server.uri())
        .env_remove("SPLUNK_SESSION_KEY")
        .args(["entities", "services", "properties"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No Splunk credentials"));
}

#[tokio::test]
async fn test_entities_not_found_exit_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/servicesNS/nobody/search/storage/passwords"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    splunk_cmd_with_base_url(&server.uri())
        .args(["--app", "search", "entities", "storage", "passwords"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("404 Not Found"));
}

#[tokio::test]
async fn test_unauthorized_exit_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/properties"))
        .respond_with(ResponseTemplate::new(401).set_body_string(
            r#"<response><messages><msg type="WARN">call not properly authenticated</msg></messages></response>"#,
        ))
        .mount(&server)
        .await;

    splunk_cmd_with_base_url(&server.uri())
        .args(["entities", "services", "properties"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("call not properly authenticated"));
}

#[tokio::test]
async fn test_login_prints_session_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/auth/login"))
        .and(body_string_contains("username=admin"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<response><sessionKey>fresh-session-key</sessionKey></response>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    splunk_cmd_with_base_url(&server.uri())
        .args(["--username", "admin", "--password", "changeme", "login"])
        .assert()
        .success()
        .stdout("fresh-session-key\n");
}

#[test]
fn test_login_requires_credentials() {
    splunk_cmd_with_base_url("http://127.0.0.1:1")
        .arg("login")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("login requires --username and --password"));
}

#[tokio::test]
async fn test_kvstore_get() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/servicesNS/nobody/fitness_for_splunk/storage/collections/data/google_tokens",
        ))
        .and(header("Authorization", "Splunk test-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"_key": "k1", "username": "alice"}])),
        )
        .mount(&server)
        .await;

    splunk_cmd_with_base_url(&server.uri())
        .args(["--app", "fitness_for_splunk", "kvstore", "get", "google_tokens"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""username": "alice""#));
}

#[tokio::test]
async fn test_kvstore_get_missing_collection_exit_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/servicesNS/nobody/fitness_for_splunk/storage/collections/data/google_tokens",
        ))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    splunk_cmd_with_base_url(&server.uri())
        .args(["--app", "fitness_for_splunk", "kvstore", "get", "google_tokens"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("404 Not Found"));
}

#[tokio::test]
async fn test_kvstore_update() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/servicesNS/nobody/fitness_for_splunk/storage/collections/data/google_tokens/k1",
        ))
        .and(header("Authorization", "Splunk test-key"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({"username": "alice", "expires_in": 3600})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"_key": "k1"})))
        .expect(1)
        .mount(&server)
        .await;

    splunk_cmd_with_base_url(&server.uri())
        .args(["--app", "fitness_for_splunk", "kvstore", "update", "google_tokens", "k1"])
        .arg(r#"{"username":"alice","expires_in":3600}"#)
        .assert()
        .success()
        .stdout("Updated k1 in google_tokens\n");
}

#[test]
fn test_kvstore_update_rejects_bad_json() {
    splunk_cmd_with_base_url("http://127.0.0.1:1")
        .args(["kvstore", "update", "google_tokens", "k1", "{not json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Document is not valid JSON"));
}
