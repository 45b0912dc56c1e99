//! Integration tests for `splunk-modinput path`.

mod common;

use common::splunk_cmd;
use predicates::prelude::*;

#[test]
fn test_namespaced_path() {
    splunk_cmd()
        .args(["--app", "TA-GoogleFitness", "--owner", "nobody"])
        .args(["path", "storage", "passwords"])
        .assert()
        .success()
        .stdout(
            "https://localhost:8089/servicesNS/nobody/TA-GoogleFitness/storage/passwords\n",
        );
}

#[test]
fn test_global_path() {
    splunk_cmd()
        .args(["path", "services", "properties"])
        .assert()
        .success()
        .stdout("https://localhost:8089/services/properties\n");
}

#[test]
fn test_namespace_from_env_and_default_owner() {
    splunk_cmd()
        .env("SPLUNK_APP", "fitness_for_splunk")
        .env("SPLUNK_BASE_URL", "https://splunk.example.com:8089/")
        .args(["path", "storage", "collections", "data", "google_tokens"])
        .assert()
        .success()
        .stdout(
            "https://splunk.example.com:8089/servicesNS/nobody/fitness_for_splunk/storage/collections/data/google_tokens\n",
        );
}

#[test]
fn test_path_needs_no_credentials() {
    splunk_cmd()
        .env_remove("SPLUNK_SESSION_KEY")
        .args(["path", "services", "properties"])
        .assert()
        .success();
}

#[test]
fn test_single_segment_rejected() {
    splunk_cmd()
        .args(["path", "services"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("not enough path segments"));
}

#[test]
fn test_invalid_base_url_rejected() {
    splunk_cmd()
        .args(["--base-url", "ftp://localhost:8089", "path", "services", "properties"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to build configuration"));
}
