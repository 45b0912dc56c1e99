//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::path::Path;

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use splunk_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Session key used by tests that authenticate with a key.
#[allow(dead_code)]
pub const TEST_SESSION_KEY: &str = "test-session-key";

/// Load a fixture file from the fixtures directory as text.
///
/// # Panics
/// If the fixture file cannot be read.
#[allow(dead_code)]
pub fn load_fixture(fixture_path: &str) -> String {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}

/// `Authorization` header value for [`TEST_SESSION_KEY`].
#[allow(dead_code)]
pub fn auth_header() -> String {
    format!("Splunk {}", TEST_SESSION_KEY)
}
