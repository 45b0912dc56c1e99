//! Shared test utilities for splunk-modinput integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `SPLUNK_SESSION_KEY` is set to "test-key" unless overridden.

use assert_cmd::Command;
use std::path::PathBuf;

/// Returns a hermetic `splunk-modinput` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `SPLUNK_SESSION_KEY` is set to a dummy value to satisfy config validation.
/// - Other connection env vars are cleared to ensure no leakage from the host.
pub fn splunk_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("splunk-modinput");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("SPLUNK_SESSION_KEY", "test-key");

    cmd.env_remove("SPLUNK_BASE_URL")
        .env_remove("SPLUNK_APP")
        .env_remove("SPLUNK_OWNER")
        .env_remove("SPLUNK_USERNAME")
        .env_remove("SPLUNK_PASSWORD")
        .env_remove("SPLUNK_SKIP_VERIFY")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic command pointed at `base_url`.
#[allow(dead_code)]
pub fn splunk_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = splunk_cmd();
    cmd.env("SPLUNK_BASE_URL", base_url);
    cmd
}

/// Path of a fixture shared with the modinput crate.
#[allow(dead_code)]
pub fn modinput_fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../modinput/fixtures")
        .join(name)
}
