//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;

mod dotenv_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, unset.
pub fn cleared_env() -> [(&'static str, Option<&'static str>); 7] {
    [
        ("SPLUNK_BASE_URL", None),
        ("SPLUNK_APP", None),
        ("SPLUNK_OWNER", None),
        ("SPLUNK_USERNAME", None),
        ("SPLUNK_PASSWORD", None),
        ("SPLUNK_SESSION_KEY", None),
        ("SPLUNK_SKIP_VERIFY", None),
    ]
}
