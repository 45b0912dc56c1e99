//! Tests for dotenv loading behavior.
//!
//! Invariants / Assumptions:
//! - Tests use `env_lock()` to prevent cross-test contamination.
//! - Tests must serialize mutations to process-global state (cwd/env).
//! - Error messages must never contain secret values from `.env` files.

use std::fs;
use std::path::PathBuf;
use serial_test::serial;
use tempfile::TempDir;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

#[test]
#[serial]
fn test_missing_dotenv_is_ok() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_var("DOTENV_DISABLED", None::<&str>, || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}

#[test]
#[serial]
fn test_invalid_dotenv_does_not_leak_contents() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".env"),
        "SPLUNK_PASSWORD=hunter2-secret\nthis line is not valid $$$ 'unterminated\n",
    )
    .unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_vars(
        [("DOTENV_DISABLED", None::<&str>), ("SPLUNK_PASSWORD", None)],
        || {
            let err = match ConfigLoader::new().load_dotenv() {
                Err(e) => e,
                Ok(_) => panic!("Expected a dotenv parse error"),
            };
            assert!(matches!(err, ConfigError::DotenvParse { .. }));
            assert!(!err.to_string().contains("hunter2-secret"));
            assert!(err.to_string().contains("DOTENV_DISABLED"));
        },
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "SPLUNK_APP=from-dotenv\n").unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_vars(
        [("DOTENV_DISABLED", Some("1")), ("SPLUNK_APP", None)],
        || {
            ConfigLoader::new().load_dotenv().unwrap();
            assert!(std::env::var("SPLUNK_APP").is_err());
        },
    );
}

#[test]
#[serial]
fn test_dotenv_values_reach_loader() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "SPLUNK_APP=from-dotenv\n").unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_vars(
        [("DOTENV_DISABLED", None::<&str>), ("SPLUNK_APP", None)],
        || {
            let connection = ConfigLoader::new()
                .load_dotenv()
                .unwrap()
                .from_env()
                .unwrap()
                .build_connection()
                .unwrap();
            assert_eq!(connection.namespace.as_deref(), Some("from-dotenv"));
        },
    );
}
