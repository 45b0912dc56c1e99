//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, app namespace, owner).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide convenience constructors for common config patterns.
//!
//! Invariants:
//! - `ConnectionConfig::default()` targets the local management port with
//!   TLS verification skipped and no namespace.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_SKIP_VERIFY};
use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Connection configuration for the Splunk management API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the management port (e.g., https://localhost:8089)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// App namespace for `servicesNS` requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Owner for `servicesNS` requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_verify: DEFAULT_SKIP_VERIFY,
            namespace: None,
            owner: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a new config with the specified base URL and session key.
    pub fn with_session_key(base_url: String, key: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig {
                strategy: AuthStrategy::SessionKey { key },
            },
        }
    }

    /// Create a new config with the specified base URL and username/password.
    pub fn with_credentials(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig {
                strategy: AuthStrategy::Credentials { username, password },
            },
        }
    }
}
