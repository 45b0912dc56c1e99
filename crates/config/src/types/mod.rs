//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define configuration types for authentication and connections.
//! - Provide serialization helpers for sensitive types (secrets).
//!
//! Does NOT handle:
//! - Configuration loading from environment variables (see `loader` module).
//! - Actual network connections or authentication flows (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod auth;
mod connection;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig};
