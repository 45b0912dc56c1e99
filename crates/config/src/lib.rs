//! Configuration management for Splunk modular inputs.
//!
//! This crate provides types and loaders for the connection settings a
//! modular input or its command-line harness uses to reach the Splunk
//! management API, read from `.env` files, environment variables and
//! explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};
