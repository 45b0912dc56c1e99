//! Command implementations.

pub mod config;
pub mod entities;
pub mod kvstore;
pub mod login;
pub mod path;

use anyhow::Result;
use splunk_client::SplunkClient;
use splunk_config::Config;

/// Build a client from the loaded configuration.
pub(crate) fn client_from_config(config: &Config) -> Result<SplunkClient> {
    Ok(SplunkClient::builder().from_config(config).build()?)
}
