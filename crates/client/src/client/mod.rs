//! Main Splunk REST API client.
//!
//! [`SplunkClient`] stores what the free functions in [`crate::endpoints`]
//! need on every call: the HTTP client, base URL, app namespace, owner and
//! credentials.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Session key retrieval and login (private module)
//! - `entities`: Generic entity collection methods
//! - `kvstore`: KV Store document methods
//!
//! # Invariants
//! - One request in flight per call; methods that may log in take `&mut self`.
//! - A failed call is returned as-is. There is no retry and no re-login.

pub mod builder;
mod entities;
mod kvstore;
mod session;

use reqwest::Url;

use crate::auth::SessionManager;
use crate::endpoints;
use crate::error::Result;

/// Splunk REST API client.
///
/// # Creating a Client
///
/// Use [`SplunkClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use splunk_client::{SplunkClient, AuthStrategy};
/// use secrecy::SecretString;
///
/// let mut client = SplunkClient::builder()
///     .base_url("https://localhost:8089".to_string())
///     .namespace("TA-GoogleFitness")
///     .owner("nobody")
///     .auth_strategy(AuthStrategy::SessionKey {
///         key: SecretString::new(config.session_key.clone().into()),
///     })
///     .build()?;
///
/// let passwords = client.get_entities(&["storage", "passwords"]).await?;
/// ```
#[derive(Debug)]
pub struct SplunkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) namespace: Option<String>,
    pub(crate) owner: Option<String>,
    pub(crate) session_manager: SessionManager,
}

impl SplunkClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SplunkClientBuilder {
        builder::SplunkClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// App namespace used for requests, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Owner used for namespaced requests, if any.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Switch the app namespace and owner for later requests.
    pub fn set_namespace(&mut self, namespace: Option<String>, owner: Option<String>) {
        self.namespace = namespace;
        self.owner = owner;
    }

    /// Build the URL for `segments` in this client's namespace.
    pub fn build_request_path<S: AsRef<str>>(&self, segments: &[S]) -> Result<Url> {
        endpoints::build_request_path(
            &self.base_url,
            segments,
            self.namespace.as_deref(),
            self.owner.as_deref(),
        )
    }
}
