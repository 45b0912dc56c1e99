//! Fluent construction of [`SplunkClient`].
//!
//! # Invariants
//! - Only the auth strategy is mandatory.
//! - The base URL defaults to the local management port and loses any
//!   trailing slashes.
//! - Certificate checks are off by default (Splunk's stock certificate is
//!   self-signed) and only matter for `https://` URLs.
//! - Empty namespace or owner strings count as unset.

use reqwest::redirect::Policy;
use splunk_config::constants::DEFAULT_MAX_REDIRECTS;
use splunk_config::{AuthStrategy as ConfigAuthStrategy, Config};

use crate::auth::{AuthStrategy, SessionManager};
use crate::client::SplunkClient;
use crate::endpoints::LOCAL_SPLUNK_MGMT_URL;
use crate::error::{ClientError, Result};

/// Builder returned by [`SplunkClient::builder`].
///
/// ```rust,ignore
/// let mut client = SplunkClient::builder()
///     .base_url(config.server_uri.clone())
///     .namespace("TA-GoogleFitness")
///     .auth_strategy(AuthStrategy::SessionKey {
///         key: SecretString::new(config.session_key.clone().into()),
///     })
///     .build()?;
/// ```
pub struct SplunkClientBuilder {
    base_url: String,
    namespace: Option<String>,
    owner: Option<String>,
    auth_strategy: Option<AuthStrategy>,
    skip_verify: bool,
}

impl Default for SplunkClientBuilder {
    fn default() -> Self {
        Self {
            base_url: LOCAL_SPLUNK_MGMT_URL.to_string(),
            namespace: None,
            owner: None,
            auth_strategy: None,
            skip_verify: true,
        }
    }
}

impl SplunkClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Management URL including scheme and port, e.g. the `server_uri` of a
    /// modular input's configuration.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// App whose `servicesNS` tree requests go to.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Owner for namespaced requests; `nobody` when unset.
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Accept any server certificate. Leave on only for instances still
    /// using Splunk's self-signed certificate.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Take every setting from a loaded [`Config`].
    pub fn from_config(mut self, config: &Config) -> Self {
        self.auth_strategy = Some(match &config.auth.strategy {
            ConfigAuthStrategy::SessionKey { key } => AuthStrategy::SessionKey { key: key.clone() },
            ConfigAuthStrategy::Credentials { username, password } => AuthStrategy::Credentials {
                username: username.clone(),
                password: password.clone(),
            },
        });
        self.base_url = config.connection.base_url.clone();
        self.namespace = config.connection.namespace.clone();
        self.owner = config.connection.owner.clone();
        self.skip_verify = config.connection.skip_verify;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    fn http_client(base_url: &str, skip_verify: bool) -> Result<reqwest::Client> {
        let mut http = reqwest::Client::builder().redirect(Policy::limited(DEFAULT_MAX_REDIRECTS));

        if skip_verify && base_url.starts_with("https://") {
            http = http.danger_accept_invalid_certs(true);
        } else if skip_verify {
            tracing::debug!(base_url, "skip_verify ignored for a plain HTTP URL");
        }

        Ok(http.build()?)
    }

    /// # Errors
    ///
    /// [`ClientError::AuthFailed`] without an auth strategy,
    /// [`ClientError::HttpError`] if the HTTP client cannot be created.
    pub fn build(self) -> Result<SplunkClient> {
        let auth_strategy = self
            .auth_strategy
            .ok_or_else(|| ClientError::AuthFailed("no auth strategy configured".to_string()))?;

        let base_url = Self::normalize_base_url(self.base_url);
        let http = Self::http_client(&base_url, self.skip_verify)?;

        Ok(SplunkClient {
            http,
            base_url,
            namespace: self.namespace.filter(|s| !s.is_empty()),
            owner: self.owner.filter(|s| !s.is_empty()),
            session_manager: SessionManager::new(auth_strategy),
        })
    }
}
