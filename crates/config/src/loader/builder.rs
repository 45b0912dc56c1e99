//! Layered configuration builder.
//!
//! Invariants / Assumptions:
//! - Later layers win: `with_*` calls made after `from_env()` override the environment.
//! - A session key takes precedence over username/password.
//! - An unset base URL means the local management port.

use secrecy::SecretString;

use super::error::ConfigError;
use super::{dotenv, env};
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_SKIP_VERIFY};
use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};

/// Collects settings from `.env`, the environment and explicit overrides.
///
/// ```rust,ignore
/// let config = ConfigLoader::new()
///     .load_dotenv()?
///     .from_env()?
///     .with_namespace("TA-GoogleFitness".to_string())
///     .build()?;
/// ```
#[derive(Default)]
pub struct ConfigLoader {
    pub(super) base_url: Option<String>,
    pub(super) namespace: Option<String>,
    pub(super) owner: Option<String>,
    pub(super) username: Option<String>,
    pub(super) password: Option<SecretString>,
    pub(super) session_key: Option<SecretString>,
    pub(super) skip_verify: Option<bool>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the process environment from `.env`, unless `DOTENV_DISABLED` is set.
    ///
    /// # Errors
    ///
    /// [`ConfigError::DotenvParse`] or [`ConfigError::DotenvIo`] when a `.env`
    /// exists but cannot be used. A missing file is not an error.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        dotenv::load()?;
        Ok(self)
    }

    /// Read the `SPLUNK_*` variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        env::apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// App the `servicesNS` requests are scoped to.
    pub fn with_namespace(mut self, namespace: String) -> Self {
        self.namespace = Some(namespace);
        self
    }

    pub fn with_owner(mut self, owner: String) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Use a key Splunk already issued, e.g. a modular input's `<session_key>`.
    pub fn with_session_key(mut self, key: String) -> Self {
        self.session_key = Some(SecretString::new(key.into()));
        self
    }

    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Resolve where to connect without requiring any credentials.
    pub fn build_connection(&self) -> Result<ConnectionConfig, ConfigError> {
        let base_url = match self.base_url.as_deref() {
            Some(raw) => normalize_base_url(raw)?,
            None => DEFAULT_BASE_URL.to_string(),
        };

        let namespace = non_blank(&self.namespace);
        let owner = non_blank(&self.owner);
        if namespace.is_none() && owner.is_some() {
            tracing::warn!("Owner is set without an app namespace and will be ignored");
        }

        Ok(ConnectionConfig {
            base_url,
            skip_verify: self.skip_verify.unwrap_or(DEFAULT_SKIP_VERIFY),
            namespace,
            owner,
        })
    }

    /// Resolve connection and authentication.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingAuth`] without a session key or a complete
    /// username/password pair, plus anything [`Self::build_connection`] rejects.
    pub fn build(self) -> Result<Config, ConfigError> {
        let connection = self.build_connection()?;

        let strategy = match (self.session_key, self.username, self.password) {
            (Some(key), _, _) => AuthStrategy::SessionKey { key },
            (None, Some(username), Some(password)) => {
                AuthStrategy::Credentials { username, password }
            }
            _ => return Err(ConfigError::MissingAuth),
        };

        Ok(Config {
            connection,
            auth: AuthConfig { strategy },
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Check that `raw` is an absolute http(s) URL with a host and strip any
/// trailing slash.
fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let invalid = |message: String| ConfigError::InvalidValue {
        var: "base_url".into(),
        message,
    };

    let parsed = url::Url::parse(raw)
        .map_err(|e| invalid(format!("{e} (expected e.g. https://localhost:8089)")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("scheme must be http or https, got: {other}"))),
    }
    if parsed.host_str().is_none() {
        return Err(invalid("a host is required".to_string()));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
