//! Authentication strategies and session key storage.

use secrecy::{ExposeSecret, SecretString};

use crate::models::SessionKey;

/// Strategy for authenticating with Splunk.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// A session key obtained elsewhere, typically the `<session_key>` Splunk
    /// hands a modular input on startup.
    SessionKey { key: SecretString },
    /// Username and password. The client logs in on first use.
    Credentials {
        username: String,
        password: SecretString,
    },
}

/// Holds the session key for a client.
///
/// There is no expiry tracking or refresh: a key obtained by login is kept
/// for the lifetime of the manager.
#[derive(Debug)]
pub struct SessionManager {
    auth_strategy: AuthStrategy,
    session_key: Option<SessionKey>,
}

impl SessionManager {
    /// Create a new session manager with the given auth strategy.
    pub fn new(strategy: AuthStrategy) -> Self {
        let session_key = match &strategy {
            AuthStrategy::SessionKey { key } => Some(SessionKey::from(key.clone())),
            AuthStrategy::Credentials { .. } => None,
        };
        Self {
            auth_strategy: strategy,
            session_key,
        }
    }

    /// Get the current auth strategy.
    pub fn strategy(&self) -> &AuthStrategy {
        &self.auth_strategy
    }

    /// Session key for the `Authorization` header, if one is known.
    pub fn session_key(&self) -> Option<&str> {
        self.session_key.as_ref().map(|k| k.expose())
    }

    /// Store the key returned by a login.
    pub fn set_session_key(&mut self, key: SessionKey) {
        self.session_key = Some(key);
    }

    /// Whether a login is needed before the next request.
    pub fn needs_login(&self) -> bool {
        self.session_key.is_none()
    }

    /// Credentials for login, if this strategy has them.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match &self.auth_strategy {
            AuthStrategy::Credentials { username, password } => {
                Some((username.as_str(), password.expose_secret()))
            }
            AuthStrategy::SessionKey { .. } => None,
        }
    }
}
