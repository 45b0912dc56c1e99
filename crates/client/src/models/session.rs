//! Login response model.

use secrecy::{ExposeSecret, SecretString};

use crate::models::RestMessage;

/// Session credential returned by `/services/auth/login`.
///
/// The key is held as a [`SecretString`] so it never shows up in `Debug`
/// output or logs.
#[derive(Debug, Clone)]
pub struct SessionKey {
    key: SecretString,
    /// Messages Splunk attached to the login response, if any.
    pub messages: Vec<RestMessage>,
}

impl SessionKey {
    pub fn new(key: impl Into<String>) -> Self {
        let key: String = key.into();
        Self {
            key: SecretString::new(key.into()),
            messages: Vec::new(),
        }
    }

    pub(crate) fn with_messages(mut self, messages: Vec<RestMessage>) -> Self {
        self.messages = messages;
        self
    }

    /// The raw key, for building the `Authorization: Splunk <key>` header.
    pub fn expose(&self) -> &str {
        self.key.expose_secret()
    }

    /// First message text, the way Splunk reports login problems.
    pub fn message(&self) -> Option<&str> {
        self.messages.first().map(|m| m.text.as_str())
    }
}

impl From<SecretString> for SessionKey {
    fn from(key: SecretString) -> Self {
        Self {
            key,
            messages: Vec::new(),
        }
    }
}
