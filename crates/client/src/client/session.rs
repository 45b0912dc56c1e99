//! Client-level session management helpers.
//!
//! # Invariants
//! - [`SplunkClient::session_key()`] requires `&mut self` because it may
//!   trigger a login call
//! - A session key strategy never triggers login
//! - A key obtained by login is reused for the client's lifetime

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::SessionKey;

impl SplunkClient {
    /// Get the session key, logging in first if the client has credentials
    /// and no key yet.
    pub async fn session_key(&mut self) -> Result<String> {
        if self.session_manager.needs_login() {
            self.login().await?;
        }

        self.session_manager
            .session_key()
            .map(str::to_string)
            .ok_or_else(|| ClientError::AuthFailed("No session key available".to_string()))
    }

    /// Login with username/password to get a session key.
    ///
    /// The key is stored for subsequent calls and also returned.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if the client was built with a
    /// session key instead of credentials, or if Splunk returns no key.
    /// Returns [`ClientError::ApiError`] if the login request is rejected.
    pub async fn login(&mut self) -> Result<SessionKey> {
        let (username, password) = self.session_manager.credentials().ok_or_else(|| {
            ClientError::AuthFailed("Cannot login with session key auth strategy".to_string())
        })?;

        let key = endpoints::login(&self.http, &self.base_url, username, password).await?;
        self.session_manager.set_session_key(key.clone());
        Ok(key)
    }
}
