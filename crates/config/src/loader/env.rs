//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a boolean setting the way the `SPLUNK_*` variables accept them.
pub(crate) fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "on" | "1" => Ok(true),
        "false" | "f" | "no" | "n" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Copy every `SPLUNK_*` variable that is set into the loader.
pub(super) fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("SPLUNK_BASE_URL") {
        loader.base_url = Some(url);
    }
    if let Some(app) = env_var_or_none("SPLUNK_APP") {
        loader.namespace = Some(app);
    }
    if let Some(owner) = env_var_or_none("SPLUNK_OWNER") {
        loader.owner = Some(owner);
    }
    if let Some(username) = env_var_or_none("SPLUNK_USERNAME") {
        loader.username = Some(username);
    }
    if let Some(password) = env_var_or_none("SPLUNK_PASSWORD") {
        loader.password = Some(SecretString::new(password.into()));
    }
    if let Some(key) = env_var_or_none("SPLUNK_SESSION_KEY") {
        loader.session_key = Some(SecretString::new(key.into()));
    }
    if let Some(skip) = env_var_or_none("SPLUNK_SKIP_VERIFY") {
        loader.skip_verify = Some(parse_bool("SPLUNK_SKIP_VERIFY", &skip)?);
    }

    Ok(())
}
