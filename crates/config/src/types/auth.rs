//! How a client proves itself to Splunk.
//!
//! Secrets live in [`SecretString`] so `Debug` output and logs stay clean.
//! Serializing a config writes them in the clear.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

mod plain_secret {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(secret: &SecretString, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(secret.expose_secret())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<SecretString, D::Error> {
        String::deserialize(d).map(|v| SecretString::new(v.into()))
    }
}

/// Either a session key Splunk already issued or a username/password pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthStrategy {
    /// Typically the `<session_key>` a modular input receives on stdin.
    SessionKey {
        #[serde(with = "plain_secret")]
        key: SecretString,
    },
    /// Exchanged for a session key at `/services/auth/login` on first use.
    Credentials {
        username: String,
        #[serde(with = "plain_secret")]
        password: SecretString,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(flatten)]
    pub strategy: AuthStrategy,
}
