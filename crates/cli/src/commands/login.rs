//! Log in and print a session key.

use anyhow::{Context, Result};
use secrecy::SecretString;
use splunk_client::{AuthStrategy, SplunkClient};
use splunk_config::ConnectionConfig;
use tracing::info;

/// Exchange username and password for a session key.
///
/// Always uses credentials, even when a session key is configured.
pub async fn run(
    connection: ConnectionConfig,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let (Some(username), Some(password)) = (username, password) else {
        anyhow::bail!("login requires --username and --password (or SPLUNK_USERNAME/SPLUNK_PASSWORD)");
    };

    let mut client = SplunkClient::builder()
        .base_url(connection.base_url)
        .skip_verify(connection.skip_verify)
        .auth_strategy(AuthStrategy::Credentials {
            username,
            password: SecretString::new(password.into()),
        })
        .build()?;

    let key = client.login().await.context("Failed to log in")?;
    if let Some(message) = key.message() {
        info!("Splunk says: {}", message);
    }

    println!("{}", key.expose());
    Ok(())
}
