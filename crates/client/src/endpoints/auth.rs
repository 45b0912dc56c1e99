//! Authentication endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{build_request_path, parsing, send_request};
use crate::error::Result;
use crate::models::SessionKey;

/// Login to Splunk with username and password.
///
/// Posts the credentials form-encoded to `/services/auth/login` and decodes
/// the `<sessionKey>` from the XML response.
pub async fn login(
    client: &Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<SessionKey> {
    debug!("Logging in to Splunk as {}", username);

    let url = build_request_path(base_url, &["services", "auth", "login"], None, None)?;
    let builder = client
        .post(url)
        .form(&[("username", username), ("password", password)]);
    let response = send_request(builder).await?;

    let body = response.text().await?;
    parsing::parse_login(&body)
}
