//! Generic entity collection endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::request::splunk_auth_header;
use crate::endpoints::{build_request_path, parsing, send_request};
use crate::error::Result;
use crate::models::RestResponse;

/// Fetch an entity collection, e.g. `["services", "properties"]` or
/// `["storage", "passwords"]` within an app namespace.
pub async fn get_entities<S: AsRef<str>>(
    client: &Client,
    base_url: &str,
    session_key: &str,
    segments: &[S],
    namespace: Option<&str>,
    owner: Option<&str>,
) -> Result<RestResponse> {
    let url = build_request_path(base_url, segments, namespace, owner)?;
    debug!(url = %url, "Fetching entities");

    let builder = client
        .get(url)
        .header("Authorization", splunk_auth_header(session_key));
    let response = send_request(builder).await?;

    let body = response.text().await?;
    let feed = parsing::parse_feed(&body)?;
    debug!(title = %feed.title, entries = feed.entries.len(), "Fetched entities");
    Ok(feed)
}
