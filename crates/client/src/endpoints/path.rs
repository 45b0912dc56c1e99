//! REST URL construction.
//!
//! Splunk serves app-scoped resources under
//! `/servicesNS/<owner>/<app>/...` and global ones directly under the
//! management root, e.g. `/services/properties`.
//!
//! # Invariants
//! - At least two path segments are required.
//! - Each segment is percent-encoded as a single path segment, so a `/`
//!   inside a collection or key name cannot escape into the path.
//! - An empty namespace or owner counts as unset. With a namespace but no
//!   owner, the owner is `nobody`. An owner without a namespace is ignored.

use reqwest::Url;
use splunk_config::constants::DEFAULT_BASE_URL;
use tracing::warn;

use crate::error::{ClientError, Result};

pub use splunk_config::constants::DEFAULT_OWNER;

/// Management URL of a Splunk instance on the local host.
pub const LOCAL_SPLUNK_MGMT_URL: &str = DEFAULT_BASE_URL;

/// Build the URL for a REST request.
///
/// The owner segment is never left out of a namespaced URL. With a
/// namespace but no owner the URL is `/servicesNS/nobody/<app>/...`, not
/// `/servicesNS/<app>/...`, since Splunk would read the app name as the
/// owner.
///
/// # Examples
///
/// ```
/// use splunk_client::endpoints::build_request_path;
///
/// let url = build_request_path(
///     "https://localhost:8089",
///     &["storage", "passwords"],
///     Some("TA-GoogleFitness"),
///     Some("nobody"),
/// )
/// .unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://localhost:8089/servicesNS/nobody/TA-GoogleFitness/storage/passwords"
/// );
/// ```
///
/// # Errors
///
/// Returns [`ClientError::MalformedRequest`] with fewer than two segments
/// and [`ClientError::InvalidUrl`] if `base_url` cannot be parsed or cannot
/// carry a path.
pub fn build_request_path<S: AsRef<str>>(
    base_url: &str,
    segments: &[S],
    namespace: Option<&str>,
    owner: Option<&str>,
) -> Result<Url> {
    if segments.len() < 2 {
        return Err(ClientError::MalformedRequest(format!(
            "not enough path segments: expected at least 2, got {}",
            segments.len()
        )));
    }

    let mut url = Url::parse(base_url)
        .map_err(|e| ClientError::InvalidUrl(format!("Invalid base URL '{}': {}", base_url, e)))?;

    let namespace = namespace.filter(|s| !s.is_empty());
    let owner = owner.filter(|s| !s.is_empty());

    if namespace.is_none() && owner.is_some() {
        warn!("Owner is ignored for requests without a namespace");
    }

    {
        let mut path = url.path_segments_mut().map_err(|_| {
            ClientError::InvalidUrl(format!("Base URL cannot carry a path: {}", base_url))
        })?;
        path.pop_if_empty();

        if let Some(namespace) = namespace {
            path.push("servicesNS");
            path.push(owner.unwrap_or(DEFAULT_OWNER));
            path.push(namespace);
        }

        path.extend(segments.iter().map(AsRef::as_ref));
    }

    Ok(url)
}
