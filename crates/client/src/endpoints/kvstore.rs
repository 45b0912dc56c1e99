//! KV Store collection data endpoints.
//!
//! Documents live under `storage/collections/data/<collection>` in an app
//! namespace. Reads come back as a JSON array; writes post a single JSON
//! document to `storage/collections/data/<collection>/<id>`.

use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::endpoints::request::splunk_auth_header;
use crate::endpoints::{build_request_path, send_request};
use crate::error::{ClientError, Result};

/// Fetch every document of a collection.
///
/// The response is returned with its body unread so the caller can decode
/// the JSON array however it likes. See [`kvstore_get_records`] for a typed
/// variant.
pub async fn kvstore_get_collection(
    client: &Client,
    base_url: &str,
    session_key: &str,
    collection: &str,
    namespace: Option<&str>,
    owner: Option<&str>,
) -> Result<Response> {
    let url = build_request_path(
        base_url,
        &["storage", "collections", "data", collection],
        namespace,
        owner,
    )?;
    debug!(url = %url, "Fetching KV Store collection");

    let builder = client
        .get(url)
        .header("Authorization", splunk_auth_header(session_key));
    send_request(builder).await
}

/// Fetch every document of a collection and decode it as `T`.
pub async fn kvstore_get_records<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    session_key: &str,
    collection: &str,
    namespace: Option<&str>,
    owner: Option<&str>,
) -> Result<Vec<T>> {
    let response =
        kvstore_get_collection(client, base_url, session_key, collection, namespace, owner)
            .await?;
    let body = response.bytes().await?;

    serde_json::from_slice(&body).map_err(|e| {
        ClientError::InvalidResponse(format!(
            "Failed to decode KV Store collection '{}': {}",
            collection, e
        ))
    })
}

/// Replace the document `id` of a collection with `payload`.
#[allow(clippy::too_many_arguments)]
pub async fn kvstore_update<T: Serialize + ?Sized>(
    client: &Client,
    base_url: &str,
    session_key: &str,
    collection: &str,
    id: &str,
    payload: &T,
    namespace: Option<&str>,
    owner: Option<&str>,
) -> Result<()> {
    let url = build_request_path(
        base_url,
        &["storage", "collections", "data", collection, id],
        namespace,
        owner,
    )?;
    let body = serde_json::to_vec(payload)?;
    debug!(url = %url, bytes = body.len(), "Updating KV Store document");

    let builder = client
        .post(url)
        .header("Authorization", splunk_auth_header(session_key))
        .header("Content-Type", "application/json")
        .body(body);
    send_request(builder).await?;

    Ok(())
}
