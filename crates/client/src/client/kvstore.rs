//! KV Store methods for [`SplunkClient`].
//!
//! # What this module does NOT handle:
//! - Collection management (create, configure, delete)
//! - Low-level HTTP calls (in [`crate::endpoints`])

use reqwest::Response;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;

impl SplunkClient {
    /// Fetch a collection's documents with the JSON body unread.
    pub async fn kvstore_get_collection(&mut self, collection: &str) -> Result<Response> {
        let key = self.session_key().await?;
        endpoints::kvstore_get_collection(
            &self.http,
            &self.base_url,
            &key,
            collection,
            self.namespace.as_deref(),
            self.owner.as_deref(),
        )
        .await
    }

    /// Fetch a collection's documents decoded as `T`.
    pub async fn kvstore_get_records<T: DeserializeOwned>(
        &mut self,
        collection: &str,
    ) -> Result<Vec<T>> {
        let key = self.session_key().await?;
        endpoints::kvstore_get_records(
            &self.http,
            &self.base_url,
            &key,
            collection,
            self.namespace.as_deref(),
            self.owner.as_deref(),
        )
        .await
    }

    /// Replace document `id` of a collection with `payload`.
    pub async fn kvstore_update<T: Serialize + ?Sized>(
        &mut self,
        collection: &str,
        id: &str,
        payload: &T,
    ) -> Result<()> {
        let key = self.session_key().await?;
        endpoints::kvstore_update(
            &self.http,
            &self.base_url,
            &key,
            collection,
            id,
            payload,
            self.namespace.as_deref(),
            self.owner.as_deref(),
        )
        .await
    }
}
