//! Entity collection methods for [`SplunkClient`].

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::RestResponse;

impl SplunkClient {
    /// Fetch an entity collection in this client's namespace.
    pub async fn get_entities<S: AsRef<str>>(&mut self, segments: &[S]) -> Result<RestResponse> {
        let key = self.session_key().await?;
        endpoints::get_entities(
            &self.http,
            &self.base_url,
            &key,
            segments,
            self.namespace.as_deref(),
            self.owner.as_deref(),
        )
        .await
    }
}
