//! Print entity collections.

use anyhow::{Context, Result};
use splunk_config::Config;

use super::client_from_config;

pub async fn run(config: Config, segments: &[String]) -> Result<()> {
    let mut client = client_from_config(&config)?;
    let feed = client
        .get_entities(segments)
        .await
        .with_context(|| format!("Failed to fetch {}", segments.join("/")))?;

    println!("{}", serde_json::to_string_pretty(&feed)?);
    Ok(())
}
