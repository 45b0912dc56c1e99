//! KV Store command implementation.

use anyhow::{Context, Result};
use clap::Subcommand;
use splunk_config::Config;
use tracing::info;

use super::client_from_config;

#[derive(Subcommand)]
pub enum KvstoreCommand {
    /// Print every document of a collection as JSON
    Get {
        /// Collection name
        collection: String,
    },
    /// Replace a document with the given JSON
    Update {
        /// Collection name
        collection: String,
        /// Document `_key`
        id: String,
        /// JSON document
        document: String,
    },
}

pub async fn run(config: Config, command: KvstoreCommand) -> Result<()> {
    let mut client = client_from_config(&config)?;

    match command {
        KvstoreCommand::Get { collection } => {
            let records: Vec<serde_json::Value> = client
                .kvstore_get_records(&collection)
                .await
                .with_context(|| format!("Failed to read collection '{}'", collection))?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        KvstoreCommand::Update {
            collection,
            id,
            document,
        } => {
            let payload: serde_json::Value =
                serde_json::from_str(&document).context("Document is not valid JSON")?;
            client
                .kvstore_update(&collection, &id, &payload)
                .await
                .with_context(|| format!("Failed to update '{}' in '{}'", id, collection))?;
            info!(collection = %collection, id = %id, "Document updated");
            println!("Updated {} in {}", id, collection);
        }
    }

    Ok(())
}
