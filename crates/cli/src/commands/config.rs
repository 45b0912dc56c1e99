//! Decode modular input documents.
//!
//! The session key is never printed.

use anyhow::{Context, Result};
use splunk_modinput::{ModInputConfig, ValidationDefinition};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Decode the startup (or validation) document and print it as JSON.
pub fn run(file: Option<PathBuf>, validation: bool) -> Result<()> {
    let reader: Box<dyn Read> = match file {
        Some(ref path) => Box::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        ),
        None => Box::new(io::stdin().lock()),
    };

    let json = if validation {
        let definition = ValidationDefinition::from_reader(reader)
            .context("Failed to decode validation definition")?;
        serde_json::to_string_pretty(&definition)?
    } else {
        let config =
            ModInputConfig::from_reader(reader).context("Failed to decode input configuration")?;
        tracing::debug!(stanzas = config.stanzas.len(), "Decoded input configuration");
        serde_json::to_string_pretty(&config)?
    };

    println!("{}", json);
    Ok(())
}
