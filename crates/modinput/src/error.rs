//! Error types for the modular input protocol.

use thiserror::Error;

/// Result type alias for modular input operations.
pub type Result<T> = std::result::Result<T, ModInputError>;

/// Errors that can occur while talking to Splunk over stdin/stdout.
#[derive(Error, Debug)]
pub enum ModInputError {
    /// The XML document Splunk sent could not be decoded.
    #[error("Failed to decode XML: {0}")]
    Decode(#[from] quick_xml::DeError),

    /// A document could not be encoded as XML.
    #[error("Failed to encode XML: {0}")]
    Encode(#[from] quick_xml::SeError),

    /// Reading from stdin or writing to stdout failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input rejected the configuration during `--validate-arguments`.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Splunk invoked the process with an argument this crate does not know.
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    /// The input's event streaming failed.
    #[error("Event streaming failed: {0}")]
    Stream(#[source] anyhow::Error),
}
