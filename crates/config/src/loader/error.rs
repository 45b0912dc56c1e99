//! Configuration errors.
//!
//! `.env` failures carry a byte offset or an I/O kind, never the offending
//! line, since that line usually holds a password or session key.

use std::io::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A setting was present but unusable.
    #[error("{var} is invalid: {message}")]
    InvalidValue { var: String, message: String },

    /// `SPLUNK_BASE_URL` or `--base-url` was given but blank.
    #[error("Management URL is empty; set SPLUNK_BASE_URL or --base-url to e.g. https://localhost:8089")]
    MissingBaseUrl,

    /// Neither a session key nor a full username/password pair was supplied.
    #[error("No Splunk credentials: set SPLUNK_SESSION_KEY, or both SPLUNK_USERNAME and SPLUNK_PASSWORD")]
    MissingAuth,

    #[error(".env has a syntax error at byte {error_index} (DOTENV_DISABLED=1 skips the file)")]
    DotenvParse { error_index: usize },

    #[error(".env could not be read: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error(".env could not be loaded (DOTENV_DISABLED=1 skips the file)")]
    DotenvUnknown,
}
