//! REST API endpoint implementations.
//!
//! Free functions taking a `reqwest::Client`, the management base URL and,
//! for authenticated calls, the session key. [`crate::SplunkClient`] wraps
//! them with stored configuration.

mod auth;
mod entities;
mod kvstore;
pub mod parsing;
mod path;
mod request;

pub use auth::login;
pub use entities::get_entities;
pub use kvstore::{kvstore_get_collection, kvstore_get_records, kvstore_update};
pub use path::{DEFAULT_OWNER, LOCAL_SPLUNK_MGMT_URL, build_request_path};
pub use request::send_request;
