//! Splunk REST API client.
//!
//! This crate provides the small slice of the Splunk management API a
//! modular input needs: logging in, reading entity collections such as
//! `storage/passwords`, and reading or writing KV Store documents.
//!
//! Requests use the session key a modular input receives on stdin
//! (`Authorization: Splunk <key>`), or log in with a username and password.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use auth::{AuthStrategy, SessionManager};
pub use client::SplunkClient;
pub use client::builder::SplunkClientBuilder;
pub use endpoints::LOCAL_SPLUNK_MGMT_URL;
pub use error::{ClientError, Result};
pub use models::{RestDictionary, RestEntry, RestKey, RestLink, RestMessage, RestResponse, SessionKey};
