//! Data models for Splunk API responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access. XML decoding lives in [`crate::endpoints`].

pub mod common;
pub mod entities;
pub mod session;

pub use common::RestMessage;
pub use entities::{RestDictionary, RestEntry, RestKey, RestLink, RestResponse};
pub use session::SessionKey;
