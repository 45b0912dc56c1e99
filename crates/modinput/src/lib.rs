//! Splunk modular input protocol.
//!
//! Splunk runs a modular input as an external process. On registration it
//! asks for the input's scheme (`--scheme`), before saving a configuration
//! it may ask the input to check it (`--validate-arguments`), and otherwise
//! it feeds the startup configuration on stdin and reads events from stdout.
//!
//! This crate covers the XML side of that contract:
//! - [`ModInputConfig`]: the startup document
//! - [`ValidationDefinition`]: the validation document
//! - [`Scheme`] and [`Argument`]: the registration descriptor
//! - [`EventWriter`]: the XML event stream
//! - [`ModularInput`] and [`run`]: dispatch on the process arguments

pub mod config;
pub mod error;
pub mod event;
pub mod runner;
pub mod scheme;

pub use config::{ModInputConfig, Param, Stanza, ValidationDefinition};
pub use error::{ModInputError, Result};
pub use event::{Event, EventWriter};
pub use runner::{ModularInput, RunMode, run};
pub use scheme::{Argument, DataType, Scheme, StreamingMode};
