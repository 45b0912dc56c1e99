//! Settings resolution.
//!
//! Order, lowest to highest: built-in defaults, `.env` (only via
//! [`ConfigLoader::load_dotenv`]), `SPLUNK_*` variables, then `with_*`
//! overrides.

mod builder;
mod dotenv;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
