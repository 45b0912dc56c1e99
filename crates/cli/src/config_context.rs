//! Configuration context for command execution.
//!
//! Responsibilities:
//! - Build only as much configuration as the command needs.
//! - Provide type-safe extraction of config for commands that need it.
//!
//! Invariants:
//! - CLI flags override environment variables, which override defaults.
//! - Commands that never call Splunk do not require credentials.

use splunk_config::{Config, ConfigError, ConfigLoader, ConnectionConfig};

use crate::args::{Cli, Commands};

/// Context for command execution.
pub(crate) enum ConfigCommandContext {
    /// Connection and auth settings, for authenticated REST commands.
    Real(Box<Config>),
    /// Connection settings only, for commands that never send a session key.
    Connection(ConnectionConfig),
    /// Commands that work on local input only.
    Placeholder,
}

impl ConfigCommandContext {
    /// Extract the full config, failing if auth was not loaded.
    pub(crate) fn into_real_config(self) -> anyhow::Result<Config> {
        match self {
            ConfigCommandContext::Real(config) => Ok(*config),
            _ => anyhow::bail!(
                "Internal error: attempted to use a partial config for an operation requiring authentication"
            ),
        }
    }

    /// Extract the connection settings.
    pub(crate) fn into_connection(self) -> anyhow::Result<ConnectionConfig> {
        match self {
            ConfigCommandContext::Real(config) => Ok(config.connection),
            ConfigCommandContext::Connection(connection) => Ok(connection),
            ConfigCommandContext::Placeholder => anyhow::bail!(
                "Internal error: attempted to use placeholder config for an operation requiring connection details"
            ),
        }
    }
}

/// Load the configuration `cli.command` needs.
pub(crate) fn load(cli: &Cli) -> Result<ConfigCommandContext, ConfigError> {
    if matches!(cli.command, Commands::Config { .. }) {
        return Ok(ConfigCommandContext::Placeholder);
    }

    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref app) = cli.app {
        loader = loader.with_namespace(app.clone());
    }
    if let Some(ref owner) = cli.owner {
        loader = loader.with_owner(owner.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(ref key) = cli.session_key {
        loader = loader.with_session_key(key.clone());
    }
    if let Some(skip) = cli.skip_verify {
        loader = loader.with_skip_verify(skip);
    }

    match cli.command {
        Commands::Path { .. } | Commands::Login => {
            Ok(ConfigCommandContext::Connection(loader.build_connection()?))
        }
        _ => Ok(ConfigCommandContext::Real(Box::new(loader.build()?))),
    }
}
