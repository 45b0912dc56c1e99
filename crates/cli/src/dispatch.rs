//! Command dispatch logic.
//!
//! Invariants:
//! - Commands are routed based on the top-level Commands enum variant.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::config_context::ConfigCommandContext;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, config: ConfigCommandContext) -> Result<()> {
    match cli.command {
        Commands::Config { file, validation } => {
            commands::config::run(file, validation)?;
        }
        Commands::Path { segments } => {
            commands::path::run(&config.into_connection()?, &segments)?;
        }
        Commands::Login => {
            commands::login::run(config.into_connection()?, cli.username, cli.password).await?;
        }
        Commands::Entities { segments } => {
            commands::entities::run(config.into_real_config()?, &segments).await?;
        }
        Commands::Kvstore { command } => {
            commands::kvstore::run(config.into_real_config()?, command).await?;
        }
    }

    Ok(())
}
