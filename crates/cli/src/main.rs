//! splunk-modinput: shell harness for the modular input toolkit.
//!
//! Decodes the documents Splunk feeds a modular input and exercises the
//! REST helpers (`path`, `login`, `entities`, `kvstore`) against a live
//! management port.
//!
//! Invariants:
//! - `.env` is loaded before argument parsing so clap's `env` fallbacks see it.
//! - stdout carries command output only; logs and errors go to stderr.

mod args;
mod commands;
mod config_context;
mod dispatch;
mod error;

use clap::Parser;
use splunk_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::args::Cli;
use crate::error::{ExitCode, ExitCodeExt};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("{}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();
    init_logging();

    let context = match config_context::load(&cli) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("Failed to build configuration: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let code = match dispatch::run_command(cli, context).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(code.as_i32());
}
