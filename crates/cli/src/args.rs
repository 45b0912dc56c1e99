//! CLI argument definitions and parsing.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not handle config loading (see `config_context` module).

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::kvstore::KvstoreCommand;

#[derive(Parser)]
#[command(name = "splunk-modinput")]
#[command(about = "Splunk modular input toolkit - decode input documents and call the management API", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  splunk-modinput config --file inputs.xml\n  splunk-modinput --app TA-GoogleFitness path storage passwords\n  splunk-modinput --app TA-GoogleFitness entities storage passwords\n  splunk-modinput --app fitness_for_splunk kvstore get google_tokens\n"
)]
pub struct Cli {
    /// Base URL of the Splunk management port (e.g., https://localhost:8089)
    #[arg(short, long, global = true, env = "SPLUNK_BASE_URL")]
    pub base_url: Option<String>,

    /// App namespace for servicesNS requests
    #[arg(long, global = true, env = "SPLUNK_APP")]
    pub app: Option<String>,

    /// Owner for servicesNS requests (default: nobody)
    #[arg(long, global = true, env = "SPLUNK_OWNER")]
    pub owner: Option<String>,

    /// Username for login
    #[arg(short, long, global = true, env = "SPLUNK_USERNAME")]
    pub username: Option<String>,

    /// Password for login
    #[arg(short, long, global = true, env = "SPLUNK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Pre-obtained session key (preferred over username/password)
    #[arg(short = 'k', long, global = true, env = "SPLUNK_SESSION_KEY", hide_env_values = true)]
    pub session_key: Option<String>,

    /// Skip TLS certificate verification (default: true, Splunk uses self-signed certificates)
    #[arg(long, global = true, env = "SPLUNK_SKIP_VERIFY", value_parser = BoolishValueParser::new())]
    pub skip_verify: Option<bool>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a modular input startup document and print it as JSON
    Config {
        /// Read the document from a file instead of stdin
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Decode a --validate-arguments document instead
        #[arg(long)]
        validation: bool,
    },

    /// Print the REST URL for a path in the configured namespace
    Path {
        /// Path segments, e.g. `storage passwords`
        #[arg(required = true)]
        segments: Vec<String>,
    },

    /// Log in with username and password and print the session key
    Login,

    /// Fetch an entity collection and print it as JSON
    Entities {
        /// Path segments, e.g. `services properties`
        #[arg(required = true)]
        segments: Vec<String>,
    },

    /// Read or write KV Store documents
    Kvstore {
        #[command(subcommand)]
        command: KvstoreCommand,
    },
}
