//! Command-line interface.

pub mod database;
pub mod generate;
pub mod output;

use clap::{Parser, Subcommand};

use crate::core::database::Environment;

/// envkeys - Bootstrap secrets for a CMS deployment's environment file.
#[derive(Parser)]
#[command(
    name = "envkeys",
    about = "Generate deployment secrets as KEY=value lines",
    long_about = "Generate deployment secrets as KEY=value lines.\n\n\
                  Run without a subcommand to print APP_KEYS, API_TOKEN_SALT, \
                  ADMIN_JWT_SECRET, TRANSFER_TOKEN_SALT and JWT_SECRET.",
    version
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands. With none given, a secret set is generated.
#[derive(Subcommand)]
pub enum Command {
    /// Show the database descriptor resolved from the current environment
    Database {
        /// Deployment environment (staging or production)
        #[arg(value_parser = str::parse::<Environment>)]
        environment: Environment,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Print passwords and connection strings unmasked
        #[arg(long)]
        reveal: bool,
    },
}

/// Execute a command.
pub fn execute(command: Option<Command>) -> crate::error::Result<()> {
    match command {
        None => generate::execute(),
        Some(Command::Database {
            environment,
            json,
            reveal,
        }) => database::execute(environment, json, reveal),
    }
}
