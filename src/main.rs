//! envkeys - Bootstrap secrets for a CMS deployment's environment file.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envkeys::cli::output;
use envkeys::cli::{execute, Cli};
use envkeys::core::constants::LOG_ENV;
use envkeys::error::{DescriptorError, Error, GenerateError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("envkeys=debug")
        } else {
            EnvFilter::new("envkeys=warn")
        }
    });

    // stdout carries only the generated lines
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Generate(GenerateError::EntropySource(_)) => {
                Some("the host's secure random generator is broken; no secrets were printed")
            }
            Error::Descriptor(DescriptorError::MissingVar(_)) => {
                Some("export the variable or use the staging environment")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
