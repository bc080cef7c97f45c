//! atlas-hex binary
//!
//! Hex grid queries for campaign map tooling.
//!
//! Usage:
//!   atlas-hex ring 0 0 2
//!   ATLAS_OUTPUT=text atlas-hex line 0 0 4 -2
//!   ATLAS_HEX_SIZE=48 atlas-hex from-pixel 120 33.5

use atlas_cli::{run, CliConfig, Error, USAGE};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atlas_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = CliConfig::from_env().and_then(|config| run(&args, &config));

    match result {
        Ok((output, success)) => {
            println!("{}", output);
            if !success {
                std::process::exit(1);
            }
        }
        Err(Error::Usage(message)) => {
            eprintln!("Error: {}", message);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
