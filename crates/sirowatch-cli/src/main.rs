//! `sirowatch`: one-shot SIRO fibre availability check for a single eircode.
//!
//! Exit status is inverted on purpose so a scheduler or monitor can alert on
//! failure:
//!
//! | status | meaning |
//! |---|---|
//! | `0` | no suggestions for the eircode, or SIRO not available yet |
//! | `1` | SIRO is available; the provider list is printed |
//! | `2` | fatal: missing config, transport or decode failure, page markup changed |

mod report;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sirowatch_lookup::SiroClient;

use crate::report::{Outcome, FATAL_EXIT};

#[derive(Debug, Parser)]
#[command(name = "sirowatch")]
#[command(about = "Check whether SIRO fibre is available at an eircode")]
struct Cli {
    /// Eircode to check. Overrides the `EIRCODE` environment variable.
    #[arg(long)]
    eircode: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    ExitCode::from(exit_status(run().await))
}

/// Any error that reaches the top of the run is fatal.
fn exit_status(result: anyhow::Result<u8>) -> u8 {
    match result {
        Ok(status) => status,
        Err(e) => {
            eprintln!("error: {e:#}");
            FATAL_EXIT
        }
    }
}

async fn run() -> anyhow::Result<u8> {
    let cli = Cli::parse();
    let config = sirowatch_core::load_app_config_with(cli.eircode)?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "loaded configuration");

    let client = SiroClient::new(config.request_timeout_secs, &config.user_agent)?;
    let outcome = Outcome::classify(client.check_availability(&config.eircode).await)?;

    println!("{}", outcome.message());
    Ok(outcome.exit_status())
}

#[cfg(test)]
mod tests;
