//! Stargazer CLI entrypoint: viewer panel and repository search TUI.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use stargazer::{GatewayError, StargazerConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), GatewayError> {
    let config = load_config()?;
    cli::search_tui::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`GatewayError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<StargazerConfig, GatewayError> {
    StargazerConfig::load().map_err(|error| GatewayError::Configuration {
        message: error.to_string(),
    })
}
