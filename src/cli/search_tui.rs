//! TUI mode for searching and starring repositories.
//!
//! This module wires configuration into the gateway, hands it to the TUI,
//! and runs the bubbletea-rs program.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use stargazer::telemetry::TracingTelemetrySink;
use stargazer::tui::{SearchApp, set_app_context, set_telemetry_sink};
use stargazer::{GatewayError, OctocrabGraphQlGateway, StargazerConfig};

/// Runs the TUI mode.
///
/// # Errors
///
/// Returns an error if:
/// - The token is missing or blank
/// - The API URL is invalid
/// - The Octocrab client cannot be built
/// - The TUI fails to initialise
pub async fn run(config: &StargazerConfig) -> Result<(), GatewayError> {
    let token = config.resolve_token()?;
    let endpoint = config.endpoint()?;
    let gateway = OctocrabGraphQlGateway::for_token(&token, &endpoint)?;

    tracing::debug!(endpoint = endpoint.as_str(), "starting search TUI");

    // If already set (e.g. re-running the TUI in the same process) the
    // existing context remains.
    if !set_app_context(Arc::new(gateway), config.initial_criteria()) {
        tracing::debug!("app context already configured");
    }
    if !set_telemetry_sink(Arc::new(TracingTelemetrySink)) {
        tracing::debug!("telemetry sink already configured");
    }

    run_tui().await.map_err(|error| GatewayError::Terminal {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `SearchApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // SearchApp::init() retrieves the gateway from module-level storage.
    let program = Program::<SearchApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
