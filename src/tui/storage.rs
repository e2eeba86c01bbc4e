//! Startup context storage for the Stargazer TUI.
//!
//! `bubbletea_rs::Model::init` is a static constructor, so the gateway built
//! in `main` is handed over through `OnceLock` values that are written once
//! before the program starts and read once by `SearchApp::init()`. Everything
//! after `init` receives its collaborators explicitly.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use crossterm::terminal;

use crate::github::error::GatewayError;
use crate::github::gateway::GraphQlGateway;
use crate::github::models::{
    RepositoryId, RepositorySnapshot, SearchCriteria, StarReceipt, Viewer,
};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

/// Global storage for the gateway and initial form values.
static APP_CONTEXT: OnceLock<AppContext> = OnceLock::new();

/// Global storage for the telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Collaborators handed to the application at startup.
#[derive(Clone)]
pub(crate) struct AppContext {
    pub(crate) gateway: Arc<dyn GraphQlGateway>,
    pub(crate) initial_criteria: SearchCriteria,
}

/// Sets the gateway and initial search criteria for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. Without
/// it, every request fails with a configuration error.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_app_context(gateway: Arc<dyn GraphQlGateway>, initial_criteria: SearchCriteria) -> bool {
    APP_CONTEXT
        .set(AppContext {
            gateway,
            initial_criteria,
        })
        .is_ok()
}

/// Sets the telemetry sink for the TUI application.
///
/// Without this, a no-op sink is used.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Gets the startup context, falling back to a gateway that reports the
/// missing configuration on every request.
pub(crate) fn get_app_context() -> AppContext {
    APP_CONTEXT.get().cloned().unwrap_or_else(|| AppContext {
        gateway: Arc::new(UnconfiguredGateway),
        initial_criteria: SearchCriteria::default(),
    })
}

/// Gets the telemetry sink, returning a no-op sink if not configured.
pub(crate) fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(NoopTelemetrySink))
}

/// Gets the terminal dimensions for the first frame.
///
/// Falls back to 80x24 when the terminal size is unknown or zero.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    terminal::size()
        .ok()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}

/// Gateway used when the program starts without a configured context.
#[derive(Debug, Clone, Copy)]
struct UnconfiguredGateway;

impl UnconfiguredGateway {
    fn error() -> GatewayError {
        GatewayError::Configuration {
            message: "GraphQL gateway not configured".to_owned(),
        }
    }
}

#[async_trait]
impl GraphQlGateway for UnconfiguredGateway {
    async fn viewer(&self) -> Result<Viewer, GatewayError> {
        Err(Self::error())
    }

    async fn repository(
        &self,
        _criteria: &SearchCriteria,
    ) -> Result<Option<RepositorySnapshot>, GatewayError> {
        Err(Self::error())
    }

    async fn add_star(&self, _repository_id: &RepositoryId) -> Result<StarReceipt, GatewayError> {
        Err(Self::error())
    }
}
