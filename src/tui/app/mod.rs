//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the application state and update logic for the
//! Stargazer TUI. It owns the two panels, turns request triggers into async
//! commands against the injected gateway, and feeds completions back into
//! the panels.
//!
//! # Module Structure
//!
//! - `form_handlers`: Search form editing
//! - `request_handlers`: Request triggers, async commands, and completions
//! - `lifecycle_handlers`: Quit, help, and resize handling
//! - `rendering`: View rendering methods for terminal output

use std::fmt;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::github::gateway::GraphQlGateway;
use crate::github::models::SearchCriteria;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::messages::AppMsg;
use super::state::{RepositorySearchPanel, ViewerPanel};

mod form_handlers;
mod lifecycle_handlers;
mod model_impl;
mod rendering;
mod request_handlers;

/// Default terminal width used before the first resize event.
const DEFAULT_WIDTH: u16 = 80;
/// Default terminal height used before the first resize event.
const DEFAULT_HEIGHT: u16 = 24;

/// Main application model for the Stargazer TUI.
pub struct SearchApp {
    /// Gateway shared with every in-flight request.
    gateway: Arc<dyn GraphQlGateway>,
    /// Sink for request latency and stale-response events.
    telemetry: Arc<dyn TelemetrySink>,
    /// Authenticated user panel.
    pub(crate) viewer_panel: ViewerPanel,
    /// Search form and repository result.
    pub(crate) search_panel: RepositorySearchPanel,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
}

impl fmt::Debug for SearchApp {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SearchApp")
            .field("viewer_panel", &self.viewer_panel)
            .field("search_panel", &self.search_panel)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("show_help", &self.show_help)
            .finish_non_exhaustive()
    }
}

impl SearchApp {
    /// Creates an application using `gateway` for every request, with the
    /// search form pre-filled from `criteria`.
    ///
    /// The viewer request is not issued until [`Self::viewer_cmd`] runs;
    /// `Model::init` does that automatically.
    #[must_use]
    pub fn new(gateway: Arc<dyn GraphQlGateway>, criteria: SearchCriteria) -> Self {
        Self {
            gateway,
            telemetry: Arc::new(NoopTelemetrySink),
            viewer_panel: ViewerPanel::new(),
            search_panel: RepositorySearchPanel::new(criteria),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            show_help: false,
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Sets explicit terminal dimensions.
    #[must_use]
    pub const fn with_dimensions(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Returns the repository search panel state.
    #[must_use]
    pub const fn search_panel(&self) -> &RepositorySearchPanel {
        &self.search_panel
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Delegates to a handler per message category and returns any command
    /// the handler produced.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_form() {
            return self.handle_form_msg(msg);
        }
        if msg.is_request() {
            return self.handle_request_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }
}
