//! Lifecycle and window handlers for the Stargazer TUI.
//!
//! This module handles terminal resize events and high-level lifecycle
//! messages such as quit and help toggling.

use bubbletea_rs::Cmd;

use super::SearchApp;
use crate::tui::messages::AppMsg;

impl SearchApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }
}
