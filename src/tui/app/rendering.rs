//! Rendering logic for the Stargazer TUI application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::SearchApp;
use crate::tui::components::{
    RepositoryResultComponent, SearchFormComponent, ViewerPanelComponent,
};

impl SearchApp {
    /// Renders the main screen: viewer panel, form, result, status bar.
    pub(super) fn render_main_view(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push_str(&ViewerPanelComponent::view(self.viewer_panel.status()));
        output.push('\n');
        output.push_str(&SearchFormComponent::view(self.search_panel.form()));
        output.push('\n');
        output.push_str(&RepositoryResultComponent::view(&self.search_panel));

        let body_lines = output.lines().count();
        let status_row = usize::from(self.height).saturating_sub(1);
        output.push_str(&"\n".repeat(status_row.saturating_sub(body_lines)));
        output.push_str(&self.render_status_bar());

        output
    }

    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let busy = self.viewer_panel.status().is_pending()
            || self.search_panel.is_searching()
            || self.search_panel.is_starring();
        let loading_indicator = if busy { " [Loading...]" } else { "" };
        format!("Stargazer{loading_indicator}\n")
    }

    /// Renders the status bar with help hints.
    pub(super) fn render_status_bar(&self) -> String {
        let hints = if self.search_panel.is_star_visible() {
            "Enter:search  Tab:field  Ctrl+S:star  F1:help  Esc:quit"
        } else {
            "Enter:search  Tab:field  F1:help  Esc:quit"
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Search form:
  text keys      Edit the focused field
  Backspace      Delete one character
  Tab, Down      Next field
  Shift+Tab, Up  Previous field
  Enter          Search (or retry a failed search)

Repository:
  Ctrl+S         Star the displayed repository

Other:
  F1             Toggle this help
  Esc, Ctrl+C    Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
