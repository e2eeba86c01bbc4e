//! Search form editing handlers.

use bubbletea_rs::Cmd;

use super::SearchApp;
use crate::tui::messages::AppMsg;

impl SearchApp {
    /// Dispatches form editing messages to the search panel.
    ///
    /// Editing never triggers a request.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    pub(super) fn handle_form_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::InsertChar(character) => self.search_panel.insert_char(*character),
            AppMsg::DeleteChar => self.search_panel.delete_char(),
            AppMsg::FocusNext => self.search_panel.focus_next(),
            AppMsg::FocusPrevious => self.search_panel.focus_previous(),
            _ => {
                // Unreachable: caller filters to form messages.
            }
        }
        None
    }
}
