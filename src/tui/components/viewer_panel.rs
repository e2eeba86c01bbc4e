//! Viewer identity panel component.

use crate::github::models::Viewer;
use crate::tui::state::RequestStatus;

/// Placeholder shown when the account has no display name.
pub const NO_NAME_PLACEHOLDER: &str = "No name";

/// Static heading rendered below the identity.
pub const PANEL_HEADING: &str = "GitHub Search";

/// Renders the viewer panel for one of its three states.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewerPanelComponent;

impl ViewerPanelComponent {
    /// Renders the panel.
    #[must_use]
    pub fn view(status: &RequestStatus<Viewer>) -> String {
        match status {
            RequestStatus::Pending => "loading ...\n".to_owned(),
            RequestStatus::Failed(error) => format!("{error}\n"),
            RequestStatus::Succeeded(viewer) => Self::render_identity(viewer),
        }
    }

    fn render_identity(viewer: &Viewer) -> String {
        let name = if viewer.display_name.trim().is_empty() {
            NO_NAME_PLACEHOLDER
        } else {
            viewer.display_name.as_str()
        };
        format!("[avatar] {}\n{name}\n{PANEL_HEADING}\n", viewer.avatar_url)
    }
}
