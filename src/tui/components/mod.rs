//! UI components for the Stargazer TUI.
//!
//! Components are stateless renderers: each takes the relevant piece of
//! panel state and returns newline-terminated text.

mod repository_result;
mod search_form;
mod viewer_panel;

pub use repository_result::RepositoryResultComponent;
pub use search_form::SearchFormComponent;
pub use viewer_panel::{NO_NAME_PLACEHOLDER, PANEL_HEADING, ViewerPanelComponent};
