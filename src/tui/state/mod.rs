//! State management for the Stargazer TUI.
//!
//! This module provides the request lifecycle types and the state of the two
//! panels: the viewer identity panel and the repository search panel.

mod request_status;
mod search_form;
mod search_panel;
mod viewer_panel;

pub use request_status::{RequestStatus, RequestTicket, TicketCounter};
pub use search_form::{FormField, SearchForm};
pub use search_panel::{
    Reconciliation, RepositorySearchPanel, SearchOutcome, SearchRequest, StarRequest,
};
pub use viewer_panel::ViewerPanel;
