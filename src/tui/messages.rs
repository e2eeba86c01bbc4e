//! Message types for the TUI update loop.
//!
//! Messages represent user actions, async request completions, and system
//! events. Completions carry the ticket issued when their request was
//! triggered so the panel can discard superseded results.

use crate::github::error::GatewayError;
use crate::github::models::{RepositorySnapshot, SearchCriteria, StarReceipt, Viewer};

use super::state::RequestTicket;

/// Messages for the Stargazer TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Form editing
    /// Append a character to the focused field.
    InsertChar(char),
    /// Delete the last character of the focused field.
    DeleteChar,
    /// Focus the next form field.
    FocusNext,
    /// Focus the previous form field.
    FocusPrevious,

    // Requests
    /// Submit the search form.
    SubmitSearch,
    /// Star the displayed repository.
    StarRequested,
    /// The viewer request completed.
    ViewerLoaded(Result<Viewer, GatewayError>),
    /// A repository search completed.
    SearchCompleted {
        /// Ticket issued when the search was submitted.
        ticket: RequestTicket,
        /// Criteria the search was submitted with.
        criteria: SearchCriteria,
        /// Gateway outcome; `Ok(None)` means not found.
        result: Result<Option<RepositorySnapshot>, GatewayError>,
    },
    /// A star mutation completed.
    StarCompleted {
        /// Ticket issued when the star was triggered.
        ticket: RequestTicket,
        /// Gateway outcome.
        result: Result<StarReceipt, GatewayError>,
    },

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns `true` for messages that edit the search form.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_) | Self::DeleteChar | Self::FocusNext | Self::FocusPrevious
        )
    }

    /// Returns `true` for request triggers and completions.
    #[must_use]
    pub const fn is_request(&self) -> bool {
        matches!(
            self,
            Self::SubmitSearch
                | Self::StarRequested
                | Self::ViewerLoaded(_)
                | Self::SearchCompleted { .. }
                | Self::StarCompleted { .. }
        )
    }
}
