//! State of the viewer identity panel.

use crate::github::error::GatewayError;
use crate::github::models::Viewer;

use super::RequestStatus;

/// Identity panel fed by the single `GetViewer` request issued on mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerPanel {
    status: RequestStatus<Viewer>,
}

impl Default for ViewerPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerPanel {
    /// Creates a panel whose request is already in flight.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: RequestStatus::Pending,
        }
    }

    /// Records the outcome of the viewer request.
    ///
    /// Only the first completion is kept; the panel never refreshes.
    pub fn complete(&mut self, result: Result<Viewer, GatewayError>) {
        if !self.status.is_pending() {
            tracing::debug!("ignoring repeated viewer completion");
            return;
        }
        self.status = RequestStatus::from_result(result);
    }

    /// Returns the current request status.
    #[must_use]
    pub const fn status(&self) -> &RequestStatus<Viewer> {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::ViewerPanel;
    use crate::github::error::GatewayError;
    use crate::github::models::test_support::viewer;
    use crate::tui::state::RequestStatus;

    #[test]
    fn new_panel_is_pending() {
        assert!(ViewerPanel::new().status().is_pending());
    }

    #[test]
    fn completion_replaces_pending_status() {
        let mut panel = ViewerPanel::new();
        panel.complete(Ok(viewer("Mona")));

        assert_eq!(panel.status(), &RequestStatus::Succeeded(viewer("Mona")));
    }

    #[test]
    fn later_completions_do_not_overwrite_the_first() {
        let mut panel = ViewerPanel::new();
        panel.complete(Err(GatewayError::Network {
            message: "offline".to_owned(),
        }));
        panel.complete(Ok(viewer("Mona")));

        assert!(panel.status().error().is_some());
    }
}
