//! Repository result block and request status lines for the search panel.

use crate::github::models::RepositorySnapshot;
use crate::tui::state::{RepositorySearchPanel, RequestStatus, SearchOutcome};

/// Renders the displayed repository and the panel's request status.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepositoryResultComponent;

impl RepositoryResultComponent {
    /// Renders the status lines followed by the result block.
    ///
    /// The result block is omitted while the snapshot is empty.
    #[must_use]
    pub fn view(panel: &RepositorySearchPanel) -> String {
        let mut output = String::new();
        output.push_str(&Self::render_search_status(panel));
        output.push_str(&Self::render_star_status(panel));
        if panel.has_result() {
            output.push_str(&Self::render_snapshot(panel.snapshot()));
        }
        output
    }

    /// Renders the heading line: name plus the star count when known.
    #[must_use]
    pub fn heading(snapshot: &RepositorySnapshot) -> String {
        snapshot.star_count.map_or_else(
            || snapshot.name.clone(),
            |count| format!("{} {count} stars", snapshot.name),
        )
    }

    fn render_snapshot(snapshot: &RepositorySnapshot) -> String {
        let mut output = format!("{}\n{}\n", Self::heading(snapshot), snapshot.description);
        if !snapshot.viewer_has_starred {
            output.push_str("[ Star ]\n");
        }
        output.push_str("Last 5 issues:\n");
        for issue in snapshot.recent_issues.iter().flatten() {
            output.push_str("  * ");
            output.push_str(&issue.title);
            output.push('\n');
        }
        output
    }

    fn render_search_status(panel: &RepositorySearchPanel) -> String {
        match panel.search_status() {
            None | Some(RequestStatus::Succeeded(SearchOutcome::Found)) => String::new(),
            Some(RequestStatus::Pending) => "Searching...\n".to_owned(),
            Some(RequestStatus::Failed(error)) => {
                format!("Search failed: {error} (press Enter to retry)\n")
            }
            Some(RequestStatus::Succeeded(SearchOutcome::NotFound(criteria))) => format!(
                "No repository found for {}/{}\n",
                criteria.organization_name, criteria.repository_name
            ),
        }
    }

    fn render_star_status(panel: &RepositorySearchPanel) -> String {
        match panel.star_status() {
            Some(status) if status.is_pending() => "Starring...\n".to_owned(),
            Some(status) => status
                .error()
                .map_or_else(String::new, |error| format!("Star failed: {error}\n")),
            None => String::new(),
        }
    }
}
