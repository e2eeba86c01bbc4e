//! Repository search panel state machine.
//!
//! The panel owns the search form, the displayed repository snapshot, and
//! the status of the two requests it can trigger. Triggers return a request
//! description carrying a [`RequestTicket`]; the matching completion is fed
//! back through [`RepositorySearchPanel::complete_search`] or
//! [`RepositorySearchPanel::complete_star`]. Completions whose ticket has
//! been superseded are reported as [`Reconciliation::Stale`] and leave the
//! state untouched.

use crate::github::error::GatewayError;
use crate::github::models::{RepositoryId, RepositorySnapshot, SearchCriteria, StarReceipt};

use super::{FormField, RequestStatus, RequestTicket, SearchForm, TicketCounter};

/// Successful outcome of a repository search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The repository exists and is now displayed.
    Found,
    /// GitHub reported no repository for the submitted criteria.
    NotFound(SearchCriteria),
}

/// A `GetRepo` request the caller must execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Ticket to hand back with the completion.
    pub ticket: RequestTicket,
    /// Criteria captured at trigger time.
    pub criteria: SearchCriteria,
}

/// An `AddStar` request the caller must execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarRequest {
    /// Ticket to hand back with the completion.
    pub ticket: RequestTicket,
    /// Repository to star.
    pub repository_id: RepositoryId,
}

/// Result of feeding a completion into the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// The completion belonged to the latest request and was applied.
    Applied,
    /// A newer request superseded this one; nothing changed.
    Stale {
        /// Most recently issued ticket value.
        latest: u64,
    },
}

/// State of the repository search panel.
#[derive(Debug, Clone, Default)]
pub struct RepositorySearchPanel {
    form: SearchForm,
    snapshot: RepositorySnapshot,
    search_status: Option<RequestStatus<SearchOutcome>>,
    star_status: Option<RequestStatus<()>>,
    search_tickets: TicketCounter,
    star_tickets: TicketCounter,
}

impl RepositorySearchPanel {
    /// Creates a panel whose form is pre-filled with `criteria`.
    #[must_use]
    pub fn new(criteria: SearchCriteria) -> Self {
        Self {
            form: SearchForm::new(criteria),
            ..Self::default()
        }
    }

    /// Returns the current criteria.
    #[must_use]
    pub const fn criteria(&self) -> &SearchCriteria {
        self.form.criteria()
    }

    /// Returns the search form.
    #[must_use]
    pub const fn form(&self) -> &SearchForm {
        &self.form
    }

    /// Returns the displayed snapshot (possibly the empty default).
    #[must_use]
    pub const fn snapshot(&self) -> &RepositorySnapshot {
        &self.snapshot
    }

    /// Returns the status of the latest search, if one was ever submitted.
    #[must_use]
    pub const fn search_status(&self) -> Option<&RequestStatus<SearchOutcome>> {
        self.search_status.as_ref()
    }

    /// Returns the status of the latest star request, if any.
    #[must_use]
    pub const fn star_status(&self) -> Option<&RequestStatus<()>> {
        self.star_status.as_ref()
    }

    /// Returns `true` when the result block should be rendered.
    #[must_use]
    pub const fn has_result(&self) -> bool {
        self.snapshot.is_present()
    }

    /// Returns `true` when the `[ Star ]` action should be offered.
    #[must_use]
    pub const fn is_star_visible(&self) -> bool {
        self.has_result() && !self.snapshot.viewer_has_starred
    }

    /// Returns `true` while a search is in flight.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.search_status
            .as_ref()
            .is_some_and(RequestStatus::is_pending)
    }

    /// Returns `true` while a star request is in flight.
    #[must_use]
    pub fn is_starring(&self) -> bool {
        self.star_status
            .as_ref()
            .is_some_and(RequestStatus::is_pending)
    }

    /// Replaces the organisation name without validation.
    pub fn update_organization_name(&mut self, value: impl Into<String>) {
        self.form.set_organization_name(value);
    }

    /// Replaces the repository name without validation.
    pub fn update_repository_name(&mut self, value: impl Into<String>) {
        self.form.set_repository_name(value);
    }

    /// Appends a character to the focused field.
    pub fn insert_char(&mut self, character: char) {
        let mut value = self.focused_value();
        value.push(character);
        self.update_focused(value);
    }

    /// Deletes the last character of the focused field.
    pub fn delete_char(&mut self) {
        let mut value = self.focused_value();
        if value.pop().is_some() {
            self.update_focused(value);
        }
    }

    fn focused_value(&self) -> String {
        self.form.value(self.form.focus()).to_owned()
    }

    fn update_focused(&mut self, value: String) {
        match self.form.focus() {
            FormField::Organization => self.update_organization_name(value),
            FormField::Repository => self.update_repository_name(value),
        }
    }

    /// Moves focus to the next form field.
    pub const fn focus_next(&mut self) {
        self.form.focus_next();
    }

    /// Moves focus to the previous form field.
    pub const fn focus_previous(&mut self) {
        self.form.focus_previous();
    }

    /// Triggers a search with the criteria as currently typed.
    ///
    /// Empty values are submitted as-is. Any earlier in-flight search is
    /// superseded.
    pub fn submit_search(&mut self) -> SearchRequest {
        let ticket = self.search_tickets.issue();
        self.search_status = Some(RequestStatus::Pending);
        SearchRequest {
            ticket,
            criteria: self.form.criteria().clone(),
        }
    }

    /// Applies the completion of a search.
    ///
    /// A found repository replaces the snapshot. A missing repository resets
    /// the snapshot and records a not-found notice for `criteria`. A failure
    /// keeps the previous snapshot so the user can retry.
    pub fn complete_search(
        &mut self,
        ticket: RequestTicket,
        criteria: SearchCriteria,
        result: Result<Option<RepositorySnapshot>, GatewayError>,
    ) -> Reconciliation {
        if !self.search_tickets.is_current(ticket) {
            return Reconciliation::Stale {
                latest: self.search_tickets.latest(),
            };
        }

        let status = match result {
            Ok(Some(snapshot)) => {
                self.snapshot = snapshot;
                RequestStatus::Succeeded(SearchOutcome::Found)
            }
            Ok(None) => {
                self.snapshot = RepositorySnapshot::default();
                RequestStatus::Succeeded(SearchOutcome::NotFound(criteria))
            }
            Err(error) => RequestStatus::Failed(error),
        };
        self.search_status = Some(status);
        if !self.is_starring() {
            self.star_status = None;
        }
        Reconciliation::Applied
    }

    /// Triggers a star for the displayed repository.
    ///
    /// Returns `None` when no repository is displayed, when it is already
    /// starred, or when a star request is still in flight.
    pub fn star(&mut self) -> Option<StarRequest> {
        if !self.is_star_visible() || self.is_starring() {
            return None;
        }

        let ticket = self.star_tickets.issue();
        self.star_status = Some(RequestStatus::Pending);
        Some(StarRequest {
            ticket,
            repository_id: self.snapshot.id.clone(),
        })
    }

    /// Applies the completion of a star request.
    ///
    /// On success the snapshot is marked as starred and takes the returned
    /// total, provided it still shows the starred repository.
    pub fn complete_star(
        &mut self,
        ticket: RequestTicket,
        result: Result<StarReceipt, GatewayError>,
    ) -> Reconciliation {
        if !self.star_tickets.is_current(ticket) {
            return Reconciliation::Stale {
                latest: self.star_tickets.latest(),
            };
        }

        let status = match result {
            Ok(receipt) => {
                if !self.snapshot.apply_star(&receipt) {
                    tracing::debug!(
                        repository = receipt.repository_id.as_str(),
                        "star receipt no longer matches the displayed repository"
                    );
                }
                RequestStatus::Succeeded(())
            }
            Err(error) => RequestStatus::Failed(error),
        };
        self.star_status = Some(status);
        Reconciliation::Applied
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{Reconciliation, RepositorySearchPanel, SearchOutcome};
    use crate::github::error::GatewayError;
    use crate::github::models::test_support::{
        repository, repository_with_issues, star_receipt,
    };
    use crate::github::models::{MAX_RECENT_ISSUES, RepositorySnapshot, SearchCriteria};
    use crate::tui::state::RequestStatus;

    fn octocat() -> SearchCriteria {
        SearchCriteria::new("octocat", "Hello-World")
    }

    fn network_error() -> GatewayError {
        GatewayError::Network {
            message: "connection reset".to_owned(),
        }
    }

    #[fixture]
    fn displaying_hello_world() -> RepositorySearchPanel {
        let mut panel = RepositorySearchPanel::new(octocat());
        let request = panel.submit_search();
        panel.complete_search(
            request.ticket,
            request.criteria,
            Ok(Some(repository("R_1", "Hello-World", 1500))),
        );
        panel
    }

    #[test]
    fn fresh_panel_has_empty_criteria_and_no_result() {
        let panel = RepositorySearchPanel::default();

        assert_eq!(panel.criteria(), &SearchCriteria::new("", ""));
        assert!(panel.search_status().is_none());
        assert!(!panel.has_result());
        assert!(!panel.is_star_visible());
    }

    #[test]
    fn updated_names_are_submitted_without_validation() {
        let mut panel = RepositorySearchPanel::default();
        panel.update_organization_name("  octocat ");
        panel.update_repository_name("Hello-World");

        let request = panel.submit_search();

        assert_eq!(
            request.criteria,
            SearchCriteria::new("  octocat ", "Hello-World")
        );
        assert!(!panel.has_result(), "updating fields alone fetches nothing");
    }

    #[test]
    fn typing_edits_only_the_focused_field() {
        let mut panel = RepositorySearchPanel::default();
        "octocat".chars().for_each(|ch| panel.insert_char(ch));
        panel.focus_next();
        "Hello-World".chars().for_each(|ch| panel.insert_char(ch));

        assert_eq!(panel.criteria(), &octocat());
    }

    #[rstest]
    #[case::empty_field(SearchCriteria::new("", "repo"), SearchCriteria::new("", "repo"))]
    #[case::multibyte(SearchCriteria::new("café", ""), SearchCriteria::new("caf", ""))]
    fn delete_removes_one_whole_character(
        #[case] initial: SearchCriteria,
        #[case] expected: SearchCriteria,
    ) {
        let mut panel = RepositorySearchPanel::new(initial);
        panel.delete_char();

        assert_eq!(panel.criteria(), &expected);
    }

    #[test]
    fn empty_criteria_are_submitted_unchanged() {
        let mut panel = RepositorySearchPanel::default();
        let request = panel.submit_search();

        assert_eq!(request.criteria, SearchCriteria::new("", ""));
        assert!(panel.is_searching());
    }

    #[test]
    fn snapshot_is_not_replaced_until_the_completion_arrives() {
        let mut panel = RepositorySearchPanel::new(octocat());
        let _request = panel.submit_search();

        assert_eq!(panel.snapshot(), &RepositorySnapshot::default());
    }

    #[rstest]
    fn found_repository_replaces_the_snapshot(displaying_hello_world: RepositorySearchPanel) {
        let panel = displaying_hello_world;

        assert!(panel.has_result());
        assert_eq!(panel.snapshot().name, "Hello-World");
        assert_eq!(panel.snapshot().star_count, Some(1500));
        assert_eq!(
            panel.search_status(),
            Some(&RequestStatus::Succeeded(SearchOutcome::Found))
        );
    }

    #[rstest]
    fn not_found_resets_the_snapshot(mut displaying_hello_world: RepositorySearchPanel) {
        displaying_hello_world.update_repository_name("missing");
        let request = displaying_hello_world.submit_search();
        displaying_hello_world.complete_search(request.ticket, request.criteria, Ok(None));

        assert!(!displaying_hello_world.has_result());
        assert_eq!(
            displaying_hello_world.search_status(),
            Some(&RequestStatus::Succeeded(SearchOutcome::NotFound(
                SearchCriteria::new("octocat", "missing")
            )))
        );
    }

    #[rstest]
    fn failed_search_keeps_the_previous_snapshot(
        mut displaying_hello_world: RepositorySearchPanel,
    ) {
        let request = displaying_hello_world.submit_search();
        displaying_hello_world.complete_search(
            request.ticket,
            request.criteria,
            Err(network_error()),
        );

        assert_eq!(displaying_hello_world.snapshot().name, "Hello-World");
        assert_eq!(
            displaying_hello_world
                .search_status()
                .and_then(RequestStatus::error),
            Some(&network_error())
        );
    }

    #[test]
    fn superseded_search_completion_is_discarded() {
        let mut panel = RepositorySearchPanel::new(octocat());
        let first = panel.submit_search();
        panel.update_repository_name("Spoon-Knife");
        let second = panel.submit_search();

        panel.complete_search(
            second.ticket,
            second.criteria,
            Ok(Some(repository("R_2", "Spoon-Knife", 12))),
        );
        let outcome = panel.complete_search(
            first.ticket,
            first.criteria,
            Ok(Some(repository("R_1", "Hello-World", 1500))),
        );

        assert_eq!(outcome, Reconciliation::Stale { latest: 2 });
        assert_eq!(panel.snapshot().name, "Spoon-Knife");
    }

    #[test]
    fn issues_keep_server_order_and_cap() {
        let mut panel = RepositorySearchPanel::new(octocat());
        let request = panel.submit_search();
        panel.complete_search(
            request.ticket,
            request.criteria,
            Ok(Some(repository_with_issues("R_1", "Hello-World", 3))),
        );

        let titles: Vec<_> = panel
            .snapshot()
            .recent_issues
            .iter()
            .flatten()
            .map(|issue| issue.title.clone())
            .collect();
        assert_eq!(titles, vec!["Issue 1", "Issue 2", "Issue 3"]);
        assert!(titles.len() <= MAX_RECENT_ISSUES);
    }

    #[test]
    fn star_is_ignored_without_a_repository() {
        let mut panel = RepositorySearchPanel::default();

        assert_eq!(panel.star(), None);
        assert!(panel.star_status().is_none());
    }

    #[rstest]
    fn star_trigger_alone_leaves_the_snapshot_unchanged(
        mut displaying_hello_world: RepositorySearchPanel,
    ) {
        let before = displaying_hello_world.snapshot().clone();
        let request = displaying_hello_world.star();

        assert!(request.is_some());
        assert_eq!(displaying_hello_world.snapshot(), &before);
        assert!(displaying_hello_world.is_starring());
    }

    #[rstest]
    fn second_star_while_pending_is_ignored(mut displaying_hello_world: RepositorySearchPanel) {
        let _first = displaying_hello_world.star();

        assert_eq!(displaying_hello_world.star(), None);
    }

    #[rstest]
    fn successful_star_merges_the_receipt(mut displaying_hello_world: RepositorySearchPanel) {
        let request = displaying_hello_world
            .star()
            .expect("star should be offered");
        let outcome = displaying_hello_world
            .complete_star(request.ticket, Ok(star_receipt("R_1", 1501)));

        assert_eq!(outcome, Reconciliation::Applied);
        assert!(displaying_hello_world.snapshot().viewer_has_starred);
        assert_eq!(displaying_hello_world.snapshot().star_count, Some(1501));
        assert!(!displaying_hello_world.is_star_visible());
        assert_eq!(displaying_hello_world.star(), None);
    }

    #[rstest]
    fn failed_star_keeps_the_snapshot_and_allows_retry(
        mut displaying_hello_world: RepositorySearchPanel,
    ) {
        let request = displaying_hello_world
            .star()
            .expect("star should be offered");
        displaying_hello_world.complete_star(request.ticket, Err(network_error()));

        assert!(!displaying_hello_world.snapshot().viewer_has_starred);
        assert_eq!(displaying_hello_world.snapshot().star_count, Some(1500));
        assert!(displaying_hello_world.star().is_some());
    }

    #[rstest]
    fn star_receipt_for_a_replaced_repository_is_not_merged(
        mut displaying_hello_world: RepositorySearchPanel,
    ) {
        let star = displaying_hello_world
            .star()
            .expect("star should be offered");
        let search = displaying_hello_world.submit_search();
        displaying_hello_world.complete_search(
            search.ticket,
            search.criteria,
            Ok(Some(repository("R_2", "Spoon-Knife", 12))),
        );
        displaying_hello_world.complete_star(star.ticket, Ok(star_receipt("R_1", 1501)));

        assert_eq!(displaying_hello_world.snapshot().name, "Spoon-Knife");
        assert!(!displaying_hello_world.snapshot().viewer_has_starred);
        assert_eq!(displaying_hello_world.snapshot().star_count, Some(12));
    }

    #[rstest]
    fn new_search_clears_a_finished_star_error(mut displaying_hello_world: RepositorySearchPanel) {
        let star = displaying_hello_world
            .star()
            .expect("star should be offered");
        displaying_hello_world.complete_star(star.ticket, Err(network_error()));
        let search = displaying_hello_world.submit_search();
        displaying_hello_world.complete_search(search.ticket, search.criteria, Ok(None));

        assert!(displaying_hello_world.star_status().is_none());
    }
}
