//! Request triggers, async commands, and completion handlers.
//!
//! Triggers ask the panel for a ticketed request, then return a command that
//! runs it against the gateway on the Tokio runtime. The command measures
//! latency, records telemetry, and reports back with a completion message.

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use bubbletea_rs::Cmd;

use super::SearchApp;
use crate::github::error::GatewayError;
use crate::github::models::{RepositorySnapshot, SearchCriteria, StarReceipt};
use crate::github::queries::Operation;
use crate::telemetry::{TelemetryEvent, TelemetrySink};
use crate::tui::messages::AppMsg;
use crate::tui::state::{Reconciliation, RequestTicket, SearchRequest, StarRequest};

impl SearchApp {
    /// Dispatches request triggers and completions to their handlers.
    pub(super) fn handle_request_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SubmitSearch => Some(self.handle_submit_search()),
            AppMsg::StarRequested => self.handle_star_requested(),
            AppMsg::ViewerLoaded(result) => {
                self.viewer_panel.complete(result.clone());
                None
            }
            AppMsg::SearchCompleted {
                ticket,
                criteria,
                result,
            } => {
                self.handle_search_completed(*ticket, criteria, result);
                None
            }
            AppMsg::StarCompleted { ticket, result } => {
                self.handle_star_completed(*ticket, result);
                None
            }
            _ => {
                // Unreachable: caller filters to request messages.
                None
            }
        }
    }

    /// Creates the command that loads the viewer identity.
    ///
    /// Issued once from `Model::init`.
    #[must_use]
    pub fn viewer_cmd(&self) -> Cmd {
        let gateway = Arc::clone(&self.gateway);
        let telemetry = Arc::clone(&self.telemetry);
        Box::pin(async move {
            let started = Instant::now();
            let result = gateway.viewer().await;
            record_completion(telemetry.as_ref(), Operation::GetViewer, started, &result);
            Some(Box::new(AppMsg::ViewerLoaded(result)) as Box<dyn Any + Send>)
        })
    }

    /// Submits the search form, superseding any in-flight search.
    fn handle_submit_search(&mut self) -> Cmd {
        let SearchRequest { ticket, criteria } = self.search_panel.submit_search();
        tracing::debug!(
            %ticket,
            org = %criteria.organization_name,
            repo = %criteria.repository_name,
            "submitting repository search"
        );

        let gateway = Arc::clone(&self.gateway);
        let telemetry = Arc::clone(&self.telemetry);
        Box::pin(async move {
            let started = Instant::now();
            let result = gateway.repository(&criteria).await;
            record_completion(telemetry.as_ref(), Operation::GetRepo, started, &result);
            Some(Box::new(AppMsg::SearchCompleted {
                ticket,
                criteria,
                result,
            }) as Box<dyn Any + Send>)
        })
    }

    /// Stars the displayed repository when the panel allows it.
    fn handle_star_requested(&mut self) -> Option<Cmd> {
        let Some(StarRequest {
            ticket,
            repository_id,
        }) = self.search_panel.star()
        else {
            tracing::debug!("star ignored: no unstarred repository or star already pending");
            return None;
        };

        let gateway = Arc::clone(&self.gateway);
        let telemetry = Arc::clone(&self.telemetry);
        Some(Box::pin(async move {
            let started = Instant::now();
            let result = gateway.add_star(&repository_id).await;
            record_completion(telemetry.as_ref(), Operation::AddStar, started, &result);
            Some(Box::new(AppMsg::StarCompleted { ticket, result }) as Box<dyn Any + Send>)
        }))
    }

    fn handle_search_completed(
        &mut self,
        ticket: RequestTicket,
        criteria: &SearchCriteria,
        result: &Result<Option<RepositorySnapshot>, GatewayError>,
    ) {
        if let Err(error) = result {
            tracing::warn!(%ticket, %error, "repository search failed");
        }
        let reconciliation =
            self.search_panel
                .complete_search(ticket, criteria.clone(), result.clone());
        self.note_reconciliation(Operation::GetRepo, ticket, reconciliation);
    }

    fn handle_star_completed(
        &mut self,
        ticket: RequestTicket,
        result: &Result<StarReceipt, GatewayError>,
    ) {
        if let Err(error) = result {
            tracing::warn!(%ticket, %error, "star mutation failed");
        }
        let reconciliation = self.search_panel.complete_star(ticket, result.clone());
        self.note_reconciliation(Operation::AddStar, ticket, reconciliation);
    }

    fn note_reconciliation(
        &self,
        operation: Operation,
        ticket: RequestTicket,
        reconciliation: Reconciliation,
    ) {
        let Reconciliation::Stale { latest } = reconciliation else {
            return;
        };
        tracing::debug!(%operation, %ticket, latest, "discarding superseded response");
        self.telemetry.record(TelemetryEvent::StaleResponseDiscarded {
            operation: operation.name().to_owned(),
            ticket: ticket.get(),
            latest_ticket: latest,
        });
    }
}

fn record_completion<T>(
    telemetry: &dyn TelemetrySink,
    operation: Operation,
    started: Instant,
    result: &Result<T, GatewayError>,
) {
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    telemetry.record(TelemetryEvent::RequestCompleted {
        operation: operation.name().to_owned(),
        latency_ms,
        succeeded: result.is_ok(),
    });
}
