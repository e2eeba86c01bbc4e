//! Request lifecycle status and tickets for superseded-response detection.
//!
//! Every triggered request receives a [`RequestTicket`] from a
//! [`TicketCounter`]. Completions are matched against the latest ticket so a
//! slow response can never overwrite state produced by a newer trigger.

use std::fmt;

use crate::github::error::GatewayError;

/// Lifecycle of a single request.
///
/// A request that has never been triggered has no status at all; holders
/// store an `Option<RequestStatus<T>>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestStatus<T> {
    /// The request is in flight.
    Pending,
    /// The request failed.
    Failed(GatewayError),
    /// The request completed with a payload.
    Succeeded(T),
}

impl<T> RequestStatus<T> {
    /// Returns `true` while the request is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns the failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&GatewayError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Builds the terminal status for a completed request.
    pub fn from_result(result: Result<T, GatewayError>) -> Self {
        match result {
            Ok(value) => Self::Succeeded(value),
            Err(error) => Self::Failed(error),
        }
    }
}

/// Identifier issued when a request is triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

/// Issues monotonically increasing tickets for one kind of request.
#[derive(Debug, Clone, Default)]
pub struct TicketCounter {
    latest: u64,
}

impl TicketCounter {
    /// Issues the next ticket, superseding every earlier one.
    pub const fn issue(&mut self) -> RequestTicket {
        self.latest = self.latest.saturating_add(1);
        RequestTicket(self.latest)
    }

    /// Returns `true` when `ticket` is the most recently issued ticket.
    #[must_use]
    pub const fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest != 0 && ticket.0 == self.latest
    }

    /// Returns the most recently issued ticket value (0 before the first).
    #[must_use]
    pub const fn latest(&self) -> u64 {
        self.latest
    }
}
