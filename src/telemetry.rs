//! Application telemetry events and sinks.
//!
//! Stargazer records request latency and discarded stale responses so the
//! reconciliation behaviour can be observed while debugging. Nothing is
//! transmitted anywhere.

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Stargazer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A GraphQL request completed, successfully or not.
    RequestCompleted {
        /// GraphQL operation name (e.g. `GetRepo`).
        operation: String,
        /// Wall-clock latency of the request in milliseconds.
        latency_ms: u64,
        /// Whether the gateway returned a successful result.
        succeeded: bool,
    },
    /// A completion arrived for a request that a newer trigger superseded.
    StaleResponseDiscarded {
        /// GraphQL operation name.
        operation: String,
        /// Ticket carried by the discarded completion.
        ticket: u64,
        /// Ticket of the most recently issued request.
        latest_ticket: u64,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Forwards telemetry events to `tracing` as JSON payloads.
///
/// The terminal owns stdout and stderr while the TUI runs, so events go
/// through whatever subscriber the host installs instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        tracing::info!(target: "stargazer::telemetry", event = %serialised);
    }
}

/// Telemetry helpers for tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the recorded events.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}
