//! Port for structured insight logging.
//!
//! Defines the [`InsightLogger`] trait for recording orchestration events
//! (dispatch results, silence-rule hits, selected insights) to a structured
//! log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable audit trail (JSONL).

use serde_json::Value;

/// A structured orchestration event for logging.
pub struct InsightEvent {
    /// Event type identifier (e.g., "dispatch_complete", "executive_insight").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl InsightEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging orchestration events to a structured log.
///
/// `log` is synchronous and non-fallible; a failing writer must not disturb
/// the orchestration.
pub trait InsightLogger: Send + Sync {
    /// Record an event.
    fn log(&self, event: InsightEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoInsightLogger;

impl InsightLogger for NoInsightLogger {
    fn log(&self, _event: InsightEvent) {}
}
