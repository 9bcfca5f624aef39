//! Latency port
//!
//! Dispatches model a remote AI call by waiting before they compute. The wait
//! is injected so tests run with no delay and production can sleep on a
//! real timer.

use async_trait::async_trait;
use fashionos_domain::Model;
use std::time::Duration;

/// Waits out the simulated round trip for a model.
///
/// Implementations must not be cancellable from the caller's side beyond
/// dropping the future; there is no timeout.
#[async_trait]
pub trait LatencySimulator: Send + Sync {
    /// How long a dispatch to `model` takes
    fn latency_for(&self, model: &Model) -> Duration;

    /// Wait for the model's latency
    async fn delay(&self, model: &Model);
}

/// Zero-delay simulator for tests and `--no-latency`
pub struct NoLatency;

#[async_trait]
impl LatencySimulator for NoLatency {
    fn latency_for(&self, _model: &Model) -> Duration {
        Duration::ZERO
    }

    async fn delay(&self, _model: &Model) {}
}
