//! Simulated model latency on the tokio timer

use async_trait::async_trait;
use fashionos_application::LatencySimulator;
use fashionos_domain::Model;
use std::time::Duration;
use tracing::trace;

/// Sleeps a fixed time per latency class: flash models are quick, the rest
/// are slow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    flash: Duration,
    standard: Duration,
}

impl SimulatedLatency {
    pub fn new(flash: Duration, standard: Duration) -> Self {
        Self { flash, standard }
    }

    pub fn from_millis(flash_ms: u64, standard_ms: u64) -> Self {
        Self::new(
            Duration::from_millis(flash_ms),
            Duration::from_millis(standard_ms),
        )
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::from_millis(400, 1500)
    }
}

#[async_trait]
impl LatencySimulator for SimulatedLatency {
    fn latency_for(&self, model: &Model) -> Duration {
        if model.is_flash() {
            self.flash
        } else {
            self.standard
        }
    }

    async fn delay(&self, model: &Model) {
        let wait = self.latency_for(model);
        trace!("Simulating {:?} round trip for {}", wait, model);
        tokio::time::sleep(wait).await;
    }
}
