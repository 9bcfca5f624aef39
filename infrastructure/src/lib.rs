//! Infrastructure layer for fashionos-insights
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the system clock, tokio-timed latency, and the JSONL
//! insight log. It also owns configuration loading and the scenario boundary
//! where event data enters the system.

pub mod clock;
pub mod config;
pub mod latency;
pub mod logging;
pub mod scenario;

// Re-export commonly used types
pub use clock::SystemClock;
pub use config::{ConfigLoader, ConfigSource, FileConfig};
pub use latency::SimulatedLatency;
pub use logging::JsonlInsightLogger;
pub use scenario::{ScenarioError, ScenarioLoader, demo_scenario};
