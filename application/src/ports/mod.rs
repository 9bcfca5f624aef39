//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod clock;
pub mod insight_logger;
pub mod latency;
pub mod progress;
