//! Application layer for fashionos-insights
//!
//! This crate contains the dispatcher, the orchestration use case, port
//! definitions, and execution parameters. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    clock::{Clock, FixedClock},
    insight_logger::{InsightEvent, InsightLogger, NoInsightLogger},
    latency::{LatencySimulator, NoLatency},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::dispatch::{DispatchError, DispatchRequest, DispatchResponse, Dispatcher};
pub use use_cases::generate_insights::GenerateInsightsUseCase;
pub use use_cases::handlers::{IntentHandler, default_handlers};
