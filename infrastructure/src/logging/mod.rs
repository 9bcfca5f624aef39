//! Logging infrastructure: the structured insight log.
//!
//! Provides [`JsonlInsightLogger`], a JSONL file writer that implements the
//! [`InsightLogger`](fashionos_application::InsightLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlInsightLogger;
