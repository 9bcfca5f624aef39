//! Application-level configuration.
//!
//! - [`ExecutionParams`]: model tag and agent thresholds for a run

pub mod execution_params;

pub use execution_params::ExecutionParams;
