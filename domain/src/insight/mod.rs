//! Insight orchestration domain: intents, selection, and results.
//!
//! - [`intent::Intent`]: dispatch verbs, one per agent
//! - [`selection::SelectionPolicy`]: ordered priority table
//! - [`executive::ExecutiveInsight`]: the single surfaced judgment
//! - [`result::OrchestrationResult`]: everything one call produces

pub mod executive;
pub mod intent;
pub mod result;
pub mod selection;
