//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod dispatch;
pub mod generate_insights;
pub mod handlers;
