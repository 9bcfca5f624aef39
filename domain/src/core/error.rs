//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown intent: {0}")]
    UnknownIntent(String),

    #[error("Invalid event {id}: {reason}")]
    InvalidEvent { id: String, reason: String },

    #[error("Invalid budget category {id}: {reason}")]
    InvalidBudgetCategory { id: String, reason: String },

    #[error("Invalid phase {phase}: {reason}")]
    InvalidPhase { phase: String, reason: String },
}

impl DomainError {
    /// Check if this error came from an intent string that matched no agent
    pub fn is_unknown_intent(&self) -> bool {
        matches!(self, DomainError::UnknownIntent(_))
    }
}
