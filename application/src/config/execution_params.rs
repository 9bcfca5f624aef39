//! Execution parameters for one orchestration run.

use fashionos_domain::{AgentThresholds, Model};

/// Controls how the orchestration use case dispatches its agents.
///
/// # Fields
///
/// - `model`: nominal model tag on every dispatch; decides the latency class
/// - `thresholds`: numeric cut-offs handed to the agent handlers
#[derive(Debug, Clone, Default)]
pub struct ExecutionParams {
    pub model: Model,
    pub thresholds: AgentThresholds,
}

impl ExecutionParams {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_thresholds(mut self, thresholds: AgentThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_flash_and_default_thresholds() {
        let params = ExecutionParams::default();
        assert_eq!(params.model, Model::GeminiFlash);
        assert_eq!(params.thresholds, AgentThresholds::default());
    }

    #[test]
    fn test_builders() {
        let params = ExecutionParams::default().with_model(Model::GeminiPro);
        assert!(!params.model.is_flash());
    }
}
