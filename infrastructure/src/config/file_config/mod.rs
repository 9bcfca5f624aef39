//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod dispatch;
mod log;
mod output;
mod thresholds;

pub use dispatch::FileDispatchConfig;
pub use log::FileLogConfig;
pub use output::FileOutputConfig;

use fashionos_application::ExecutionParams;
use fashionos_domain::{AgentThresholds, ConfigIssue};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model tag and latency simulation
    pub dispatch: FileDispatchConfig,
    /// Agent cut-offs
    pub thresholds: AgentThresholds,
    /// Output settings
    pub output: FileOutputConfig,
    /// Structured insight log settings
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. Errors mean the
    /// agents would misjudge every event; warnings are settings that have no
    /// effect.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.dispatch.validate();
        issues.extend(thresholds::validate(&self.thresholds));
        issues
    }

    /// Parameters for the orchestration use case
    pub fn execution_params(&self) -> ExecutionParams {
        ExecutionParams::default()
            .with_model(self.dispatch.model.clone())
            .with_thresholds(self.thresholds.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fashionos_domain::{Model, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[dispatch]
model = "gemini-pro"
standard_latency_ms = 900

[thresholds]
venue_capacity = 800
burn_rate_warning = 0.75

[output]
format = "full"
color = false

[log]
insight_log = "logs/insights.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.dispatch.model, Model::GeminiPro);
        assert_eq!(config.dispatch.standard_latency_ms, 900);
        assert_eq!(config.dispatch.flash_latency_ms, 400);
        assert_eq!(config.thresholds.venue_capacity, 800);
        assert_eq!(config.thresholds.burn_rate_warning, 0.75);
        assert_eq!(config.thresholds.venue_lead_days, 60);
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert_eq!(
            config.log.insight_log.as_deref(),
            Some(std::path::Path::new("logs/insights.jsonl"))
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[thresholds]\nimminent_days = 10\n").unwrap();
        assert_eq!(config.thresholds.imminent_days, 10);
        assert_eq!(config.dispatch, FileDispatchConfig::default());
        assert!(config.output.color);
        assert!(config.log.insight_log.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let config: FileConfig = toml::from_str(
            r#"
[dispatch]
simulate_latency = false
flash_latency_ms = 10

[thresholds]
venue_capacity = 0
medium_saturation = 1.5
"#,
        )
        .unwrap();

        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 2);
    }

    #[test]
    fn test_execution_params_carry_model_and_thresholds() {
        let mut config = FileConfig::default();
        config.dispatch.model = Model::GeminiPro;
        config.thresholds.venue_capacity = 750;

        let params = config.execution_params();
        assert_eq!(params.model, Model::GeminiPro);
        assert_eq!(params.thresholds.venue_capacity, 750);
    }
}
