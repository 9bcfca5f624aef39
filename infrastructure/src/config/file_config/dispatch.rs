//! Dispatch configuration from TOML (`[dispatch]` section)

use fashionos_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};

/// Dispatches slower than this are almost certainly a typo
const MAX_LATENCY_MS: u64 = 60_000;

/// Raw dispatch configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDispatchConfig {
    /// Model tag sent with every dispatch (`gemini-flash`, `gemini-pro`, or custom)
    pub model: Model,
    /// Simulated round trip for flash models
    pub flash_latency_ms: u64,
    /// Simulated round trip for every other model
    pub standard_latency_ms: u64,
    /// When false, dispatches answer immediately
    pub simulate_latency: bool,
}

impl Default for FileDispatchConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            flash_latency_ms: 400,
            standard_latency_ms: 1500,
            simulate_latency: true,
        }
    }
}

impl FileDispatchConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let defaults = Self::default();

        for (field, value) in [
            ("dispatch.flash_latency_ms", self.flash_latency_ms),
            ("dispatch.standard_latency_ms", self.standard_latency_ms),
        ] {
            if value > MAX_LATENCY_MS {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::OutOfRange {
                        field: field.to_string(),
                    },
                    format!("{}: {}ms is longer than a minute", field, value),
                ));
            }
        }

        if !self.simulate_latency
            && (self.flash_latency_ms != defaults.flash_latency_ms
                || self.standard_latency_ms != defaults.standard_latency_ms)
        {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::IgnoredSetting {
                    field: "dispatch.*_latency_ms".to_string(),
                },
                "latency values are set but dispatch.simulate_latency is false",
            ));
        }

        issues
    }
}
