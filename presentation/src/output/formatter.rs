//! Output formatter trait

use fashionos_domain::{OrchestrationResult, OutputFormat};

/// Trait for formatting orchestration results
pub trait OutputFormatter {
    /// Executive insight plus every agent report
    fn format_full(&self, result: &OrchestrationResult) -> String;

    /// Executive insight only (concise output)
    fn format_executive(&self, result: &OrchestrationResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &OrchestrationResult) -> String;

    /// Dispatch on the configured format
    fn render(&self, result: &OrchestrationResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format_full(result),
            OutputFormat::Executive => self.format_executive(result),
            OutputFormat::Json => self.format_json(result),
        }
    }
}
