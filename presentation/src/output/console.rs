//! Console output formatter for orchestration results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use fashionos_domain::{AgentOutput, ExecutiveInsight, InsightType, OrchestrationResult};

/// Formats orchestration results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Executive insight plus every agent's report
    pub fn format_full(result: &OrchestrationResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("FashionOS Insights"));
        output.push('\n');

        output.push_str(&Self::section_header("Executive Insight"));
        output.push_str(&Self::executive_block(result));

        output.push_str(&Self::section_header("Agent Reports"));
        for agent_output in &result.all_insights {
            output.push_str(&Self::agent_block(agent_output));
        }

        if !result.failures.is_empty() {
            output.push_str(&Self::section_header("Unavailable Agents"));
            for failure in &result.failures {
                output.push_str(&format!(
                    "  {} {}: {}\n",
                    "x".red(),
                    failure.agent.display_name().bold(),
                    failure.error
                ));
            }
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Generated at:".dimmed(),
            result.generated_at.to_rfc3339()
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Executive insight only, or the nominal banner
    pub fn format_executive(result: &OrchestrationResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Executive Insight ===".cyan().bold()
        ));
        output.push_str(&Self::executive_block(result));

        output
    }

    /// Format as JSON
    pub fn format_json(result: &OrchestrationResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    fn executive_block(result: &OrchestrationResult) -> String {
        let mut output = match &result.executive_insight {
            Some(insight) => Self::insight_block(insight),
            None => format!(
                "{}\n{}\n",
                "All systems nominal.".green().bold(),
                "No agent is both confident and asking for action.".dimmed()
            ),
        };

        if result.is_degraded() {
            output.push_str(&format!(
                "\n{} {} of {} agents did not report; this view may be incomplete.\n",
                "!".yellow().bold(),
                result.failures.len(),
                result.failures.len() + result.all_insights.len()
            ));
        }

        output
    }

    fn insight_block(insight: &ExecutiveInsight) -> String {
        format!(
            "{} {}\n\n{} {}\n{} {}\n\n{} {}\n",
            format!("[{}]", Self::insight_label(insight.insight_type))
                .red()
                .bold(),
            insight.executive_summary.bold(),
            "Why now:".cyan().bold(),
            insight.why_now,
            "Source:".dimmed(),
            insight.source_agent.display_name().dimmed(),
            "Action:".green().bold(),
            insight.recommended_action
        )
    }

    fn agent_block(output: &AgentOutput) -> String {
        let agent = output.agent_id();
        let action = if output.requires_action() {
            "action required".yellow()
        } else {
            "no action".dimmed()
        };

        let mut block = format!(
            "\n{} {} ({} confidence, {})\n",
            format!("── {} ──", agent.display_name()).bold(),
            Self::verdict(output),
            output.confidence(),
            action
        );

        for line in Self::detail_lines(output) {
            block.push_str(&Self::indent(&line, "  "));
            block.push('\n');
        }

        block
    }

    fn detail_lines(output: &AgentOutput) -> Vec<String> {
        match output {
            AgentOutput::EventPlanner(o) => {
                let mut lines = Vec::new();
                if let (Some(phase), Some(progress)) = (o.current_phase, o.phase_progress) {
                    lines.push(format!("Phase: {} ({}%)", phase.display_name(), progress));
                }
                if let Some(issue) = &o.blocking_issue {
                    lines.push(format!("Blocking: {}", issue));
                }
                if let Some(impact) = &o.predicted_impact {
                    lines.push(format!("Impact: {}", impact));
                }
                lines.push(format!("Next: {}", o.recommended_action));
                lines
            }
            AgentOutput::OpsRisk(o) => vec![
                format!("{} days to the show: {}", o.days_until_event, o.risk_description),
                format!("Impact: {}", o.predicted_impact),
                format!("Trade-off: {}", o.recommended_tradeoff),
            ],
            AgentOutput::BudgetGuardian(o) => {
                let mut lines = vec![format!(
                    "Spent ${:.0} of ${:.0} ({:.0}% burn)",
                    o.current_spend,
                    o.total_budget,
                    o.burn_rate * 100.0
                )];
                if let Some(variance) = &o.variance {
                    lines.push(format!("Variance: {}", variance));
                }
                if let Some(adjustment) = &o.recommended_adjustment {
                    lines.push(format!("Next: {}", adjustment));
                }
                lines
            }
            AgentOutput::SponsorIntelligence(o) => vec![
                o.insight.clone(),
                format!("Next: {}", o.recommended_action),
            ],
            AgentOutput::AttendeeFlow(o) => vec![
                format!("Saturation: {:.0}%", o.saturation * 100.0),
                o.bottleneck_description.clone(),
                format!("Next: {}", o.recommended_action),
            ],
        }
    }

    fn verdict(output: &AgentOutput) -> ColoredString {
        let verdict = output.verdict();
        match verdict.as_str() {
            "red" | "over" | "at_risk" | "high" => verdict.red().bold(),
            "amber" | "medium" | "pending" => verdict.yellow().bold(),
            _ => verdict.green().bold(),
        }
    }

    fn insight_label(insight_type: InsightType) -> &'static str {
        match insight_type {
            InsightType::Timeline => "TIMELINE",
            InsightType::Risk => "RISK",
            InsightType::Budget => "BUDGET",
            InsightType::Sponsor => "SPONSOR",
            InsightType::Experience => "EXPERIENCE",
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_full(&self, result: &OrchestrationResult) -> String {
        Self::format_full(result)
    }

    fn format_executive(&self, result: &OrchestrationResult) -> String {
        Self::format_executive(result)
    }

    fn format_json(&self, result: &OrchestrationResult) -> String {
        Self::format_json(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use fashionos_domain::{
        AgentFailure, AttendeeFlowOutput, Confidence, ExperienceRisk, Intent, OutputFormat,
        SponsorHealth, SponsorIntelligenceOutput,
    };

    fn flow_output() -> AgentOutput {
        AttendeeFlowOutput {
            confidence: Confidence::High,
            requires_action: true,
            experience_risk: ExperienceRisk::High,
            saturation: 1.12,
            bottleneck_description: "Entrance will bottleneck".to_string(),
            recommended_action: "Open a second entrance".to_string(),
        }
        .into()
    }

    fn sponsor_output() -> AgentOutput {
        SponsorIntelligenceOutput {
            confidence: Confidence::High,
            requires_action: false,
            sponsor_status: SponsorHealth::Active,
            sponsor_id: None,
            sponsor_name: None,
            insight: "Sponsor pipeline is healthy".to_string(),
            recommended_action: "None required".to_string(),
        }
        .into()
    }

    fn result(with_insight: bool) -> OrchestrationResult {
        let generated_at = Utc.with_ymd_and_hms(2025, 8, 1, 10, 0, 0).unwrap();
        let outputs = vec![sponsor_output(), flow_output()];
        OrchestrationResult {
            executive_insight: with_insight
                .then(|| ExecutiveInsight::from_output(&outputs[1], generated_at)),
            all_insights: outputs,
            failures: vec![],
            generated_at,
        }
    }

    #[test]
    fn test_executive_shows_insight() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_executive(&result(true));
        assert!(text.contains("[EXPERIENCE]"));
        assert!(text.contains("Open a second entrance"));
        assert!(text.contains("Attendee Flow"));
        assert!(!text.contains("nominal"));
    }

    #[test]
    fn test_executive_nominal_banner() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_executive(&result(false));
        assert!(text.contains("All systems nominal."));
        assert!(!text.contains("did not report"));
    }

    #[test]
    fn test_degraded_run_is_flagged() {
        colored::control::set_override(false);
        let mut degraded = result(false);
        degraded.failures.push(AgentFailure::new(Intent::AuditBudget, "timeout"));

        let text = ConsoleFormatter::format_executive(&degraded);
        assert!(text.contains("1 of 3 agents did not report"));

        let full = ConsoleFormatter::format_full(&degraded);
        assert!(full.contains("Unavailable Agents"));
        assert!(full.contains("Budget Guardian: timeout"));
    }

    #[test]
    fn test_full_lists_every_agent() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_full(&result(true));
        assert!(text.contains("── Sponsor Intelligence ──"));
        assert!(text.contains("── Attendee Flow ──"));
        assert!(text.contains("Saturation: 112%"));
        assert!(text.contains("action required"));
    }

    #[test]
    fn test_json_round_trips() {
        let original = result(true);
        let json = ConsoleFormatter.render(&original, OutputFormat::Json);
        let parsed: OrchestrationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
