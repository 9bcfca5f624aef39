//! Executive insight: the one judgment surfaced prominently

use crate::agent::output::AgentOutput;
use crate::agent::value_objects::{AgentId, BudgetStatus, RiskLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Broad kind of an insight, used by the UI for iconography
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    Timeline,
    Risk,
    Budget,
    Sponsor,
    Experience,
}

/// Follow-up the UI can offer as a one-click action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionPayload {
    OpenTask { task_id: String },
    BookVenue,
    ReallocateBudget { category: String, amount: f64 },
    ContactSponsor { sponsor_id: String },
    OpenFloorPlan,
}

/// A single normalized insight derived from one agent output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveInsight {
    pub id: String,
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub executive_summary: String,
    pub why_now: String,
    pub recommended_action: String,
    pub source_agent: AgentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_payload: Option<ActionPayload>,
}

impl ExecutiveInsight {
    /// Format an agent output for display.
    ///
    /// The id is derived from the source agent and `generated_at`, so the same
    /// output at the same instant formats identically.
    pub fn from_output(output: &AgentOutput, generated_at: DateTime<Utc>) -> Self {
        let source_agent = output.agent_id();
        let id = format!("{}-{}", source_agent, generated_at.timestamp_millis());

        let (insight_type, executive_summary, why_now, recommended_action, action_payload) =
            match output {
                AgentOutput::EventPlanner(o) => (
                    InsightType::Timeline,
                    match &o.blocking_issue {
                        Some(issue) => format!("Critical path blocked: {}", issue),
                        None => format!("Timeline is {}", o.health_status),
                    },
                    o.predicted_impact
                        .clone()
                        .unwrap_or_else(|| "Phase progress is behind plan".to_string()),
                    o.recommended_action.clone(),
                    o.blocking_task_id
                        .clone()
                        .map(|task_id| ActionPayload::OpenTask { task_id }),
                ),
                AgentOutput::OpsRisk(o) => (
                    InsightType::Risk,
                    o.risk_description.clone(),
                    format!(
                        "{} ({} days to showtime)",
                        o.predicted_impact, o.days_until_event
                    ),
                    o.recommended_tradeoff.clone(),
                    (o.risk_level == RiskLevel::Red).then_some(ActionPayload::BookVenue),
                ),
                AgentOutput::BudgetGuardian(o) => (
                    InsightType::Budget,
                    match (o.budget_status, &o.variance) {
                        (BudgetStatus::Over, Some(variance)) => {
                            format!("Budget overrun of {}", variance)
                        }
                        _ => format!("Budget {}", o.budget_status),
                    },
                    format!(
                        "{:.0}% of the ${:.0} budget is already spent",
                        o.burn_rate * 100.0,
                        o.total_budget
                    ),
                    o.recommended_adjustment
                        .clone()
                        .unwrap_or_else(|| "Review the spend forecast".to_string()),
                    match (&o.target_category, o.suggested_cut) {
                        (Some(category), Some(amount)) => Some(ActionPayload::ReallocateBudget {
                            category: category.clone(),
                            amount,
                        }),
                        _ => None,
                    },
                ),
                AgentOutput::SponsorIntelligence(o) => (
                    InsightType::Sponsor,
                    o.insight.clone(),
                    "Platinum commitments anchor the show budget; an unsigned deal blocks activation planning"
                        .to_string(),
                    o.recommended_action.clone(),
                    o.sponsor_id
                        .clone()
                        .map(|sponsor_id| ActionPayload::ContactSponsor { sponsor_id }),
                ),
                AgentOutput::AttendeeFlow(o) => (
                    InsightType::Experience,
                    o.bottleneck_description.clone(),
                    format!(
                        "Registrations stand at {:.0}% of venue capacity",
                        o.saturation * 100.0
                    ),
                    o.recommended_action.clone(),
                    Some(ActionPayload::OpenFloorPlan),
                ),
            };

        Self {
            id,
            insight_type,
            executive_summary,
            why_now,
            recommended_action,
            source_agent,
            action_payload,
        }
    }
}
