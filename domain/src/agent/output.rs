//! Agent outputs
//!
//! Each agent returns its own fixed-shape record. [`AgentOutput`] is the sum
//! over all five, tagged on the wire by `agentId`.

use super::value_objects::{
    AgentId, BudgetStatus, Confidence, ExperienceRisk, HealthStatus, RiskLevel, SponsorHealth,
};
use crate::event::phase::PhaseId;
use serde::{Deserialize, Serialize};

/// Timeline health reported by the event planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPlannerOutput {
    pub confidence: Confidence,
    pub requires_action: bool,
    pub health_status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_phase: Option<PhaseId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase_progress: Option<u8>,
    /// Title of the task holding up the critical path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocking_issue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocking_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_impact: Option<String>,
    pub recommended_action: String,
}

/// Operational (venue and timing) risk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpsRiskOutput {
    pub confidence: Confidence,
    pub requires_action: bool,
    pub risk_level: RiskLevel,
    pub days_until_event: i64,
    pub risk_description: String,
    pub predicted_impact: String,
    pub recommended_tradeoff: String,
}

/// Spend against plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetGuardianOutput {
    pub confidence: Confidence,
    pub requires_action: bool,
    pub budget_status: BudgetStatus,
    pub current_spend: f64,
    pub total_budget: f64,
    pub burn_rate: f64,
    /// Overrun as `+$amount (pct%)`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_adjustment: Option<String>,
    /// Category proposed for a cut
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_cut: Option<f64>,
}

/// Sponsor portfolio reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsorIntelligenceOutput {
    pub confidence: Confidence,
    pub requires_action: bool,
    pub sponsor_status: SponsorHealth,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor_name: Option<String>,
    pub insight: String,
    pub recommended_action: String,
}

/// Show-day guest flow forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendeeFlowOutput {
    pub confidence: Confidence,
    pub requires_action: bool,
    pub experience_risk: ExperienceRisk,
    /// Registered guests over venue capacity
    pub saturation: f64,
    pub bottleneck_description: String,
    pub recommended_action: String,
}

/// Output of any agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "agentId")]
pub enum AgentOutput {
    #[serde(rename = "event-planner")]
    EventPlanner(EventPlannerOutput),
    #[serde(rename = "ops-risk")]
    OpsRisk(OpsRiskOutput),
    #[serde(rename = "budget-guardian")]
    BudgetGuardian(BudgetGuardianOutput),
    #[serde(rename = "sponsor-intelligence")]
    SponsorIntelligence(SponsorIntelligenceOutput),
    #[serde(rename = "attendee-flow")]
    AttendeeFlow(AttendeeFlowOutput),
}

impl AgentOutput {
    pub fn agent_id(&self) -> AgentId {
        match self {
            AgentOutput::EventPlanner(_) => AgentId::EventPlanner,
            AgentOutput::OpsRisk(_) => AgentId::OpsRisk,
            AgentOutput::BudgetGuardian(_) => AgentId::BudgetGuardian,
            AgentOutput::SponsorIntelligence(_) => AgentId::SponsorIntelligence,
            AgentOutput::AttendeeFlow(_) => AgentId::AttendeeFlow,
        }
    }

    pub fn confidence(&self) -> Confidence {
        match self {
            AgentOutput::EventPlanner(o) => o.confidence,
            AgentOutput::OpsRisk(o) => o.confidence,
            AgentOutput::BudgetGuardian(o) => o.confidence,
            AgentOutput::SponsorIntelligence(o) => o.confidence,
            AgentOutput::AttendeeFlow(o) => o.confidence,
        }
    }

    pub fn requires_action(&self) -> bool {
        match self {
            AgentOutput::EventPlanner(o) => o.requires_action,
            AgentOutput::OpsRisk(o) => o.requires_action,
            AgentOutput::BudgetGuardian(o) => o.requires_action,
            AgentOutput::SponsorIntelligence(o) => o.requires_action,
            AgentOutput::AttendeeFlow(o) => o.requires_action,
        }
    }

    /// High confidence and asking for action: eligible for the executive slot.
    pub fn is_actionable(&self) -> bool {
        self.confidence() == Confidence::High && self.requires_action()
    }

    /// One-line verdict for list views (`red`, `over`, `at_risk`, ...)
    pub fn verdict(&self) -> String {
        match self {
            AgentOutput::EventPlanner(o) => o.health_status.to_string(),
            AgentOutput::OpsRisk(o) => o.risk_level.to_string(),
            AgentOutput::BudgetGuardian(o) => o.budget_status.to_string(),
            AgentOutput::SponsorIntelligence(o) => o.sponsor_status.to_string(),
            AgentOutput::AttendeeFlow(o) => o.experience_risk.to_string(),
        }
    }
}

macro_rules! into_agent_output {
    ($($variant:ident => $ty:ty),*) => {
        $(
            impl From<$ty> for AgentOutput {
                fn from(output: $ty) -> Self {
                    AgentOutput::$variant(output)
                }
            }
        )*
    };
}

into_agent_output!(
    EventPlanner => EventPlannerOutput,
    OpsRisk => OpsRiskOutput,
    BudgetGuardian => BudgetGuardianOutput,
    SponsorIntelligence => SponsorIntelligenceOutput,
    AttendeeFlow => AttendeeFlowOutput
);

#[cfg(test)]
mod tests {
    use super::*;

    fn flow(confidence: Confidence, requires_action: bool) -> AgentOutput {
        AttendeeFlowOutput {
            confidence,
            requires_action,
            experience_risk: ExperienceRisk::High,
            saturation: 1.2,
            bottleneck_description: "Entrance queue".to_string(),
            recommended_action: "Open a second door".to_string(),
        }
        .into()
    }

    #[test]
    fn test_actionable_requires_high_and_action() {
        assert!(flow(Confidence::High, true).is_actionable());
        assert!(!flow(Confidence::Medium, true).is_actionable());
        assert!(!flow(Confidence::High, false).is_actionable());
    }

    #[test]
    fn test_serialized_with_agent_id_tag() {
        let value = serde_json::to_value(flow(Confidence::High, true)).unwrap();
        assert_eq!(value["agentId"], "attendee-flow");
        assert_eq!(value["experience_risk"], "high");
        assert_eq!(value["requires_action"], true);
    }

    #[test]
    fn test_deserialize_tagged_output() {
        let json = r#"{
            "agentId": "ops-risk",
            "confidence": "high",
            "requires_action": true,
            "risk_level": "red",
            "days_until_event": 45,
            "risk_description": "d",
            "predicted_impact": "i",
            "recommended_tradeoff": "t"
        }"#;
        let output: AgentOutput = serde_json::from_str(json).unwrap();
        assert_eq!(output.agent_id(), AgentId::OpsRisk);
        assert_eq!(output.verdict(), "red");
    }
}
