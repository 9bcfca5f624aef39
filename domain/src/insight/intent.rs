//! Dispatch intents

use crate::agent::value_objects::AgentId;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// What a caller asks the dispatcher to do. Each intent maps to exactly one
/// agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    PlanEvent,
    AnalyzeRisk,
    AuditBudget,
    EnrichSponsor,
    ForecastFlow,
}

impl Intent {
    /// All intents in orchestration order: planner, risk, budget, sponsor, flow.
    pub const ALL: [Intent; 5] = [
        Intent::PlanEvent,
        Intent::AnalyzeRisk,
        Intent::AuditBudget,
        Intent::EnrichSponsor,
        Intent::ForecastFlow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::PlanEvent => "plan_event",
            Intent::AnalyzeRisk => "analyze_risk",
            Intent::AuditBudget => "audit_budget",
            Intent::EnrichSponsor => "enrich_sponsor",
            Intent::ForecastFlow => "forecast_flow",
        }
    }

    /// The agent this intent is answered by
    pub fn agent(&self) -> AgentId {
        match self {
            Intent::PlanEvent => AgentId::EventPlanner,
            Intent::AnalyzeRisk => AgentId::OpsRisk,
            Intent::AuditBudget => AgentId::BudgetGuardian,
            Intent::EnrichSponsor => AgentId::SponsorIntelligence,
            Intent::ForecastFlow => AgentId::AttendeeFlow,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Intent {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| DomainError::UnknownIntent(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_intents() {
        assert_eq!("analyze_risk".parse::<Intent>().unwrap(), Intent::AnalyzeRisk);
        assert_eq!("forecast_flow".parse::<Intent>().unwrap(), Intent::ForecastFlow);
    }

    #[test]
    fn test_parse_is_exact_match() {
        let err = "Analyze_Risk".parse::<Intent>().unwrap_err();
        assert!(err.is_unknown_intent());
        assert!("".parse::<Intent>().is_err());
    }

    #[test]
    fn test_each_agent_has_one_intent() {
        let agents: Vec<AgentId> = Intent::ALL.iter().map(Intent::agent).collect();
        assert_eq!(
            agents,
            vec![
                AgentId::EventPlanner,
                AgentId::OpsRisk,
                AgentId::BudgetGuardian,
                AgentId::SponsorIntelligence,
                AgentId::AttendeeFlow,
            ]
        );
    }
}
