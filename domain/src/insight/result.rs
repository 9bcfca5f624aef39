//! Orchestration result value objects

use super::executive::ExecutiveInsight;
use super::intent::Intent;
use crate::agent::output::AgentOutput;
use crate::agent::value_objects::AgentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An agent slot that produced no output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentFailure {
    pub agent: AgentId,
    pub intent: Intent,
    pub error: String,
}

impl AgentFailure {
    pub fn new(intent: Intent, error: impl Into<String>) -> Self {
        Self {
            agent: intent.agent(),
            intent,
            error: error.into(),
        }
    }
}

/// Everything one orchestration call produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestrationResult {
    /// The single prominent insight, or `None` when nothing is both
    /// high-confidence and actionable
    pub executive_insight: Option<ExecutiveInsight>,
    /// Every output that came back, in orchestration order
    pub all_insights: Vec<AgentOutput>,
    /// Agents whose dispatch failed; their voice is missing from `all_insights`
    #[serde(default)]
    pub failures: Vec<AgentFailure>,
    pub generated_at: DateTime<Utc>,
}

impl OrchestrationResult {
    /// No executive insight: the "systems nominal" state.
    ///
    /// Also true when every agent failed; check [`Self::is_degraded`] to tell
    /// the two apart.
    pub fn is_nominal(&self) -> bool {
        self.executive_insight.is_none()
    }

    pub fn is_degraded(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn output_for(&self, agent: AgentId) -> Option<&AgentOutput> {
        self.all_insights.iter().find(|o| o.agent_id() == agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_total_failure_is_nominal_but_degraded() {
        let result = OrchestrationResult {
            executive_insight: None,
            all_insights: vec![],
            failures: Intent::ALL
                .into_iter()
                .map(|i| AgentFailure::new(i, "boom"))
                .collect(),
            generated_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        };
        assert!(result.is_nominal());
        assert!(result.is_degraded());
        assert!(result.output_for(AgentId::OpsRisk).is_none());
    }

    #[test]
    fn test_failure_records_agent_for_intent() {
        let failure = AgentFailure::new(Intent::AuditBudget, "timeout");
        assert_eq!(failure.agent, AgentId::BudgetGuardian);
    }
}
