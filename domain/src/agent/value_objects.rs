//! Agent value objects - identifiers and judgment levels shared by all agents.
//!
//! # Identity
//! - [`AgentId`] - Which of the five rule-based agents produced an output
//!
//! # Judgments
//! - [`Confidence`] - How much the agent trusts its own reading
//! - [`HealthStatus`], [`RiskLevel`], [`BudgetStatus`], [`SponsorHealth`],
//!   [`ExperienceRisk`] - Per-agent verdict scales

use serde::{Deserialize, Serialize};

/// Identifier of a rule-based agent.
///
/// Serialized in kebab-case (`event-planner`), which is also the
/// `source_agent` string on an executive insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentId {
    EventPlanner,
    OpsRisk,
    BudgetGuardian,
    SponsorIntelligence,
    AttendeeFlow,
}

impl AgentId {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentId::EventPlanner => "event-planner",
            AgentId::OpsRisk => "ops-risk",
            AgentId::BudgetGuardian => "budget-guardian",
            AgentId::SponsorIntelligence => "sponsor-intelligence",
            AgentId::AttendeeFlow => "attendee-flow",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AgentId::EventPlanner => "Event Planner",
            AgentId::OpsRisk => "Ops Risk",
            AgentId::BudgetGuardian => "Budget Guardian",
            AgentId::SponsorIntelligence => "Sponsor Intelligence",
            AgentId::AttendeeFlow => "Attendee Flow",
        }
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Agent self-assessed confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

/// Traffic-light health of the event timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Green,
    Amber,
    Red,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Green => "green",
            HealthStatus::Amber => "amber",
            HealthStatus::Red => "red",
        }
    }
}

/// Operational risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Green,
    Amber,
    Red,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Green => "green",
            RiskLevel::Amber => "amber",
            RiskLevel::Red => "red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OnTrack,
    AtRisk,
    Over,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::OnTrack => "on_track",
            BudgetStatus::AtRisk => "at_risk",
            BudgetStatus::Over => "over",
        }
    }
}

/// Health of the sponsor portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SponsorHealth {
    Active,
    Pending,
    AtRisk,
}

impl SponsorHealth {
    pub fn as_str(&self) -> &'static str {
        match self {
            SponsorHealth::Active => "active",
            SponsorHealth::Pending => "pending",
            SponsorHealth::AtRisk => "at_risk",
        }
    }
}

/// Guest experience risk on show day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceRisk {
    Low,
    Medium,
    High,
}

impl ExperienceRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceRisk::Low => "low",
            ExperienceRisk::Medium => "medium",
            ExperienceRisk::High => "high",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.pad(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(
    Confidence,
    HealthStatus,
    RiskLevel,
    BudgetStatus,
    SponsorHealth,
    ExperienceRisk
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_id_serializes_kebab_case() {
        let json = serde_json::to_string(&AgentId::BudgetGuardian).unwrap();
        assert_eq!(json, "\"budget-guardian\"");
        let back: AgentId = serde_json::from_str("\"sponsor-intelligence\"").unwrap();
        assert_eq!(back, AgentId::SponsorIntelligence);
    }

    #[test]
    fn test_agent_id_as_str_matches_serde() {
        for id in [
            AgentId::EventPlanner,
            AgentId::OpsRisk,
            AgentId::BudgetGuardian,
            AgentId::SponsorIntelligence,
            AgentId::AttendeeFlow,
        ] {
            assert_eq!(
                serde_json::to_string(&id).unwrap(),
                format!("\"{}\"", id.as_str())
            );
        }
    }

    #[test]
    fn test_verdict_as_str_matches_serde() {
        fn wire<T: Serialize>(value: T) -> String {
            serde_json::to_value(value).unwrap().as_str().unwrap().to_string()
        }

        for h in [HealthStatus::Green, HealthStatus::Amber, HealthStatus::Red] {
            assert_eq!(wire(h), h.as_str());
        }
        for r in [RiskLevel::Green, RiskLevel::Amber, RiskLevel::Red] {
            assert_eq!(wire(r), r.as_str());
        }
        for b in [BudgetStatus::OnTrack, BudgetStatus::AtRisk, BudgetStatus::Over] {
            assert_eq!(wire(b), b.as_str());
        }
        for s in [SponsorHealth::Active, SponsorHealth::Pending, SponsorHealth::AtRisk] {
            assert_eq!(wire(s), s.as_str());
        }
        for e in [ExperienceRisk::Low, ExperienceRisk::Medium, ExperienceRisk::High] {
            assert_eq!(wire(e), e.as_str());
        }
        for c in [Confidence::High, Confidence::Medium, Confidence::Low] {
            assert_eq!(wire(c), c.as_str());
        }
    }

    #[test]
    fn test_display_uses_wire_names() {
        assert_eq!(BudgetStatus::AtRisk.to_string(), "at_risk");
        assert_eq!(HealthStatus::Amber.to_string(), "amber");
        assert_eq!(Confidence::High.to_string(), "high");
        assert_eq!(SponsorHealth::AtRisk.to_string(), "at_risk");
        assert_eq!(format!("{:>6}", RiskLevel::Red), "   red");
    }
}
