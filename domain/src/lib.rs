//! Domain layer for fashionos-insights
//!
//! This crate contains the event-planning entities, the five rule-based
//! agents, and the executive insight selection policy. It has no dependencies
//! on infrastructure or presentation concerns and never reads the clock.
//!
//! # Core Concepts
//!
//! ## Agents
//!
//! Pure analyzers over a slice of event data. Each returns a judgment with a
//! [`Confidence`] and a `requires_action` flag.
//!
//! ## Executive Insight
//!
//! The single most important judgment among the actionable ones, chosen by a
//! declarative [`SelectionPolicy`]. When no output is both high-confidence and
//! actionable, no insight is produced (the silence rule).

pub mod agent;
pub mod config;
pub mod core;
pub mod event;
pub mod insight;
pub mod util;

// Re-export commonly used types
pub use agent::{
    context::{AgentContext, InsightInput},
    output::{
        AgentOutput, AttendeeFlowOutput, BudgetGuardianOutput, EventPlannerOutput, OpsRiskOutput,
        SponsorIntelligenceOutput,
    },
    thresholds::AgentThresholds,
    value_objects::{
        AgentId, BudgetStatus, Confidence, ExperienceRisk, HealthStatus, RiskLevel, SponsorHealth,
    },
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, model::Model};
pub use event::{
    budget::BudgetCategory,
    entities::{BookingStatus, Event, EventStatus, VenueBooking},
    phase::{DateRange, PhaseId, PhaseStatus, WorkflowPhase},
    sponsor::{Sponsor, SponsorStatus, SponsorTier},
    task::{Task, TaskCategory, TaskPriority, TaskStatus},
};
pub use insight::{
    executive::{ActionPayload, ExecutiveInsight, InsightType},
    intent::Intent,
    result::{AgentFailure, OrchestrationResult},
    selection::{PriorityRule, Selection, SelectionPolicy, SelectionReason, actionable},
};
