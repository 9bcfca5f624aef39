//! Executive insight selection
//!
//! Selection is an ordered table of rules. The first rule matching any
//! actionable output wins; if none match, the first actionable output in
//! orchestration order is taken. Ordering is by position in the table, not by
//! severity or score.
//!
//! # Example
//!
//! ```
//! use fashionos_domain::insight::selection::SelectionPolicy;
//!
//! let policy = SelectionPolicy::default();
//! assert_eq!(policy.rules().len(), 3);
//! assert!(policy.select(&[]).is_none());
//! ```

use crate::agent::output::AgentOutput;
use crate::agent::value_objects::{AgentId, BudgetStatus, HealthStatus, RiskLevel};

/// One row of the priority table
#[derive(Debug, Clone)]
pub struct PriorityRule {
    pub name: &'static str,
    pub agent: AgentId,
    predicate: fn(&AgentOutput) -> bool,
}

impl PriorityRule {
    pub fn new(name: &'static str, agent: AgentId, predicate: fn(&AgentOutput) -> bool) -> Self {
        Self {
            name,
            agent,
            predicate,
        }
    }

    pub fn matches(&self, output: &AgentOutput) -> bool {
        output.agent_id() == self.agent && (self.predicate)(output)
    }
}

/// Why an output was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    /// Matched the named rule
    Rule(&'static str),
    /// No rule matched; first actionable output
    Fallback,
}

impl std::fmt::Display for SelectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionReason::Rule(name) => write!(f, "rule '{}'", name),
            SelectionReason::Fallback => write!(f, "fallback"),
        }
    }
}

/// The chosen output and the reason it was chosen
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub output: &'a AgentOutput,
    pub reason: SelectionReason,
}

/// Ordered priority table for picking the executive insight
#[derive(Debug, Clone)]
pub struct SelectionPolicy {
    rules: Vec<PriorityRule>,
}

impl SelectionPolicy {
    /// A policy with a custom table
    pub fn new(rules: Vec<PriorityRule>) -> Self {
        Self { rules }
    }

    /// A policy with no rules: always the fallback
    pub fn fallback_only() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn rules(&self) -> &[PriorityRule] {
        &self.rules
    }

    /// Append a rule at the lowest priority
    pub fn with_rule(mut self, rule: PriorityRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Pick one output from `actionable`, which must already be filtered and
    /// in orchestration order. Returns `None` only when `actionable` is empty.
    pub fn select<'a>(&self, actionable: &[&'a AgentOutput]) -> Option<Selection<'a>> {
        for rule in &self.rules {
            if let Some(output) = actionable.iter().copied().find(|o| rule.matches(o)) {
                return Some(Selection {
                    output,
                    reason: SelectionReason::Rule(rule.name),
                });
            }
        }

        actionable.first().copied().map(|output| Selection {
            output,
            reason: SelectionReason::Fallback,
        })
    }
}

impl Default for SelectionPolicy {
    /// Planner red, then budget overrun, then ops red.
    fn default() -> Self {
        Self::new(vec![
            PriorityRule::new("planner_red", AgentId::EventPlanner, |o| {
                matches!(o, AgentOutput::EventPlanner(p)
                    if p.requires_action && p.health_status == HealthStatus::Red)
            }),
            PriorityRule::new("budget_over", AgentId::BudgetGuardian, |o| {
                matches!(o, AgentOutput::BudgetGuardian(b)
                    if b.requires_action && b.budget_status == BudgetStatus::Over)
            }),
            PriorityRule::new("ops_red", AgentId::OpsRisk, |o| {
                matches!(o, AgentOutput::OpsRisk(r)
                    if r.requires_action && r.risk_level == RiskLevel::Red)
            }),
        ])
    }
}

/// Outputs eligible for the executive slot, in their original order
pub fn actionable(outputs: &[AgentOutput]) -> Vec<&AgentOutput> {
    outputs.iter().filter(|o| o.is_actionable()).collect()
}
