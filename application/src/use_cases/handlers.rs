//! Intent handlers
//!
//! One handler per agent. The dispatcher looks handlers up by [`Intent`], so
//! adding an agent means adding a handler and registering it; nothing in the
//! dispatcher changes.

use super::dispatch::DispatchError;
use fashionos_domain::agent::{
    attendee_flow, budget_guardian, event_planner, ops_risk, sponsor_intelligence,
};
use fashionos_domain::{AgentContext, AgentOutput, AgentThresholds, Intent};
use std::sync::Arc;

/// Answers one intent by running an agent over the context
pub trait IntentHandler: Send + Sync {
    fn intent(&self) -> Intent;

    fn handle(&self, context: &AgentContext) -> Result<AgentOutput, DispatchError>;
}

/// `plan_event` → event planner
pub struct PlanEventHandler {
    thresholds: Arc<AgentThresholds>,
}

impl IntentHandler for PlanEventHandler {
    fn intent(&self) -> Intent {
        Intent::PlanEvent
    }

    fn handle(&self, context: &AgentContext) -> Result<AgentOutput, DispatchError> {
        let input = context.input();
        Ok(event_planner::analyze(
            context.now(),
            &input.event,
            &input.tasks,
            &input.phases,
            &self.thresholds,
        )
        .into())
    }
}

/// `analyze_risk` → ops risk
pub struct AnalyzeRiskHandler {
    thresholds: Arc<AgentThresholds>,
}

impl IntentHandler for AnalyzeRiskHandler {
    fn intent(&self) -> Intent {
        Intent::AnalyzeRisk
    }

    fn handle(&self, context: &AgentContext) -> Result<AgentOutput, DispatchError> {
        let input = context.input();
        Ok(ops_risk::analyze(
            context.now(),
            &input.event,
            input.venue_booking.as_ref(),
            &self.thresholds,
        )
        .into())
    }
}

/// `audit_budget` → budget guardian
pub struct AuditBudgetHandler {
    thresholds: Arc<AgentThresholds>,
}

impl IntentHandler for AuditBudgetHandler {
    fn intent(&self) -> Intent {
        Intent::AuditBudget
    }

    fn handle(&self, context: &AgentContext) -> Result<AgentOutput, DispatchError> {
        let input = context.input();
        Ok(budget_guardian::analyze(&input.event, &input.budget, &self.thresholds).into())
    }
}

/// `enrich_sponsor` → sponsor intelligence
pub struct EnrichSponsorHandler;

impl IntentHandler for EnrichSponsorHandler {
    fn intent(&self) -> Intent {
        Intent::EnrichSponsor
    }

    fn handle(&self, context: &AgentContext) -> Result<AgentOutput, DispatchError> {
        Ok(sponsor_intelligence::analyze(&context.input().sponsors).into())
    }
}

/// `forecast_flow` → attendee flow
pub struct ForecastFlowHandler {
    thresholds: Arc<AgentThresholds>,
}

impl IntentHandler for ForecastFlowHandler {
    fn intent(&self) -> Intent {
        Intent::ForecastFlow
    }

    fn handle(&self, context: &AgentContext) -> Result<AgentOutput, DispatchError> {
        Ok(attendee_flow::analyze(&context.input().event, &self.thresholds).into())
    }
}

/// The five standard handlers sharing one threshold set
pub fn default_handlers(thresholds: AgentThresholds) -> Vec<Arc<dyn IntentHandler>> {
    let thresholds = Arc::new(thresholds);
    vec![
        Arc::new(PlanEventHandler {
            thresholds: Arc::clone(&thresholds),
        }),
        Arc::new(AnalyzeRiskHandler {
            thresholds: Arc::clone(&thresholds),
        }),
        Arc::new(AuditBudgetHandler {
            thresholds: Arc::clone(&thresholds),
        }),
        Arc::new(EnrichSponsorHandler),
        Arc::new(ForecastFlowHandler { thresholds }),
    ]
}
