//! Generate Insights use case
//!
//! Runs all five agents concurrently through the dispatcher, drops the ones
//! that failed, applies the silence rule, and picks at most one executive
//! insight.

use super::dispatch::{DispatchRequest, DispatchResponse, Dispatcher};
use crate::config::ExecutionParams;
use crate::ports::clock::Clock;
use crate::ports::insight_logger::{InsightEvent, InsightLogger, NoInsightLogger};
use crate::ports::latency::LatencySimulator;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use fashionos_domain::{
    AgentContext, AgentFailure, AgentOutput, ExecutiveInsight, InsightInput, Intent, Model,
    OrchestrationResult, SelectionPolicy, actionable,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Use case for producing the executive insight for one event
pub struct GenerateInsightsUseCase {
    dispatcher: Arc<Dispatcher>,
    clock: Arc<dyn Clock>,
    model: Model,
    policy: SelectionPolicy,
    logger: Arc<dyn InsightLogger>,
}

impl GenerateInsightsUseCase {
    pub fn new(dispatcher: Arc<Dispatcher>, clock: Arc<dyn Clock>) -> Self {
        Self {
            dispatcher,
            clock,
            model: Model::default(),
            policy: SelectionPolicy::default(),
            logger: Arc::new(NoInsightLogger),
        }
    }

    /// Build the standard dispatcher from execution parameters
    pub fn from_params(
        params: ExecutionParams,
        latency: Arc<dyn LatencySimulator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let dispatcher = Dispatcher::with_default_handlers(latency, params.thresholds);
        Self::new(Arc::new(dispatcher), clock).with_model(params.model)
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn InsightLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Execute with default (no-op) progress
    pub async fn execute(&self, input: InsightInput) -> OrchestrationResult {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: InsightInput,
        progress: &dyn ProgressNotifier,
    ) -> OrchestrationResult {
        let now = self.clock.now();
        let event_id = input.event.id.clone();
        let context = AgentContext::new(Arc::new(input), now);

        info!(
            "Generating insights for event {} with model {}",
            event_id, self.model
        );

        let (all_insights, failures) = self.dispatch_all(&context, progress).await;

        if !failures.is_empty() {
            warn!(
                "{} of {} agents dropped from consideration",
                failures.len(),
                Intent::ALL.len()
            );
        }

        let candidates = actionable(&all_insights);
        let executive_insight = match self.policy.select(&candidates) {
            Some(selection) => {
                info!(
                    "Executive insight from {} by {}",
                    selection.output.agent_id(),
                    selection.reason
                );
                progress.on_selection(Some((selection.output.agent_id(), selection.reason)));

                let insight = ExecutiveInsight::from_output(selection.output, now);
                self.logger.log(InsightEvent::new(
                    "executive_insight",
                    json!({
                        "event_id": event_id,
                        "reason": selection.reason.to_string(),
                        "insight": insight,
                    }),
                ));
                Some(insight)
            }
            None => {
                info!("No high-confidence actionable output; staying silent");
                progress.on_selection(None);
                self.logger.log(InsightEvent::new(
                    "silence",
                    json!({
                        "event_id": event_id,
                        "outputs": all_insights.len(),
                        "failures": failures.len(),
                    }),
                ));
                None
            }
        };

        OrchestrationResult {
            executive_insight,
            all_insights,
            failures,
            generated_at: now,
        }
    }

    /// Issue every intent at once and wait for all of them.
    ///
    /// Outputs come back in [`Intent::ALL`] order regardless of which
    /// dispatch finished first.
    async fn dispatch_all(
        &self,
        context: &AgentContext,
        progress: &dyn ProgressNotifier,
    ) -> (Vec<AgentOutput>, Vec<AgentFailure>) {
        let mut join_set = JoinSet::new();
        let mut slots = HashMap::new();

        for (index, intent) in Intent::ALL.into_iter().enumerate() {
            let dispatcher = Arc::clone(&self.dispatcher);
            let request =
                DispatchRequest::new(intent.as_str(), self.model.clone(), context.clone());

            let handle = join_set.spawn(async move {
                let response = dispatcher.dispatch(request).await;
                (index, intent, response)
            });
            slots.insert(handle.id(), (index, intent));
        }

        progress.on_dispatch_start(slots.len());

        let mut settled: Vec<(usize, Result<AgentOutput, AgentFailure>)> = Vec::new();

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((index, intent, response)) => {
                    let outcome = self.record(intent, response);
                    progress.on_agent_complete(intent.agent(), outcome.is_ok());
                    settled.push((index, outcome));
                }
                Err(e) => {
                    let Some(&(index, intent)) = slots.get(&e.id()) else {
                        warn!("Dispatch task for an unknown slot failed: {}", e);
                        continue;
                    };
                    let message = if e.is_panic() {
                        format!("{} agent panicked", intent.agent())
                    } else {
                        e.to_string()
                    };
                    warn!("Dispatch {} did not complete: {}", intent, message);
                    self.log_failure(intent, &message);
                    progress.on_agent_complete(intent.agent(), false);
                    settled.push((index, Err(AgentFailure::new(intent, message))));
                }
            }
        }

        settled.sort_by_key(|(index, _)| *index);

        let mut outputs = Vec::new();
        let mut failures = Vec::new();
        for (_, outcome) in settled {
            match outcome {
                Ok(output) => outputs.push(output),
                Err(failure) => failures.push(failure),
            }
        }
        (outputs, failures)
    }

    fn record(
        &self,
        intent: Intent,
        response: DispatchResponse,
    ) -> Result<AgentOutput, AgentFailure> {
        let latency_ms = response.latency.as_millis() as u64;

        match response.data {
            Some(output) if response.success => {
                debug!(
                    "{} answered {} ({} confidence) in {}ms",
                    output.agent_id(),
                    output.verdict(),
                    output.confidence(),
                    latency_ms
                );
                self.logger.log(InsightEvent::new(
                    "dispatch_complete",
                    json!({
                        "agent": output.agent_id(),
                        "intent": intent,
                        "latency_ms": latency_ms,
                        "verdict": output.verdict(),
                        "confidence": output.confidence(),
                        "requires_action": output.requires_action(),
                    }),
                ));
                Ok(output)
            }
            _ => {
                let message = response
                    .error
                    .unwrap_or_else(|| "dispatch returned no data".to_string());
                warn!("Dispatch {} failed: {}", intent, message);
                self.log_failure(intent, &message);
                Err(AgentFailure::new(intent, message))
            }
        }
    }

    fn log_failure(&self, intent: Intent, message: &str) {
        self.logger.log(InsightEvent::new(
            "dispatch_failed",
            json!({
                "agent": intent.agent(),
                "intent": intent,
                "error": message,
            }),
        ));
    }
}
