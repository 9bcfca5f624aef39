//! Dispatch use case
//!
//! A uniform async entry point: an intent string goes in, an envelope comes
//! out. Nothing that goes wrong behind the boundary escapes as an error; it
//! becomes `success: false` with a message.

use super::handlers::{IntentHandler, default_handlers};
use crate::ports::latency::LatencySimulator;
use fashionos_domain::{
    AgentContext, AgentId, AgentOutput, AgentThresholds, DomainError, Intent, Model,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tracing::debug;

/// Errors that can occur behind the dispatch boundary
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("No handler registered for intent {0}")]
    NoHandler(Intent),

    #[error("Agent {agent} failed: {message}")]
    AgentFailed { agent: AgentId, message: String },
}

/// One call into the dispatcher
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    /// Raw intent string, e.g. `"analyze_risk"`
    pub intent: String,
    pub model: Model,
    pub context: AgentContext,
}

impl DispatchRequest {
    pub fn new(intent: impl Into<String>, model: Model, context: AgentContext) -> Self {
        Self {
            intent: intent.into(),
            model,
            context,
        }
    }
}

/// Envelope returned for every dispatch
#[derive(Debug, Clone)]
pub struct DispatchResponse {
    pub success: bool,
    pub data: Option<AgentOutput>,
    pub error: Option<String>,
    /// Wall time spent inside `dispatch`, simulated delay included
    pub latency: Duration,
}

impl DispatchResponse {
    pub fn success(data: AgentOutput, latency: Duration) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            latency,
        }
    }

    pub fn failure(error: impl Into<String>, latency: Duration) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            latency,
        }
    }
}

/// Routes intents to their handlers after the simulated model delay
pub struct Dispatcher {
    handlers: HashMap<Intent, Arc<dyn IntentHandler>>,
    latency: Arc<dyn LatencySimulator>,
}

impl Dispatcher {
    /// A dispatcher with no handlers; every intent fails until registered
    pub fn new(latency: Arc<dyn LatencySimulator>) -> Self {
        Self {
            handlers: HashMap::new(),
            latency,
        }
    }

    /// A dispatcher with all five agents registered
    pub fn with_default_handlers(
        latency: Arc<dyn LatencySimulator>,
        thresholds: AgentThresholds,
    ) -> Self {
        default_handlers(thresholds)
            .into_iter()
            .fold(Self::new(latency), Self::with_handler)
    }

    pub fn with_handler(mut self, handler: Arc<dyn IntentHandler>) -> Self {
        self.register(handler);
        self
    }

    /// Register a handler, returning the one it replaced
    pub fn register(&mut self, handler: Arc<dyn IntentHandler>) -> Option<Arc<dyn IntentHandler>> {
        self.handlers.insert(handler.intent(), handler)
    }

    pub fn supports(&self, intent: Intent) -> bool {
        self.handlers.contains_key(&intent)
    }

    /// Wait out the model latency, then answer the intent.
    ///
    /// Never returns an error; failures are carried in the envelope.
    pub async fn dispatch(&self, request: DispatchRequest) -> DispatchResponse {
        let started = Instant::now();
        self.latency.delay(&request.model).await;

        let result = self.resolve(&request);
        let latency = started.elapsed();

        match result {
            Ok(output) => {
                debug!(
                    "Dispatch {} answered by {} in {:?}",
                    request.intent,
                    output.agent_id(),
                    latency
                );
                DispatchResponse::success(output, latency)
            }
            Err(e) => {
                debug!("Dispatch {} failed: {}", request.intent, e);
                DispatchResponse::failure(e.to_string(), latency)
            }
        }
    }

    fn resolve(&self, request: &DispatchRequest) -> Result<AgentOutput, DispatchError> {
        let intent: Intent = request.intent.parse()?;
        let handler = self
            .handlers
            .get(&intent)
            .ok_or(DispatchError::NoHandler(intent))?;
        handler.handle(&request.context)
    }
}
