//! Progress notification port
//!
//! Defines the interface for reporting progress during an orchestration run.

use fashionos_domain::{AgentId, SelectionReason};

/// Callback for progress updates during orchestration
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called once all dispatches have been issued
    fn on_dispatch_start(&self, total_agents: usize);

    /// Called when one agent's dispatch settles
    fn on_agent_complete(&self, agent: AgentId, success: bool);

    /// Called after selection; `None` means the silence rule applied
    fn on_selection(&self, _selected: Option<(AgentId, SelectionReason)>) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_dispatch_start(&self, _total_agents: usize) {}
    fn on_agent_complete(&self, _agent: AgentId, _success: bool) {}
}
