//! Progress reporting for an orchestration run

use colored::Colorize;
use fashionos_application::ports::progress::ProgressNotifier;
use fashionos_domain::{AgentId, SelectionReason};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports dispatch progress with an indicatif bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn dispatch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map(|style| style.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }

    fn selection_message(selected: Option<(AgentId, SelectionReason)>) -> String {
        match selected {
            Some((agent, reason)) => format!(
                "{} from {} ({})",
                "Insight".green(),
                agent.display_name(),
                reason
            ),
            None => format!("{}", "Systems nominal".green()),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_dispatch_start(&self, total_agents: usize) {
        let pb = ProgressBar::new(total_agents as u64);
        pb.set_style(Self::dispatch_style());
        pb.set_prefix("Consulting agents");
        pb.set_message("Dispatching...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_agent_complete(&self, agent: AgentId, success: bool) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let status = if success {
                format!("{} {}", "v".green(), agent)
            } else {
                format!("{} {}", "x".red(), agent)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_selection(&self, selected: Option<(AgentId, SelectionReason)>) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(Self::selection_message(selected));
        }
    }
}

/// Line-per-event progress for stderr that is not a terminal, where a
/// redrawn bar would leave control codes in the captured output
pub struct SimpleProgress;

impl SimpleProgress {
    fn start_line(total_agents: usize) -> String {
        format!("{} consulting {} agents", "->".cyan(), total_agents)
    }

    fn agent_line(agent: AgentId, success: bool) -> String {
        if success {
            format!("  {} {} reported", "v".green(), agent)
        } else {
            format!("  {} {} did not report", "x".red(), agent)
        }
    }
}

impl ProgressNotifier for SimpleProgress {
    fn on_dispatch_start(&self, total_agents: usize) {
        eprintln!("{}", Self::start_line(total_agents));
    }

    fn on_agent_complete(&self, agent: AgentId, success: bool) {
        eprintln!("{}", Self::agent_line(agent, success));
    }

    fn on_selection(&self, selected: Option<(AgentId, SelectionReason)>) {
        eprintln!("{} {}", "->".cyan(), ProgressReporter::selection_message(selected));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_tracks_dispatches() {
        let reporter = ProgressReporter::new();
        reporter.on_dispatch_start(5);
        reporter.on_agent_complete(AgentId::OpsRisk, true);
        reporter.on_agent_complete(AgentId::BudgetGuardian, false);

        let position = reporter
            .bar
            .lock()
            .unwrap()
            .as_ref()
            .map(|pb| pb.position());
        assert_eq!(position, Some(2));

        reporter.on_selection(None);
        assert!(reporter.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_completion_before_start_is_ignored() {
        let reporter = ProgressReporter::default();
        reporter.on_agent_complete(AgentId::OpsRisk, true);
        reporter.on_selection(Some((AgentId::OpsRisk, SelectionReason::Fallback)));
    }

    #[test]
    fn test_selection_message_names_agent_and_reason() {
        colored::control::set_override(false);
        let message = ProgressReporter::selection_message(Some((
            AgentId::EventPlanner,
            SelectionReason::Rule("planner_red"),
        )));
        assert_eq!(message, "Insight from Event Planner (rule 'planner_red')");
    }

    #[test]
    fn test_simple_progress_lines() {
        colored::control::set_override(false);
        assert_eq!(SimpleProgress::start_line(5), "-> consulting 5 agents");
        assert_eq!(
            SimpleProgress::agent_line(AgentId::OpsRisk, true),
            format!("  v {} reported", AgentId::OpsRisk)
        );
        assert_eq!(
            SimpleProgress::agent_line(AgentId::SponsorIntelligence, false),
            format!("  x {} did not report", AgentId::SponsorIntelligence)
        );
    }
}
