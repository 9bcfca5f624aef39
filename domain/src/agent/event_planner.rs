//! Event planner agent: timeline health from the workflow board

use super::output::EventPlannerOutput;
use super::thresholds::AgentThresholds;
use super::value_objects::{Confidence, HealthStatus};
use crate::event::entities::Event;
use crate::event::phase::{PhaseStatus, WorkflowPhase};
use crate::event::task::Task;
use chrono::{DateTime, Utc};

/// Judge timeline health.
///
/// Overdue critical-path work makes the event red. A current phase running
/// behind after its start date makes it amber (advisory). Anything else,
/// including an event with no phases, is green.
pub fn analyze(
    now: DateTime<Utc>,
    event: &Event,
    tasks: &[Task],
    phases: &[WorkflowPhase],
    thresholds: &AgentThresholds,
) -> EventPlannerOutput {
    let Some(current) = phases
        .iter()
        .find(|p| p.status == PhaseStatus::Active)
        .or_else(|| phases.first())
    else {
        return EventPlannerOutput {
            confidence: Confidence::Low,
            requires_action: false,
            health_status: HealthStatus::Green,
            current_phase: None,
            phase_progress: None,
            blocking_issue: None,
            blocking_task_id: None,
            predicted_impact: None,
            recommended_action: "No workflow phases set up yet".to_string(),
        };
    };

    let today = now.date_naive();

    if let Some(blocker) = tasks.iter().find(|t| t.is_critical_blocker(today)) {
        let days = blocker.days_overdue(today);
        return EventPlannerOutput {
            confidence: Confidence::High,
            requires_action: true,
            health_status: HealthStatus::Red,
            current_phase: Some(current.id),
            phase_progress: Some(current.progress),
            blocking_issue: Some(blocker.title.clone()),
            blocking_task_id: Some(blocker.id.clone()),
            predicted_impact: Some(format!(
                "{} {} overdue on the critical path to {}; every further day slips the show schedule",
                days,
                if days == 1 { "day" } else { "days" },
                event.name
            )),
            recommended_action: format!(
                "Unblock \"{}\" today: reassign the owner or cut scope",
                blocker.title
            ),
        };
    }

    let behind_schedule = current.progress < thresholds.phase_progress_floor
        && current.date_range.is_some_and(|r| r.has_started(today));

    if behind_schedule {
        return EventPlannerOutput {
            confidence: Confidence::Medium,
            requires_action: false,
            health_status: HealthStatus::Amber,
            current_phase: Some(current.id),
            phase_progress: Some(current.progress),
            blocking_issue: None,
            blocking_task_id: None,
            predicted_impact: Some(format!(
                "{} is only {}% complete although its window has opened",
                current.name(),
                current.progress
            )),
            recommended_action: format!(
                "Review open {} tasks and add hands where work is stalled",
                current.name()
            ),
        };
    }

    EventPlannerOutput {
        confidence: Confidence::High,
        requires_action: false,
        health_status: HealthStatus::Green,
        current_phase: Some(current.id),
        phase_progress: Some(current.progress),
        blocking_issue: None,
        blocking_task_id: None,
        predicted_impact: None,
        recommended_action: format!("{} on schedule; keep current pace", current.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::phase::{DateRange, PhaseId};
    use crate::event::task::TaskStatus;
    use chrono::{Duration, NaiveDate, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap()
    }

    fn event() -> Event {
        Event::new("evt-1", "SS26 Runway", now() + Duration::days(30))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn run(tasks: &[Task], phases: &[WorkflowPhase]) -> EventPlannerOutput {
        analyze(now(), &event(), tasks, phases, &AgentThresholds::default())
    }

    #[test]
    fn empty_inputs_are_green_without_action() {
        let out = run(&[], &[]);
        assert_eq!(out.health_status, HealthStatus::Green);
        assert!(!out.requires_action);
        assert!(out.current_phase.is_none());
    }

    #[test]
    fn overdue_critical_task_is_red() {
        let phases = vec![WorkflowPhase::new(PhaseId::PreProduction, 20, PhaseStatus::Active)];
        let tasks = vec![
            Task::new("t1", "evt-1", "Sign casting director", PhaseId::PreProduction)
                .with_deadline(date(2020, 1, 1))
                .critical_path(),
        ];

        let out = run(&tasks, &phases);
        assert_eq!(out.health_status, HealthStatus::Red);
        assert!(out.requires_action);
        assert_eq!(out.confidence, Confidence::High);
        assert!(
            out.blocking_issue
                .as_deref()
                .unwrap()
                .contains("Sign casting director")
        );
        assert_eq!(out.blocking_task_id.as_deref(), Some("t1"));
        let impact = out.predicted_impact.unwrap();
        assert!(impact.contains("days overdue"));
        let overdue_days = (now().date_naive() - date(2020, 1, 1)).num_days();
        assert!(impact.starts_with(&overdue_days.to_string()));
    }

    #[test]
    fn first_blocker_is_reported() {
        let phases = vec![WorkflowPhase::new(PhaseId::PreProduction, 20, PhaseStatus::Active)];
        let tasks = vec![
            Task::new("t1", "evt-1", "First", PhaseId::PreProduction)
                .with_deadline(date(2025, 6, 1))
                .critical_path(),
            Task::new("t2", "evt-1", "Second", PhaseId::PreProduction)
                .with_deadline(date(2025, 5, 1))
                .critical_path(),
        ];
        assert_eq!(run(&tasks, &phases).blocking_issue.as_deref(), Some("First"));
    }

    #[test]
    fn done_or_non_critical_tasks_do_not_block() {
        let phases = vec![WorkflowPhase::new(PhaseId::PreProduction, 80, PhaseStatus::Active)];
        let tasks = vec![
            Task::new("t1", "evt-1", "Done", PhaseId::PreProduction)
                .with_deadline(date(2020, 1, 1))
                .critical_path()
                .with_status(TaskStatus::Done),
            Task::new("t2", "evt-1", "Not critical", PhaseId::PreProduction)
                .with_deadline(date(2020, 1, 1)),
        ];
        let out = run(&tasks, &phases);
        assert_eq!(out.health_status, HealthStatus::Green);
    }

    #[test]
    fn lagging_started_phase_is_amber_advisory() {
        let phases = vec![
            WorkflowPhase::new(PhaseId::PreProduction, 100, PhaseStatus::Complete),
            WorkflowPhase::new(PhaseId::VenueLogistics, 30, PhaseStatus::Active)
                .with_date_range(DateRange::new(date(2025, 6, 1), date(2025, 7, 1))),
        ];
        let out = run(&[], &phases);
        assert_eq!(out.health_status, HealthStatus::Amber);
        assert!(!out.requires_action);
        assert_eq!(out.current_phase, Some(PhaseId::VenueLogistics));
    }

    #[test]
    fn lagging_phase_not_started_is_green() {
        let phases = vec![
            WorkflowPhase::new(PhaseId::VenueLogistics, 30, PhaseStatus::Active)
                .with_date_range(DateRange::new(date(2025, 7, 1), date(2025, 8, 1))),
        ];
        assert_eq!(run(&[], &phases).health_status, HealthStatus::Green);
    }

    #[test]
    fn falls_back_to_first_phase_without_active() {
        let phases = vec![
            WorkflowPhase::new(PhaseId::PreProduction, 0, PhaseStatus::Upcoming)
                .with_date_range(DateRange::new(date(2025, 6, 1), date(2025, 6, 30))),
            WorkflowPhase::new(PhaseId::VenueLogistics, 0, PhaseStatus::Locked),
        ];
        let out = run(&[], &phases);
        assert_eq!(out.current_phase, Some(PhaseId::PreProduction));
        assert_eq!(out.health_status, HealthStatus::Amber);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let phases = vec![WorkflowPhase::new(PhaseId::PreProduction, 20, PhaseStatus::Active)];
        let tasks = vec![
            Task::new("t1", "evt-1", "Fittings", PhaseId::PreProduction)
                .with_deadline(date(2025, 6, 10))
                .critical_path(),
        ];
        assert_eq!(run(&tasks, &phases), run(&tasks, &phases));
    }
}
