//! Built-in demo scenario
//!
//! A runway show six weeks out with the kind of trouble the dashboard demo
//! ships with: a casting contract past its deadline on the critical path, a
//! platinum sponsor stuck in negotiation, production spend over budget, and
//! no venue booked yet. Every date is relative to `now`.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use fashionos_domain::{
    BudgetCategory, DateRange, Event, EventStatus, InsightInput, PhaseId, Sponsor, SponsorStatus,
    SponsorTier, Task, TaskCategory, TaskPriority, TaskStatus, WorkflowPhase,
};

const EVENT_ID: &str = "evt-ss-runway";

fn day(now: DateTime<Utc>, offset: i64) -> NaiveDate {
    (now + Duration::days(offset)).date_naive()
}

/// The demo input bundle, dated relative to `now`
pub fn demo_scenario(now: DateTime<Utc>) -> InsightInput {
    let event = Event::new(EVENT_ID, "Spring/Summer Runway Showcase", now + Duration::days(45))
        .with_status(EventStatus::Planning)
        .with_budget(100_000.0, 104_500.0)
        .with_attendance(450, 420)
        .with_progress(42);

    let tasks = vec![
        Task::new("task-101", EVENT_ID, "Finalize guest list", PhaseId::PreProduction)
            .with_status(TaskStatus::Done)
            .with_category(TaskCategory::Hospitality)
            .with_deadline(day(now, -20)),
        Task::new("task-102", EVENT_ID, "Sign casting agency contract", PhaseId::PreProduction)
            .with_status(TaskStatus::ToDo)
            .with_priority(TaskPriority::Critical)
            .with_category(TaskCategory::Casting)
            .with_deadline(day(now, -5))
            .critical_path(),
        Task::new("task-103", EVENT_ID, "Lock show running order", PhaseId::PreProduction)
            .with_status(TaskStatus::InProgress)
            .with_priority(TaskPriority::High)
            .with_category(TaskCategory::Production)
            .with_deadline(day(now, 7))
            .depends_on("task-102"),
        Task::new("task-201", EVENT_ID, "Shortlist venues", PhaseId::VenueLogistics)
            .with_status(TaskStatus::Done)
            .with_category(TaskCategory::Logistics)
            .with_deadline(day(now, -10)),
        Task::new("task-202", EVENT_ID, "Book venue", PhaseId::VenueLogistics)
            .with_status(TaskStatus::InProgress)
            .with_priority(TaskPriority::Critical)
            .with_category(TaskCategory::Logistics)
            .with_deadline(day(now, 3))
            .critical_path(),
        Task::new("task-301", EVENT_ID, "Moodboard sign-off", PhaseId::CreativeDesign)
            .with_status(TaskStatus::ToDo)
            .with_category(TaskCategory::Production)
            .with_deadline(day(now, 14)),
        Task::new("task-401", EVENT_ID, "Front-of-house staffing", PhaseId::OnSite)
            .with_category(TaskCategory::Hospitality)
            .with_deadline(day(now, 40)),
        Task::new("task-501", EVENT_ID, "Press recap", PhaseId::PostEvent)
            .with_category(TaskCategory::Marketing)
            .with_deadline(day(now, 50)),
    ];

    let schedule = [
        (PhaseId::PreProduction, DateRange::new(day(now, -30), day(now, 10))),
        (PhaseId::VenueLogistics, DateRange::new(day(now, -14), day(now, 20))),
        (PhaseId::CreativeDesign, DateRange::new(day(now, 5), day(now, 35))),
        (PhaseId::OnSite, DateRange::new(day(now, 44), day(now, 46))),
        (PhaseId::PostEvent, DateRange::new(day(now, 46), day(now, 60))),
    ];
    let phases = WorkflowPhase::aggregate(&tasks, &schedule);

    let sponsors = vec![
        Sponsor::new(
            "sp-1",
            EVENT_ID,
            "Maison Aurelle",
            SponsorTier::Platinum,
            SponsorStatus::Negotiation,
        )
        .with_amount(50_000.0)
        .with_fit_score(92),
        Sponsor::new(
            "sp-2",
            EVENT_ID,
            "Verre Cosmetics",
            SponsorTier::Gold,
            SponsorStatus::Confirmed,
        )
        .with_amount(20_000.0)
        .with_fit_score(78)
        .with_deliverable("Backstage beauty lounge")
        .with_deliverable("Gift bag placement"),
    ];

    let budget = vec![
        BudgetCategory::new("bc-1", EVENT_ID, "Production", 45_000.0, 58_000.0),
        BudgetCategory::new("bc-2", EVENT_ID, "Venue", 30_000.0, 27_500.0),
        BudgetCategory::new("bc-3", EVENT_ID, "Talent", 15_000.0, 14_000.0),
        BudgetCategory::new("bc-4", EVENT_ID, "Hospitality", 10_000.0, 5_000.0),
    ];

    InsightInput::new(event)
        .with_tasks(tasks)
        .with_phases(phases)
        .with_sponsors(sponsors)
        .with_budget(budget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use fashionos_domain::AgentThresholds;
    use fashionos_domain::agent::{budget_guardian, event_planner, ops_risk, sponsor_intelligence};
    use fashionos_domain::{BudgetStatus, HealthStatus, PhaseStatus, RiskLevel, SponsorHealth};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_demo_event_is_valid() {
        let input = demo_scenario(now());
        assert!(input.event.validate().is_ok());
        assert!(input.venue_booking.is_none());
        assert_eq!(input.phases.len(), 5);
        assert_eq!(input.phases[0].status, PhaseStatus::Active);
    }

    #[test]
    fn test_demo_trips_every_headline_agent() {
        let input = demo_scenario(now());
        let thresholds = AgentThresholds::default();

        let planner = event_planner::analyze(
            now(),
            &input.event,
            &input.tasks,
            &input.phases,
            &thresholds,
        );
        assert_eq!(planner.health_status, HealthStatus::Red);
        assert_eq!(planner.blocking_task_id.as_deref(), Some("task-102"));

        let risk = ops_risk::analyze(now(), &input.event, None, &thresholds);
        assert_eq!(risk.risk_level, RiskLevel::Red);
        assert_eq!(risk.days_until_event, 45);

        let budget = budget_guardian::analyze(&input.event, &input.budget, &thresholds);
        assert_eq!(budget.budget_status, BudgetStatus::Over);

        let sponsor = sponsor_intelligence::analyze(&input.sponsors);
        assert_eq!(sponsor.sponsor_status, SponsorHealth::AtRisk);
        assert_eq!(sponsor.sponsor_id.as_deref(), Some("sp-1"));
    }

    #[test]
    fn test_demo_is_relative_to_now() {
        let later = now() + Duration::days(30);
        let a = demo_scenario(now());
        let b = demo_scenario(later);
        assert_eq!(b.event.start_date - a.event.start_date, Duration::days(30));
    }
}
