//! Workflow phases
//!
//! Every event moves through the same five phases. The workflow board buckets
//! tasks into them and derives each phase's status from its progress.

use super::task::{Task, TaskStatus};
use crate::core::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One of the five fixed workflow stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseId {
    PreProduction,
    VenueLogistics,
    CreativeDesign,
    OnSite,
    PostEvent,
}

impl PhaseId {
    /// All phases in workflow order
    pub const ALL: [PhaseId; 5] = [
        PhaseId::PreProduction,
        PhaseId::VenueLogistics,
        PhaseId::CreativeDesign,
        PhaseId::OnSite,
        PhaseId::PostEvent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseId::PreProduction => "pre_production",
            PhaseId::VenueLogistics => "venue_logistics",
            PhaseId::CreativeDesign => "creative_design",
            PhaseId::OnSite => "on_site",
            PhaseId::PostEvent => "post_event",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PhaseId::PreProduction => "Pre-Production",
            PhaseId::VenueLogistics => "Venue & Logistics",
            PhaseId::CreativeDesign => "Creative Design",
            PhaseId::OnSite => "On-Site",
            PhaseId::PostEvent => "Post-Event",
        }
    }
}

impl std::fmt::Display for PhaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Board status of a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    Complete,
    Active,
    Upcoming,
    Locked,
}

impl PhaseStatus {
    /// Derive a status from progress. `unlocked` tells whether work on the
    /// phase may start yet.
    pub fn derive(progress: u8, unlocked: bool) -> Self {
        if progress >= 100 {
            PhaseStatus::Complete
        } else if progress > 0 {
            PhaseStatus::Active
        } else if unlocked {
            PhaseStatus::Upcoming
        } else {
            PhaseStatus::Locked
        }
    }

    /// Whether the next phase may start
    fn unlocks_next(&self) -> bool {
        matches!(self, PhaseStatus::Complete | PhaseStatus::Active)
    }
}

/// Inclusive calendar window scheduled for a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The window has opened on or before `today`.
    pub fn has_started(&self, today: NaiveDate) -> bool {
        self.start <= today
    }
}

/// Aggregate view of one phase of an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowPhase {
    pub id: PhaseId,
    /// Percentage of counted tasks done, 0-100
    pub progress: u8,
    #[serde(default)]
    pub total_tasks: usize,
    #[serde(default)]
    pub completed_tasks: usize,
    pub status: PhaseStatus,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

impl WorkflowPhase {
    pub fn new(id: PhaseId, progress: u8, status: PhaseStatus) -> Self {
        Self {
            id,
            progress: progress.min(100),
            total_tasks: 0,
            completed_tasks: 0,
            status,
            date_range: None,
        }
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn name(&self) -> &'static str {
        self.id.display_name()
    }

    /// Progress is a percentage and task counts must be consistent.
    pub fn validate(&self) -> Result<(), DomainError> {
        let invalid = |reason: String| DomainError::InvalidPhase {
            phase: self.id.as_str().to_string(),
            reason,
        };

        if self.progress > 100 {
            return Err(invalid(format!(
                "progress must be within 0-100, got {}",
                self.progress
            )));
        }
        if self.completed_tasks > self.total_tasks {
            return Err(invalid(format!(
                "completed_tasks {} exceeds total_tasks {}",
                self.completed_tasks, self.total_tasks
            )));
        }
        Ok(())
    }

    /// Build all five phases from a task list.
    ///
    /// Cancelled tasks are left out of the counts. A phase with no tasks has
    /// zero progress. `schedule` supplies the optional date window per phase.
    pub fn aggregate(tasks: &[Task], schedule: &[(PhaseId, DateRange)]) -> Vec<WorkflowPhase> {
        let mut phases = Vec::with_capacity(PhaseId::ALL.len());
        let mut unlocked = true;

        for id in PhaseId::ALL {
            let counted: Vec<&Task> = tasks
                .iter()
                .filter(|t| t.phase == id && t.status != TaskStatus::Cancelled)
                .collect();
            let total = counted.len();
            let completed = counted.iter().filter(|t| t.is_done()).count();
            let progress = if total == 0 {
                0
            } else {
                ((completed * 100) / total) as u8
            };

            let status = PhaseStatus::derive(progress, unlocked);
            unlocked = status.unlocks_next();

            phases.push(WorkflowPhase {
                id,
                progress,
                total_tasks: total,
                completed_tasks: completed,
                status,
                date_range: schedule.iter().find(|(p, _)| *p == id).map(|(_, r)| *r),
            });
        }

        phases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn task(id: &str, phase: PhaseId, status: TaskStatus) -> Task {
        Task::new(id, "evt", id, phase).with_status(status)
    }

    #[test]
    fn test_validate_progress_and_counts() {
        let complete = WorkflowPhase::new(PhaseId::OnSite, 100, PhaseStatus::Complete);
        assert!(complete.validate().is_ok());

        let mut phase = WorkflowPhase::new(PhaseId::OnSite, 40, PhaseStatus::Active);
        phase.progress = 250;
        let err = phase.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid phase on_site: progress must be within 0-100, got 250"
        );

        let mut phase = WorkflowPhase::new(PhaseId::OnSite, 40, PhaseStatus::Active);
        phase.total_tasks = 2;
        phase.completed_tasks = 3;
        assert!(phase.validate().is_err());
    }

    #[test]
    fn test_derive_status() {
        assert_eq!(PhaseStatus::derive(100, false), PhaseStatus::Complete);
        assert_eq!(PhaseStatus::derive(40, false), PhaseStatus::Active);
        assert_eq!(PhaseStatus::derive(0, true), PhaseStatus::Upcoming);
        assert_eq!(PhaseStatus::derive(0, false), PhaseStatus::Locked);
    }

    #[test]
    fn test_aggregate_counts_and_unlocks() {
        let tasks = vec![
            task("a", PhaseId::PreProduction, TaskStatus::Done),
            task("b", PhaseId::PreProduction, TaskStatus::Done),
            task("c", PhaseId::VenueLogistics, TaskStatus::Done),
            task("d", PhaseId::VenueLogistics, TaskStatus::InProgress),
            task("e", PhaseId::VenueLogistics, TaskStatus::Cancelled),
            task("f", PhaseId::OnSite, TaskStatus::ToDo),
        ];

        let phases = WorkflowPhase::aggregate(&tasks, &[]);
        assert_eq!(phases.len(), 5);

        assert_eq!(phases[0].status, PhaseStatus::Complete);
        assert_eq!(phases[0].progress, 100);

        assert_eq!(phases[1].total_tasks, 2);
        assert_eq!(phases[1].completed_tasks, 1);
        assert_eq!(phases[1].progress, 50);
        assert_eq!(phases[1].status, PhaseStatus::Active);

        // Creative design follows an active phase, so it can start
        assert_eq!(phases[2].status, PhaseStatus::Upcoming);
        // On-site follows an untouched phase
        assert_eq!(phases[3].status, PhaseStatus::Locked);
        assert_eq!(phases[4].status, PhaseStatus::Locked);
    }

    #[test]
    fn test_aggregate_attaches_schedule() {
        let range = DateRange::new(date(3, 1), date(3, 31));
        let phases = WorkflowPhase::aggregate(&[], &[(PhaseId::CreativeDesign, range)]);
        assert_eq!(phases[2].date_range, Some(range));
        assert!(phases[0].date_range.is_none());
        assert_eq!(phases[0].status, PhaseStatus::Upcoming);
    }

    #[test]
    fn test_range_started_is_inclusive() {
        let range = DateRange::new(date(3, 1), date(3, 31));
        assert!(range.has_started(date(3, 1)));
        assert!(!range.has_started(date(2, 28)));
    }
}
