//! Task entity and its classification enums

use super::phase::PhaseId;
use crate::util::days_between;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status of a task on the workflow board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    ToDo,
    InProgress,
    Done,
    Cancelled,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "to_do",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
            TaskStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

/// Functional area a task belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    #[default]
    Logistics,
    Casting,
    Production,
    Marketing,
    Hospitality,
}

/// A unit of work on an event's workflow board (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub event_id: String,
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    pub phase: PhaseId,
    #[serde(default)]
    pub category: TaskCategory,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub is_critical_path: bool,
    /// IDs of tasks this one waits on. Not checked for existence.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        event_id: impl Into<String>,
        title: impl Into<String>,
        phase: PhaseId,
    ) -> Self {
        Self {
            id: id.into(),
            event_id: event_id.into(),
            title: title.into(),
            status: TaskStatus::ToDo,
            priority: TaskPriority::Medium,
            phase,
            category: TaskCategory::Logistics,
            deadline: None,
            is_critical_path: false,
            dependencies: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_category(mut self, category: TaskCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn critical_path(mut self) -> Self {
        self.is_critical_path = true;
        self
    }

    pub fn depends_on(mut self, task_id: impl Into<String>) -> Self {
        self.dependencies.push(task_id.into());
        self
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Not done and past its deadline. Tasks without a deadline are never overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_done() && self.deadline.is_some_and(|d| d < today)
    }

    /// Days past the deadline, zero when not overdue.
    pub fn days_overdue(&self, today: NaiveDate) -> i64 {
        match self.deadline {
            Some(deadline) if self.is_overdue(today) => days_between(deadline, today),
            _ => 0,
        }
    }

    /// Overdue and on the critical path.
    pub fn is_critical_blocker(&self, today: NaiveDate) -> bool {
        self.is_critical_path && self.is_overdue(today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_overdue_requires_deadline_in_past() {
        let today = date(2025, 6, 1);
        let task = Task::new("t1", "evt", "Book models", PhaseId::PreProduction)
            .with_deadline(date(2025, 5, 28));
        assert!(task.is_overdue(today));
        assert_eq!(task.days_overdue(today), 4);

        let due_today = task.clone().with_deadline(today);
        assert!(!due_today.is_overdue(today));
        assert_eq!(due_today.days_overdue(today), 0);
    }

    #[test]
    fn test_done_task_is_never_overdue() {
        let today = date(2025, 6, 1);
        let task = Task::new("t1", "evt", "Book models", PhaseId::PreProduction)
            .with_deadline(date(2020, 1, 1))
            .with_status(TaskStatus::Done)
            .critical_path();
        assert!(!task.is_overdue(today));
        assert!(!task.is_critical_blocker(today));
    }

    #[test]
    fn test_task_without_deadline_is_not_blocker() {
        let task = Task::new("t1", "evt", "Moodboard", PhaseId::CreativeDesign).critical_path();
        assert!(!task.is_critical_blocker(date(2030, 1, 1)));
    }

    #[test]
    fn test_deserialize_minimal_task() {
        let json = r#"{
            "id": "t7",
            "event_id": "evt",
            "title": "Lighting rig",
            "phase": "venue_logistics",
            "deadline": "2025-08-01",
            "is_critical_path": true,
            "dependencies": ["t3"]
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::ToDo);
        assert_eq!(task.phase, PhaseId::VenueLogistics);
        assert_eq!(task.deadline, Some(date(2025, 8, 1)));
        assert_eq!(task.dependencies, vec!["t3".to_string()]);
    }
}
