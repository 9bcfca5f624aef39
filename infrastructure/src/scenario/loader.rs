//! Scenario file loader

use chrono::NaiveDate;
use fashionos_domain::{
    BudgetCategory, DateRange, DomainError, Event, InsightInput, PhaseId, Sponsor, Task,
    VenueBooking, WorkflowPhase,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading a scenario
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Could not read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML scenario: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported scenario format: {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Scheduled window for one phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseWindow {
    pub phase: PhaseId,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// On-disk shape of a scenario
///
/// `phases` may be left out; they are then aggregated from `tasks` using
/// `schedule` for the date windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub event: Event,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub phases: Vec<WorkflowPhase>,
    #[serde(default)]
    pub schedule: Vec<PhaseWindow>,
    #[serde(default)]
    pub sponsors: Vec<Sponsor>,
    #[serde(default)]
    pub budget: Vec<BudgetCategory>,
    #[serde(default)]
    pub venue_booking: Option<VenueBooking>,
}

impl ScenarioFile {
    /// Validate the event and build the agents' input bundle
    pub fn into_input(self) -> Result<InsightInput, DomainError> {
        self.event.validate()?;
        for category in &self.budget {
            category.validate()?;
        }
        for phase in &self.phases {
            phase.validate()?;
        }

        let phases = if self.phases.is_empty() && !self.tasks.is_empty() {
            let schedule: Vec<(PhaseId, DateRange)> = self
                .schedule
                .iter()
                .map(|w| (w.phase, DateRange::new(w.start, w.end)))
                .collect();
            debug!(
                "Aggregating phases from {} tasks for event {}",
                self.tasks.len(),
                self.event.id
            );
            WorkflowPhase::aggregate(&self.tasks, &schedule)
        } else {
            self.phases
        };

        let mut input = InsightInput::new(self.event)
            .with_tasks(self.tasks)
            .with_phases(phases)
            .with_sponsors(self.sponsors)
            .with_budget(self.budget);
        input.venue_booking = self.venue_booking;
        Ok(input)
    }
}

enum Format {
    Json,
    Toml,
}

/// Reads scenarios from disk
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a `.json` or `.toml` scenario and validate it
    pub fn load(path: &Path) -> Result<InsightInput, ScenarioError> {
        let format = Self::format_of(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let input = match format {
            Format::Json => Self::from_json(&content)?,
            Format::Toml => Self::from_toml(&content)?,
        };
        info!(
            "Loaded scenario {} ({} tasks, {} sponsors, {} budget lines)",
            input.event.id,
            input.tasks.len(),
            input.sponsors.len(),
            input.budget.len()
        );
        Ok(input)
    }

    pub fn from_json(content: &str) -> Result<InsightInput, ScenarioError> {
        let file: ScenarioFile = serde_json::from_str(content)?;
        Ok(file.into_input()?)
    }

    pub fn from_toml(content: &str) -> Result<InsightInput, ScenarioError> {
        let file: ScenarioFile = toml::from_str(content)?;
        Ok(file.into_input()?)
    }

    fn format_of(path: &Path) -> Result<Format, ScenarioError> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(ScenarioError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fashionos_domain::{BookingStatus, PhaseStatus, SponsorStatus};

    const JSON_SCENARIO: &str = r#"{
        "event": {
            "id": "evt-9",
            "name": "Autumn Atelier",
            "status": "planning",
            "start_date": "2025-10-01",
            "end_date": "2025-10-02T23:00:00Z",
            "budget_total": 50000,
            "budget_actual": 12000,
            "attendee_target": 300,
            "attendee_registered": 180,
            "progress_percentage": 35
        },
        "sponsors": [
            {"id": "sp-1", "event_id": "evt-9", "name": "Lumen", "tier": "platinum", "status": "negotiating"}
        ],
        "venue_booking": {"id": "vb-1", "event_id": "evt-9", "venue_name": "Hall 4", "status": "held"}
    }"#;

    #[test]
    fn test_json_scenario() {
        let input = ScenarioLoader::from_json(JSON_SCENARIO).unwrap();
        assert_eq!(input.event.name, "Autumn Atelier");
        assert_eq!(input.sponsors[0].status, SponsorStatus::Negotiation);
        assert_eq!(
            input.venue_booking.unwrap().status,
            BookingStatus::Held
        );
        assert!(input.tasks.is_empty());
        assert!(input.phases.is_empty());
    }

    #[test]
    fn test_toml_scenario_aggregates_phases_from_tasks() {
        let toml_str = r#"
[event]
id = "evt-3"
name = "Resort Preview"
status = "planning"
start_date = "2025-09-15"
end_date = "2025-09-15"
budget_total = 80000.0
budget_actual = 0.0
attendee_target = 200
attendee_registered = 150
progress_percentage = 20

[[tasks]]
id = "t-1"
event_id = "evt-3"
title = "Shortlist models"
status = "done"
priority = "high"
phase = "pre_production"
category = "casting"

[[tasks]]
id = "t-2"
event_id = "evt-3"
title = "Fittings"
status = "in_progress"
priority = "medium"
phase = "pre_production"
category = "casting"

[[schedule]]
phase = "pre_production"
start = "2025-06-01"
end = "2025-07-15"
"#;
        let input = ScenarioLoader::from_toml(toml_str).unwrap();
        assert_eq!(input.phases.len(), 5);
        let pre = &input.phases[0];
        assert_eq!(pre.id, PhaseId::PreProduction);
        assert_eq!(pre.progress, 50);
        assert_eq!(pre.status, PhaseStatus::Active);
        assert!(pre.date_range.is_some());
        assert_eq!(input.phases[1].status, PhaseStatus::Upcoming);
        assert_eq!(input.phases[2].status, PhaseStatus::Locked);
    }

    #[test]
    fn test_invalid_event_is_rejected() {
        let bad =
            JSON_SCENARIO.replace("\"progress_percentage\": 35", "\"progress_percentage\": 140");
        let err = ScenarioLoader::from_json(&bad).unwrap_err();
        assert!(matches!(err, ScenarioError::Invalid(_)));
    }

    #[test]
    fn test_non_finite_budget_actual_is_rejected() {
        let toml_str = r#"
[event]
id = "evt-4"
name = "Couture Night"
start_date = "2025-11-20"
end_date = "2025-11-20"
budget_total = 100000.0

[[budget]]
id = "cat-venue"
event_id = "evt-4"
name = "Venue"
budgeted = 60000.0
actual = 150000.0

[[budget]]
id = "cat-catering"
event_id = "evt-4"
name = "Catering"
budgeted = 40000.0
actual = nan
"#;
        let err = ScenarioLoader::from_toml(toml_str).unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::Invalid(DomainError::InvalidBudgetCategory { ref id, .. })
                if id == "cat-catering"
        ));
    }

    #[test]
    fn test_negative_budget_actual_is_rejected() {
        let bad = JSON_SCENARIO.replace(
            "\"sponsors\"",
            r#""budget": [
            {"id": "cat-1", "event_id": "evt-9", "name": "Lights", "budgeted": 5000, "actual": -2000}
        ],
        "sponsors""#,
        );
        let err = ScenarioLoader::from_json(&bad).unwrap_err();
        assert!(err.to_string().contains("cat-1"));
    }

    #[test]
    fn test_phase_progress_over_100_is_rejected() {
        let bad = JSON_SCENARIO.replace(
            "\"sponsors\"",
            r#""phases": [{"id": "pre_production", "progress": 250, "status": "active"}],
        "sponsors""#,
        );
        let err = ScenarioLoader::from_json(&bad).unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::Invalid(DomainError::InvalidPhase { .. })
        ));
        assert!(err.to_string().contains("250"));
    }

    #[test]
    fn test_load_from_disk_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("show.json");
        std::fs::write(&path, JSON_SCENARIO).unwrap();

        let input = ScenarioLoader::load(&path).unwrap();
        assert_eq!(input.event.id, "evt-9");
    }

    #[test]
    fn test_unsupported_extension() {
        let err = ScenarioLoader::load(Path::new("show.yaml")).unwrap_err();
        assert!(matches!(err, ScenarioError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScenarioLoader::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ScenarioError::Io { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }
}
