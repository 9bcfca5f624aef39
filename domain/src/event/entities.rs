//! Event and venue booking entities

use crate::core::error::DomainError;
use crate::util::flexible_datetime;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    #[default]
    Draft,
    Planning,
    Confirmed,
    InProgress,
    Completed,
    Archived,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "draft",
            EventStatus::Planning => "planning",
            EventStatus::Confirmed => "confirmed",
            EventStatus::InProgress => "in_progress",
            EventStatus::Completed => "completed",
            EventStatus::Archived => "archived",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fashion event (show, presentation, launch) under planning (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(with = "flexible_datetime")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "flexible_datetime")]
    pub end_date: DateTime<Utc>,
    /// Planned spend
    #[serde(default)]
    pub budget_total: f64,
    /// Spend booked so far
    #[serde(default)]
    pub budget_actual: f64,
    #[serde(default)]
    pub attendee_target: u32,
    #[serde(default)]
    pub attendee_registered: u32,
    /// Overall planning progress, 0-100
    #[serde(default)]
    pub progress_percentage: u8,
}

impl Event {
    /// Creates a one-day event in the planning stage with no budget or guests.
    pub fn new(id: impl Into<String>, name: impl Into<String>, start_date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: EventStatus::Planning,
            start_date,
            end_date: start_date + Duration::days(1),
            budget_total: 0.0,
            budget_actual: 0.0,
            attendee_target: 0,
            attendee_registered: 0,
            progress_percentage: 0,
        }
    }

    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_budget(mut self, total: f64, actual: f64) -> Self {
        self.budget_total = total;
        self.budget_actual = actual;
        self
    }

    pub fn with_attendance(mut self, target: u32, registered: u32) -> Self {
        self.attendee_target = target;
        self.attendee_registered = registered;
        self
    }

    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress_percentage = progress;
        self
    }

    /// Check the invariants external data must satisfy before analysis.
    pub fn validate(&self) -> Result<(), DomainError> {
        let invalid = |reason: String| DomainError::InvalidEvent {
            id: self.id.clone(),
            reason,
        };

        if !self.budget_total.is_finite() || self.budget_total < 0.0 {
            return Err(invalid(format!(
                "budget_total must be non-negative, got {}",
                self.budget_total
            )));
        }
        if !self.budget_actual.is_finite() || self.budget_actual < 0.0 {
            return Err(invalid(format!(
                "budget_actual must be non-negative, got {}",
                self.budget_actual
            )));
        }
        if self.progress_percentage > 100 {
            return Err(invalid(format!(
                "progress_percentage must be within 0-100, got {}",
                self.progress_percentage
            )));
        }
        if self.end_date < self.start_date {
            return Err(invalid("end_date precedes start_date".to_string()));
        }
        Ok(())
    }
}

/// Confirmation state of a venue hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Inquiry,
    Held,
    Confirmed,
    Cancelled,
}

/// Association between a venue and an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueBooking {
    pub id: String,
    pub event_id: String,
    pub venue_name: String,
    #[serde(default)]
    pub status: BookingStatus,
}

impl VenueBooking {
    pub fn new(
        id: impl Into<String>,
        event_id: impl Into<String>,
        venue_name: impl Into<String>,
        status: BookingStatus,
    ) -> Self {
        Self {
            id: id.into(),
            event_id: event_id.into(),
            venue_name: venue_name.into(),
            status,
        }
    }

    /// A cancelled booking no longer secures the venue.
    pub fn secures_venue(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }
}
