//! Agent inputs: the data bundle and the per-call context wrapping it

use crate::event::budget::BudgetCategory;
use crate::event::entities::{Event, VenueBooking};
use crate::event::phase::WorkflowPhase;
use crate::event::sponsor::Sponsor;
use crate::event::task::Task;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Everything the agents look at for one event.
///
/// Built by the data layer; nothing in this crate mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightInput {
    pub event: Event,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub phases: Vec<WorkflowPhase>,
    #[serde(default)]
    pub sponsors: Vec<Sponsor>,
    #[serde(default)]
    pub budget: Vec<BudgetCategory>,
    #[serde(default)]
    pub venue_booking: Option<VenueBooking>,
}

impl InsightInput {
    /// Bundle with only an event; every slice empty.
    pub fn new(event: Event) -> Self {
        Self {
            event,
            tasks: Vec::new(),
            phases: Vec::new(),
            sponsors: Vec::new(),
            budget: Vec::new(),
            venue_booking: None,
        }
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn with_phases(mut self, phases: Vec<WorkflowPhase>) -> Self {
        self.phases = phases;
        self
    }

    pub fn with_sponsors(mut self, sponsors: Vec<Sponsor>) -> Self {
        self.sponsors = sponsors;
        self
    }

    pub fn with_budget(mut self, budget: Vec<BudgetCategory>) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_venue_booking(mut self, booking: VenueBooking) -> Self {
        self.venue_booking = Some(booking);
        self
    }
}

/// Shared, immutable input plus the instant the analysis runs at.
///
/// Cheap to clone; every concurrent dispatch holds its own copy.
#[derive(Debug, Clone)]
pub struct AgentContext {
    input: Arc<InsightInput>,
    now: DateTime<Utc>,
}

impl AgentContext {
    pub fn new(input: Arc<InsightInput>, now: DateTime<Utc>) -> Self {
        Self { input, now }
    }

    pub fn input(&self) -> &InsightInput {
        &self.input
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}
