//! Event planning records supplied by the dashboard's data layer.
//!
//! These are read-only inputs to the agents:
//! - [`entities::Event`] and [`entities::VenueBooking`]
//! - [`task::Task`] on the workflow board
//! - [`phase::WorkflowPhase`], one per fixed stage
//! - [`sponsor::Sponsor`] from the sponsor CRM
//! - [`budget::BudgetCategory`] budget lines

pub mod budget;
pub mod entities;
pub mod phase;
pub mod sponsor;
pub mod task;
