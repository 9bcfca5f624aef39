//! Rule-based agents.
//!
//! Five pure analyzers, each reading a slice of an [`context::InsightInput`]
//! and returning a fixed-shape judgment:
//!
//! | Agent | Reads | Verdict |
//! |-------|-------|---------|
//! | [`event_planner`] | tasks, phases | `green` / `amber` / `red` |
//! | [`ops_risk`] | event dates, venue booking | `green` / `amber` / `red` |
//! | [`budget_guardian`] | budget categories | `on_track` / `at_risk` / `over` |
//! | [`sponsor_intelligence`] | sponsors | `active` / `pending` / `at_risk` |
//! | [`attendee_flow`] | registrations | `low` / `medium` / `high` |
//!
//! None of them perform I/O or read the clock; the current instant is passed
//! in. Missing inputs produce a non-actionable all-clear.

pub mod attendee_flow;
pub mod budget_guardian;
pub mod context;
pub mod event_planner;
pub mod ops_risk;
pub mod output;
pub mod sponsor_intelligence;
pub mod thresholds;
pub mod value_objects;
