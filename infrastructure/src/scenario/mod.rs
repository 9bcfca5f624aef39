//! Scenario loading: the data-fetching boundary
//!
//! A scenario is one event and everything the agents look at for it, read
//! from a JSON or TOML file, or built in memory for the demo.

mod demo;
mod loader;

pub use demo::demo_scenario;
pub use loader::{PhaseWindow, ScenarioError, ScenarioFile, ScenarioLoader};
