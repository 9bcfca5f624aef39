//! Tunable constants for the rule-based agents

use serde::{Deserialize, Serialize};

/// Numeric cut-offs the agents compare against.
///
/// Defaults are the values the dashboard ships with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentThresholds {
    /// Without a venue, fewer days than this to the show is a red risk
    pub venue_lead_days: i64,
    /// Fewer days than this to the show is an amber risk
    pub imminent_days: i64,
    /// Burn rate above this fraction is at risk while planning lags
    pub burn_rate_warning: f64,
    /// Overall progress below this percentage counts as lagging
    pub burn_progress_floor: u8,
    /// Current phase progress below this percentage counts as behind
    pub phase_progress_floor: u8,
    /// Guest capacity used to compute saturation
    pub venue_capacity: u32,
    /// Saturation above this is a high experience risk
    pub high_saturation: f64,
    /// Saturation above this is a medium experience risk
    pub medium_saturation: f64,
    /// Share of the largest category to cut when at risk
    pub budget_cut_ratio: f64,
}

impl Default for AgentThresholds {
    fn default() -> Self {
        Self {
            venue_lead_days: 60,
            imminent_days: 14,
            burn_rate_warning: 0.8,
            burn_progress_floor: 60,
            phase_progress_floor: 50,
            venue_capacity: 500,
            high_saturation: 1.1,
            medium_saturation: 0.9,
            budget_cut_ratio: 0.10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let t = AgentThresholds::default();
        assert_eq!(t.venue_lead_days, 60);
        assert_eq!(t.imminent_days, 14);
        assert_eq!(t.venue_capacity, 500);
        assert!(t.medium_saturation < t.high_saturation);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let t: AgentThresholds = serde_json::from_str(r#"{"venue_capacity": 800}"#).unwrap();
        assert_eq!(t.venue_capacity, 800);
        assert_eq!(t.burn_rate_warning, 0.8);
    }
}
