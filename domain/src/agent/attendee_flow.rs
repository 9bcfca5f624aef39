//! Attendee flow agent: guest load against venue capacity

use super::output::AttendeeFlowOutput;
use super::thresholds::AgentThresholds;
use super::value_objects::{Confidence, ExperienceRisk};
use crate::event::entities::Event;

/// Forecast show-day guest flow from registrations.
pub fn analyze(event: &Event, thresholds: &AgentThresholds) -> AttendeeFlowOutput {
    let saturation = if thresholds.venue_capacity == 0 {
        0.0
    } else {
        f64::from(event.attendee_registered) / f64::from(thresholds.venue_capacity)
    };

    if saturation > thresholds.high_saturation {
        return AttendeeFlowOutput {
            confidence: Confidence::High,
            requires_action: true,
            experience_risk: ExperienceRisk::High,
            saturation,
            bottleneck_description: format!(
                "Registrations exceed capacity ({:.0}%); the entrance will bottleneck before the first look",
                saturation * 100.0
            ),
            recommended_action: "Stagger arrival windows and open a second check-in lane"
                .to_string(),
        };
    }

    if saturation > thresholds.medium_saturation {
        return AttendeeFlowOutput {
            confidence: Confidence::Medium,
            requires_action: true,
            experience_risk: ExperienceRisk::Medium,
            saturation,
            bottleneck_description: format!(
                "Venue near capacity ({:.0}%); expect bar queues after the show",
                saturation * 100.0
            ),
            recommended_action: "Add a satellite bar and pre-pour welcome drinks".to_string(),
        };
    }

    AttendeeFlowOutput {
        confidence: Confidence::High,
        requires_action: false,
        experience_risk: ExperienceRisk::Low,
        saturation,
        bottleneck_description: "Guest flow within comfortable limits".to_string(),
        recommended_action: "None required".to_string(),
    }
}
