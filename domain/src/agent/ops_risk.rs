//! Ops risk agent: venue security and time to showtime

use super::output::OpsRiskOutput;
use super::thresholds::AgentThresholds;
use super::value_objects::{Confidence, RiskLevel};
use crate::event::entities::{Event, VenueBooking};
use crate::util::days_until_ceil;
use chrono::{DateTime, Utc};

const NO_VENUE_DESCRIPTION: &str = "No venue contract is secured for the show";
const NO_VENUE_IMPACT: &str =
    "Runway-capable venues book out eight to ten weeks ahead; waiting risks a forced downgrade or a date change";
const NO_VENUE_TRADEOFF: &str =
    "Sign the strongest available hold this week, accepting a premium over the preferred venue";

const IMMINENT_DESCRIPTION: &str = "The show is inside its final production window";
const IMMINENT_IMPACT: &str =
    "Changes from here on cascade into vendor overtime and shortened rehearsals";
const IMMINENT_TRADEOFF: &str =
    "Freeze the run-of-show and route every new request through a change log";

const CLEAR_DESCRIPTION: &str = "Venue and timeline are within safe margins";
const CLEAR_IMPACT: &str = "No operational disruption expected";
const CLEAR_TRADEOFF: &str = "None required";

/// Judge operational risk from the venue booking and the days left.
///
/// A cancelled booking counts as no booking.
pub fn analyze(
    now: DateTime<Utc>,
    event: &Event,
    venue_booking: Option<&VenueBooking>,
    thresholds: &AgentThresholds,
) -> OpsRiskOutput {
    let days_until_event = days_until_ceil(now, event.start_date);
    let venue_secured = venue_booking.is_some_and(VenueBooking::secures_venue);

    if !venue_secured && days_until_event < thresholds.venue_lead_days {
        return OpsRiskOutput {
            confidence: Confidence::High,
            requires_action: true,
            risk_level: RiskLevel::Red,
            days_until_event,
            risk_description: NO_VENUE_DESCRIPTION.to_string(),
            predicted_impact: NO_VENUE_IMPACT.to_string(),
            recommended_tradeoff: NO_VENUE_TRADEOFF.to_string(),
        };
    }

    if days_until_event < thresholds.imminent_days {
        return OpsRiskOutput {
            confidence: Confidence::Medium,
            requires_action: true,
            risk_level: RiskLevel::Amber,
            days_until_event,
            risk_description: IMMINENT_DESCRIPTION.to_string(),
            predicted_impact: IMMINENT_IMPACT.to_string(),
            recommended_tradeoff: IMMINENT_TRADEOFF.to_string(),
        };
    }

    OpsRiskOutput {
        confidence: Confidence::High,
        requires_action: false,
        risk_level: RiskLevel::Green,
        days_until_event,
        risk_description: CLEAR_DESCRIPTION.to_string(),
        predicted_impact: CLEAR_IMPACT.to_string(),
        recommended_tradeoff: CLEAR_TRADEOFF.to_string(),
    }
}
