//! Sponsor intelligence agent: pipeline health of the sponsor portfolio

use super::output::SponsorIntelligenceOutput;
use super::value_objects::{Confidence, SponsorHealth};
use crate::event::sponsor::{Sponsor, SponsorStatus, SponsorTier};

/// Judge the sponsor portfolio.
///
/// An unsigned platinum deal is at risk. A confirmed sponsor with no agreed
/// deliverables is pending (advisory). Otherwise the portfolio is active.
pub fn analyze(sponsors: &[Sponsor]) -> SponsorIntelligenceOutput {
    let stalled_platinum = sponsors
        .iter()
        .find(|s| s.tier == SponsorTier::Platinum && s.status.is_unsigned_open_deal());

    if let Some(sponsor) = stalled_platinum {
        return SponsorIntelligenceOutput {
            confidence: Confidence::High,
            requires_action: true,
            sponsor_status: SponsorHealth::AtRisk,
            sponsor_id: Some(sponsor.id.clone()),
            sponsor_name: Some(sponsor.name.clone()),
            insight: format!(
                "Platinum deal with {} has stalled before signature",
                sponsor.name
            ),
            recommended_action: format!(
                "Escalate to {}'s decision maker with a revised activation package",
                sponsor.name
            ),
        };
    }

    let missing_deliverables = sponsors
        .iter()
        .find(|s| s.status == SponsorStatus::Confirmed && s.deliverables.is_empty());

    if let Some(sponsor) = missing_deliverables {
        return SponsorIntelligenceOutput {
            confidence: Confidence::Medium,
            requires_action: false,
            sponsor_status: SponsorHealth::Pending,
            sponsor_id: Some(sponsor.id.clone()),
            sponsor_name: Some(sponsor.name.clone()),
            insight: format!("{} is confirmed but has no deliverables on file", sponsor.name),
            recommended_action: "Agree the activation deliverables and log them".to_string(),
        };
    }

    SponsorIntelligenceOutput {
        confidence: if sponsors.is_empty() {
            Confidence::Low
        } else {
            Confidence::High
        },
        requires_action: false,
        sponsor_status: SponsorHealth::Active,
        sponsor_id: None,
        sponsor_name: None,
        insight: "Sponsor pipeline is healthy".to_string(),
        recommended_action: "None required".to_string(),
    }
}
