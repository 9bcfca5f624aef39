//! Sponsor CRM entities

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SponsorTier {
    Platinum,
    Gold,
    Silver,
    Bronze,
}

impl SponsorTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SponsorTier::Platinum => "platinum",
            SponsorTier::Gold => "gold",
            SponsorTier::Silver => "silver",
            SponsorTier::Bronze => "bronze",
        }
    }
}

/// Position of a sponsor in the sales pipeline
///
/// Dashboards also write `prospecting` for the lead stage and `negotiating`
/// for the negotiation stage; both spellings are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SponsorStatus {
    #[default]
    #[serde(alias = "prospecting")]
    Lead,
    Qualified,
    Discovery,
    Proposal,
    #[serde(alias = "negotiating")]
    Negotiation,
    Confirmed,
    Fulfilled,
}

impl SponsorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SponsorStatus::Lead => "lead",
            SponsorStatus::Qualified => "qualified",
            SponsorStatus::Discovery => "discovery",
            SponsorStatus::Proposal => "proposal",
            SponsorStatus::Negotiation => "negotiation",
            SponsorStatus::Confirmed => "confirmed",
            SponsorStatus::Fulfilled => "fulfilled",
        }
    }

    /// Stages where a deal can sit unsigned: still prospecting, or stuck in
    /// negotiation.
    pub fn is_unsigned_open_deal(&self) -> bool {
        matches!(self, SponsorStatus::Lead | SponsorStatus::Negotiation)
    }
}

/// A sponsor attached to an event (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sponsor {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub tier: SponsorTier,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: SponsorStatus,
    /// Brand fit, 0-100
    #[serde(default)]
    pub fit_score: Option<u8>,
    /// Activation deliverables agreed with the sponsor
    #[serde(default)]
    pub deliverables: Vec<String>,
}

impl Sponsor {
    pub fn new(
        id: impl Into<String>,
        event_id: impl Into<String>,
        name: impl Into<String>,
        tier: SponsorTier,
        status: SponsorStatus,
    ) -> Self {
        Self {
            id: id.into(),
            event_id: event_id.into(),
            name: name.into(),
            tier,
            amount: 0.0,
            status,
            fit_score: None,
            deliverables: Vec::new(),
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_fit_score(mut self, score: u8) -> Self {
        self.fit_score = Some(score.min(100));
        self
    }

    pub fn with_deliverable(mut self, deliverable: impl Into<String>) -> Self {
        self.deliverables.push(deliverable.into());
        self
    }
}
