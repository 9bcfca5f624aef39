//! Threshold validation (`[thresholds]` section)
//!
//! The section deserializes straight into the domain's [`AgentThresholds`];
//! this module only checks the values make sense together.

use fashionos_domain::{AgentThresholds, ConfigIssue, ConfigIssueCode};

fn out_of_range(field: &str, message: String) -> ConfigIssue {
    ConfigIssue::error(
        ConfigIssueCode::OutOfRange {
            field: format!("thresholds.{}", field),
        },
        message,
    )
}

pub(super) fn validate(t: &AgentThresholds) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    if t.venue_capacity == 0 {
        issues.push(out_of_range(
            "venue_capacity",
            "thresholds.venue_capacity must be positive".to_string(),
        ));
    }

    if !(t.burn_rate_warning > 0.0 && t.burn_rate_warning <= 1.0) {
        issues.push(out_of_range(
            "burn_rate_warning",
            format!(
                "thresholds.burn_rate_warning: {} is outside (0, 1]",
                t.burn_rate_warning
            ),
        ));
    }

    if !(t.budget_cut_ratio > 0.0 && t.budget_cut_ratio <= 1.0) {
        issues.push(out_of_range(
            "budget_cut_ratio",
            format!(
                "thresholds.budget_cut_ratio: {} is outside (0, 1]",
                t.budget_cut_ratio
            ),
        ));
    }

    for (field, value) in [
        ("burn_progress_floor", t.burn_progress_floor),
        ("phase_progress_floor", t.phase_progress_floor),
    ] {
        if value > 100 {
            issues.push(out_of_range(
                field,
                format!("thresholds.{}: {}% is above 100%", field, value),
            ));
        }
    }

    if t.venue_lead_days < 0 || t.imminent_days < 0 {
        issues.push(out_of_range(
            "venue_lead_days",
            "thresholds day counts must not be negative".to_string(),
        ));
    }

    if t.medium_saturation >= t.high_saturation {
        issues.push(ConfigIssue::error(
            ConfigIssueCode::ThresholdOrder {
                lower: "thresholds.medium_saturation".to_string(),
                upper: "thresholds.high_saturation".to_string(),
            },
            format!(
                "thresholds.medium_saturation ({}) must be below high_saturation ({})",
                t.medium_saturation, t.high_saturation
            ),
        ));
    }

    if t.imminent_days > t.venue_lead_days {
        issues.push(ConfigIssue::warning(
            ConfigIssueCode::ThresholdOrder {
                lower: "thresholds.imminent_days".to_string(),
                upper: "thresholds.venue_lead_days".to_string(),
            },
            "thresholds.imminent_days exceeds venue_lead_days; an unbooked venue is flagged red first anyway",
        ));
    }

    issues
}
