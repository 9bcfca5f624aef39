//! Budget guardian agent: spend against plan

use super::output::BudgetGuardianOutput;
use super::thresholds::AgentThresholds;
use super::value_objects::{BudgetStatus, Confidence};
use crate::event::budget::{BudgetCategory, largest_spend, total_actual};
use crate::event::entities::Event;

/// Judge spend against the event's total budget.
///
/// Spending exactly the budget is on track; only a strict excess is an
/// overrun. A burn rate above the warning line while planning lags is at risk.
pub fn analyze(
    event: &Event,
    categories: &[BudgetCategory],
    thresholds: &AgentThresholds,
) -> BudgetGuardianOutput {
    let total_budget = event.budget_total;
    let current_spend = total_actual(categories);
    let burn_rate = if total_budget > 0.0 {
        current_spend / total_budget
    } else {
        0.0
    };

    let base = BudgetGuardianOutput {
        confidence: Confidence::High,
        requires_action: false,
        budget_status: BudgetStatus::OnTrack,
        current_spend,
        total_budget,
        burn_rate,
        variance: None,
        recommended_adjustment: None,
        target_category: None,
        suggested_cut: None,
    };

    if current_spend > total_budget {
        let overage = current_spend - total_budget;
        let variance = if total_budget > 0.0 {
            format!("+${:.0} ({:.1}%)", overage, overage / total_budget * 100.0)
        } else {
            format!("+${:.0}", overage)
        };
        return BudgetGuardianOutput {
            requires_action: true,
            budget_status: BudgetStatus::Over,
            variance: Some(variance),
            recommended_adjustment: Some(
                "Freeze all non-essential spend until the overrun is covered".to_string(),
            ),
            ..base
        };
    }

    if burn_rate > thresholds.burn_rate_warning
        && event.progress_percentage < thresholds.burn_progress_floor
    {
        let target = largest_spend(categories);
        let cut = target.map(|c| c.actual * thresholds.budget_cut_ratio);
        let adjustment = match target {
            Some(c) => format!(
                "Cut {} by {:.0}% (${:.0})",
                c.name,
                thresholds.budget_cut_ratio * 100.0,
                c.actual * thresholds.budget_cut_ratio
            ),
            None => "Re-forecast remaining spend".to_string(),
        };
        return BudgetGuardianOutput {
            requires_action: true,
            budget_status: BudgetStatus::AtRisk,
            recommended_adjustment: Some(adjustment),
            target_category: target.map(|c| c.name.clone()),
            suggested_cut: cut,
            ..base
        };
    }

    BudgetGuardianOutput {
        confidence: if categories.is_empty() {
            Confidence::Low
        } else {
            Confidence::High
        },
        ..base
    }
}
