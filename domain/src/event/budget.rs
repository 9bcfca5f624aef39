//! Budget categories

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Budgeted vs. actual spend for one named line of an event budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub id: String,
    pub event_id: String,
    pub name: String,
    #[serde(default)]
    pub budgeted: f64,
    #[serde(default)]
    pub actual: f64,
}

impl BudgetCategory {
    pub fn new(
        id: impl Into<String>,
        event_id: impl Into<String>,
        name: impl Into<String>,
        budgeted: f64,
        actual: f64,
    ) -> Self {
        Self {
            id: id.into(),
            event_id: event_id.into(),
            name: name.into(),
            budgeted,
            actual,
        }
    }

    /// Both amounts must be finite and non-negative.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [("budgeted", self.budgeted), ("actual", self.actual)] {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::InvalidBudgetCategory {
                    id: self.id.clone(),
                    reason: format!("{field} must be non-negative, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Actual minus budgeted; positive means overspent.
    pub fn variance(&self) -> f64 {
        self.actual - self.budgeted
    }
}

/// Total actual spend across categories
pub fn total_actual(categories: &[BudgetCategory]) -> f64 {
    categories.iter().map(|c| c.actual).sum()
}

/// The category with the largest actual spend. Ties go to the earliest entry.
pub fn largest_spend(categories: &[BudgetCategory]) -> Option<&BudgetCategory> {
    categories.iter().fold(None, |best, c| match best {
        Some(b) if b.actual >= c.actual => Some(b),
        _ => Some(c),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(name: &str, actual: f64) -> BudgetCategory {
        BudgetCategory::new(name, "evt", name, 10_000.0, actual)
    }

    #[test]
    fn test_variance() {
        assert_eq!(cat("venue", 12_500.0).variance(), 2_500.0);
    }

    #[test]
    fn test_validate_rejects_negative_and_non_finite_amounts() {
        assert!(cat("venue", 0.0).validate().is_ok());

        let err = cat("venue", -1.0).validate().unwrap_err();
        assert!(err.to_string().contains("actual must be non-negative"));
        assert!(cat("venue", f64::NAN).validate().is_err());
        assert!(cat("venue", f64::INFINITY).validate().is_err());

        let negative_plan = BudgetCategory::new("lights", "evt", "lights", -5.0, 0.0);
        let err = negative_plan.validate().unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidBudgetCategory { ref id, .. } if id == "lights"
        ));
    }

    #[test]
    fn test_total_actual() {
        assert_eq!(total_actual(&[cat("a", 10.0), cat("b", 32.5)]), 42.5);
        assert_eq!(total_actual(&[]), 0.0);
    }

    #[test]
    fn test_largest_spend_prefers_first_on_tie() {
        let cats = vec![cat("venue", 500.0), cat("catering", 900.0), cat("lights", 900.0)];
        assert_eq!(largest_spend(&cats).unwrap().name, "catering");
        assert!(largest_spend(&[]).is_none());
    }
}
