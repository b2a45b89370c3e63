//! Budget model
//!
//! A budget is a ceiling on the cumulative amount a user may spend in one
//! category. There is at most one budget per (user, category).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A per-category spending ceiling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Owner of the budget
    pub username: String,

    /// Category the ceiling applies to (not checked against the registry)
    pub category: String,

    /// The ceiling
    pub amount: Money,
}

impl Budget {
    /// Create a new budget row
    pub fn new(username: impl Into<String>, category: impl Into<String>, amount: Money) -> Self {
        Self {
            username: username.into(),
            category: category.into(),
            amount,
        }
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        if self.amount.is_negative() {
            return Err(BudgetValidationError::NegativeAmount);
        }

        Ok(())
    }

    /// Whether spending `spent + amount` stays within the ceiling
    ///
    /// Landing exactly on the ceiling is allowed. A sum too large to
    /// represent never fits.
    pub fn allows(&self, spent: Money, amount: Money) -> bool {
        spent
            .cents()
            .checked_add(amount.cents())
            .is_some_and(|total| total <= self.amount.cents())
    }

    /// Spent amount as a percentage of the ceiling (uncapped)
    ///
    /// A zero ceiling reports 0%.
    pub fn percent_used(&self, spent: Money) -> f64 {
        if self.amount.is_positive() {
            spent.as_f64() / self.amount.as_f64() * 100.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.amount)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NegativeAmount,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
            Self::NegativeAmount => write!(f, "Budget amount cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_boundary() {
        let budget = Budget::new("alice", "Food", Money::from_cents(10000));
        assert!(budget.allows(Money::from_cents(6000), Money::from_cents(4000)));
        assert!(!budget.allows(Money::from_cents(10000), Money::from_cents(1)));
    }

    #[test]
    fn test_allows_overflowing_sum_is_rejected() {
        let budget = Budget::new("alice", "Food", Money::from_cents(100));
        let huge = Money::parse("92233720368547757").unwrap();
        assert!(!budget.allows(huge, huge));

        let unlimited = Budget::new("alice", "Food", Money::from_cents(i64::MAX));
        assert!(!unlimited.allows(Money::from_cents(i64::MAX), Money::from_cents(1)));
        assert!(unlimited.allows(Money::from_cents(i64::MAX - 1), Money::from_cents(1)));
    }

    #[test]
    fn test_percent_used() {
        let budget = Budget::new("alice", "Food", Money::from_cents(10000));
        assert!((budget.percent_used(Money::from_cents(5000)) - 50.0).abs() < 1e-9);
        assert!((budget.percent_used(Money::from_cents(15000)) - 150.0).abs() < 1e-9);

        let zero = Budget::new("alice", "Food", Money::zero());
        assert_eq!(zero.percent_used(Money::from_cents(100)), 0.0);
    }

    #[test]
    fn test_validation() {
        assert!(Budget::new("alice", "Food", Money::zero()).validate().is_ok());
        assert_eq!(
            Budget::new("alice", "Food", Money::from_cents(-1)).validate(),
            Err(BudgetValidationError::NegativeAmount)
        );
        assert_eq!(
            Budget::new("alice", "", Money::zero()).validate(),
            Err(BudgetValidationError::EmptyCategory)
        );
    }
}
