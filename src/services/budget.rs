//! Budget service
//!
//! Per-user category ceilings. Budgets are not checked against the category
//! registry, so a ceiling can be set before its category exists.

use tracing::info;

use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{Budget, Money};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set (or replace) the ceiling for a category
    pub fn set(&self, username: &str, category: &str, amount: Money) -> FinTrackResult<Budget> {
        let budget = Budget::new(username, category.trim(), amount);
        budget
            .validate()
            .map_err(|e| FinTrackError::Validation(e.to_string()))?;

        self.storage.budgets.upsert(budget.clone())?;
        info!(username, category = %budget.category, amount = %budget.amount, "budget set");

        Ok(budget)
    }

    /// Remove the ceiling for a category
    ///
    /// Returns whether a budget existed. Removing a missing budget is a no-op.
    pub fn remove(&self, username: &str, category: &str) -> FinTrackResult<bool> {
        let removed = self.storage.budgets.delete(username, category.trim())?;
        if removed {
            info!(username, category, "budget removed");
        }
        Ok(removed)
    }

    pub fn get(&self, username: &str, category: &str) -> FinTrackResult<Option<Budget>> {
        self.storage.budgets.get(username, category)
    }

    pub fn list(&self, username: &str) -> FinTrackResult<Vec<Budget>> {
        self.storage.budgets.get_for_user(username)
    }
}
