//! Budget table (budgets.csv)
//!
//! At most one row per (username, category); writing a budget replaces the
//! previous row for that pair.

use std::path::PathBuf;

use crate::error::FinTrackError;
use crate::models::Budget;

use super::table::{CsvTable, TableRecord};

impl TableRecord for Budget {
    const TABLE: &'static str = "budgets";
    const COLUMNS: &'static [&'static str] = &["username", "category", "amount"];

    fn username(&self) -> &str {
        &self.username
    }
}

/// Repository for budget persistence
pub struct BudgetRepository {
    table: CsvTable<Budget>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            table: CsvTable::new(path),
        }
    }

    pub fn get_for_user(&self, username: &str) -> Result<Vec<Budget>, FinTrackError> {
        self.table.read_for_user(username)
    }

    /// Get the budget for one (user, category) pair
    pub fn get(&self, username: &str, category: &str) -> Result<Option<Budget>, FinTrackError> {
        Ok(self
            .table
            .read_all()?
            .into_iter()
            .find(|b| b.username == username && b.category == category))
    }

    /// Insert or replace the budget for the row's (user, category) pair
    pub fn upsert(&self, budget: Budget) -> Result<(), FinTrackError> {
        let username = budget.username.clone();
        let category = budget.category.clone();
        self.table
            .replace_where(|b| b.username == username && b.category == category, budget)?;
        Ok(())
    }

    /// Delete the budget for a (user, category) pair
    ///
    /// Returns whether a row was removed; a missing row is not an error.
    pub fn delete(&self, username: &str, category: &str) -> Result<bool, FinTrackError> {
        let removed = self
            .table
            .remove_where(|b| b.username == username && b.category == category)?;
        Ok(removed > 0)
    }
}
