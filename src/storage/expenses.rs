//! Expense table (expenses.csv)

use std::path::PathBuf;

use crate::error::FinTrackError;
use crate::models::Expense;

use super::table::{CsvTable, TableRecord};

impl TableRecord for Expense {
    const TABLE: &'static str = "expenses";
    const COLUMNS: &'static [&'static str] =
        &["username", "date", "category", "amount", "description"];

    fn username(&self) -> &str {
        &self.username
    }
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    table: CsvTable<Expense>,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            table: CsvTable::new(path),
        }
    }

    /// Get a user's expenses in the order they were recorded
    pub fn get_for_user(&self, username: &str) -> Result<Vec<Expense>, FinTrackError> {
        self.table.read_for_user(username)
    }

    /// Re-read the full ledger and append one expense
    pub fn append(&self, expense: Expense) -> Result<(), FinTrackError> {
        self.table.append(expense)
    }

    pub fn get_all(&self) -> Result<Vec<Expense>, FinTrackError> {
        self.table.read_all()
    }
}
