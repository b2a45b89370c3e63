//! Storage layer for FinTrack
//!
//! Four CSV tables under the data directory, each read and rewritten whole
//! on every change.

pub mod budgets;
pub mod categories;
pub mod expenses;
pub mod file_io;
pub mod table;
pub mod users;

pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_csv, write_csv, write_csv_atomic};
pub use table::{CsvTable, TableRecord};
pub use users::UserRepository;

use crate::config::paths::FinTrackPaths;
use crate::error::FinTrackError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinTrackPaths,
    pub users: UserRepository,
    pub categories: CategoryRepository,
    pub budgets: BudgetRepository,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: FinTrackPaths) -> Result<Self, FinTrackError> {
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &FinTrackPaths {
        &self.paths
    }
}
