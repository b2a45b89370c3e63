//! User category table (categories.csv)
//!
//! Only user-added categories are stored; the defaults are implicit.

use std::path::PathBuf;

use crate::error::FinTrackError;
use crate::models::UserCategory;

use super::table::{CsvTable, TableRecord};

impl TableRecord for UserCategory {
    const TABLE: &'static str = "categories";
    const COLUMNS: &'static [&'static str] = &["username", "category"];

    fn username(&self) -> &str {
        &self.username
    }
}

/// Repository for user category persistence
pub struct CategoryRepository {
    table: CsvTable<UserCategory>,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            table: CsvTable::new(path),
        }
    }

    /// Get a user's categories in the order they were added
    pub fn get_for_user(&self, username: &str) -> Result<Vec<UserCategory>, FinTrackError> {
        self.table.read_for_user(username)
    }

    /// Append a category row
    pub fn insert(&self, category: UserCategory) -> Result<(), FinTrackError> {
        self.table.append(category)
    }

    /// Get every stored row (all users)
    pub fn get_all(&self) -> Result<Vec<UserCategory>, FinTrackError> {
        self.table.read_all()
    }
}
