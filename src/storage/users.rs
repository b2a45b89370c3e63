//! User table (users.csv)

use std::path::PathBuf;

use crate::error::FinTrackError;
use crate::models::User;

use super::table::{CsvTable, TableRecord};

impl TableRecord for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["username", "password_hash"];

    fn username(&self) -> &str {
        &self.username
    }
}

/// Repository for user persistence
pub struct UserRepository {
    table: CsvTable<User>,
}

impl UserRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            table: CsvTable::new(path),
        }
    }

    /// Get a user by exact username
    pub fn get(&self, username: &str) -> Result<Option<User>, FinTrackError> {
        Ok(self
            .table
            .read_all()?
            .into_iter()
            .find(|u| u.username == username))
    }

    pub fn exists(&self, username: &str) -> Result<bool, FinTrackError> {
        Ok(self.get(username)?.is_some())
    }

    /// Append a user row; uniqueness is the caller's responsibility
    pub fn insert(&self, user: User) -> Result<(), FinTrackError> {
        self.table.append(user)
    }

    pub fn count(&self) -> Result<usize, FinTrackError> {
        Ok(self.table.read_all()?.len())
    }
}
