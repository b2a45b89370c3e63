//! Category service
//!
//! Merges the built-in categories with the ones a user added.

use std::collections::BTreeSet;

use tracing::info;

use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{is_default_category, UserCategory, DEFAULT_CATEGORIES};
use crate::storage::Storage;

/// Union of the defaults and a user's stored categories, sorted
pub fn merge_with_defaults(custom: &[UserCategory]) -> BTreeSet<String> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|c| c.to_string())
        .chain(custom.iter().map(|c| c.category.clone()))
        .collect()
}

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All categories the user may record expenses against
    pub fn available_categories(&self, username: &str) -> FinTrackResult<BTreeSet<String>> {
        let custom = self.storage.categories.get_for_user(username)?;
        Ok(merge_with_defaults(&custom))
    }

    /// The categories the user added, in the order they were added
    pub fn list_custom(&self, username: &str) -> FinTrackResult<Vec<UserCategory>> {
        self.storage.categories.get_for_user(username)
    }

    /// Add a category for a user
    pub fn add(&self, username: &str, name: &str) -> FinTrackResult<UserCategory> {
        let category = UserCategory::new(username, name.trim());

        if is_default_category(&category.category) {
            return Err(FinTrackError::duplicate_category(&category.category));
        }

        category
            .validate()
            .map_err(|e| FinTrackError::Validation(e.to_string()))?;

        let existing = self.storage.categories.get_for_user(username)?;
        if existing.iter().any(|c| c.category == category.category) {
            return Err(FinTrackError::duplicate_category(&category.category));
        }

        self.storage.categories.insert(category.clone())?;
        info!(username, category = %category.category, "category added");

        Ok(category)
    }
}
