//! Category model
//!
//! Every user sees the fixed default categories plus any categories they
//! added themselves. Only the user-added ones are stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories available to every user without being stored
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Food", "Transport", "Housing", "Other"];

/// Check whether a name is one of the built-in categories
pub fn is_default_category(name: &str) -> bool {
    DEFAULT_CATEGORIES.contains(&name)
}

/// A category added by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCategory {
    /// Owner of the category
    pub username: String,

    /// Category name
    pub category: String,
}

impl UserCategory {
    /// Create a new user category
    pub fn new(username: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            category: category.into(),
        }
    }

    /// Validate the category name
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.category.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if is_default_category(&self.category) {
            return Err(CategoryValidationError::DefaultName(self.category.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for UserCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    DefaultName(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::DefaultName(name) => write!(f, "'{}' is a default category", name),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
