//! Custom error types for FinTrack
//!
//! Every tracker operation reports failure through [`FinTrackError`]. The
//! `Display` text of each variant is the human-readable message shown to the
//! user, so `Ok`/`Err` plus the message is the whole outcome of a call.

use thiserror::Error;

use crate::models::Money;

/// The main error type for FinTrack operations
#[derive(Error, Debug)]
pub enum FinTrackError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for input data
    #[error("{0}")]
    Validation(String),

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// The expense category is neither a default nor a user category
    #[error("Category does not exist.")]
    UnknownCategory(String),

    /// Adding the expense would push the category over its budget ceiling
    #[error("Adding this expense would exceed your budget for this category.")]
    BudgetExceeded {
        category: String,
        limit: Money,
        spent: Money,
        attempted: Money,
    },

    /// Signup or login rejected
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// One or more rows of a bulk import were rejected
    ///
    /// Rows before and after a rejected row that passed validation were
    /// still committed; `imported` counts them.
    #[error("{}", .failures.join("\n"))]
    BulkImport {
        imported: usize,
        failures: Vec<String>,
    },

    /// Generic failure while reading an import file
    #[error("Error processing file: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FinTrackError {
    /// Create a "duplicate" error for categories
    pub fn duplicate_category(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for users
    pub fn duplicate_user(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnknownCategory(_))
    }

    /// Check if this is a budget ceiling rejection
    pub fn is_budget_exceeded(&self) -> bool {
        matches!(self, Self::BudgetExceeded { .. })
    }
}

impl From<std::io::Error> for FinTrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinTrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for FinTrackError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for FinTrack operations
pub type FinTrackResult<T> = Result<T, FinTrackError>;
