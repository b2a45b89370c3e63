//! Business logic layer for FinTrack
//!
//! Services sit between the CLI and storage: they validate input, apply the
//! category and budget rules and log what they change.

pub mod auth;
pub mod budget;
pub mod category;
pub mod import;
pub mod tracker;

pub use auth::CredentialService;
pub use budget::BudgetService;
pub use category::CategoryService;
pub use import::{parse_date, parse_expenses, REQUIRED_COLUMNS};
pub use tracker::ExpenseTracker;
