//! Export module for FinTrack
//!
//! CSV renditions of a user's expenses (all or filtered) and budgets.

pub mod csv;

pub use self::csv::{export_budgets_csv, export_expenses_csv};
