//! Core data models for FinTrack
//!
//! This module contains the record types stored in the tables: users,
//! user-added categories, budgets and expenses, plus the `Money` amount type.

pub mod budget;
pub mod category;
pub mod expense;
pub mod money;
pub mod user;

pub use budget::Budget;
pub use category::{is_default_category, UserCategory, DEFAULT_CATEGORIES};
pub use expense::{Expense, ExpenseFilter, NewExpense};
pub use money::Money;
pub use user::User;
