//! Display formatting for terminal output
//!
//! Table renderings of expenses, budgets and categories.

pub mod budget;
pub mod category;
pub mod expense;

pub use budget::{format_budget_alerts, format_budget_table};
pub use category::{format_category_list, format_usage_table};
pub use expense::format_expense_table;
