//! Reports module for FinTrack
//!
//! Aggregates over expense and budget snapshots: totals, budget status,
//! time series and the combined dashboard.

pub mod budget_status;
pub mod dashboard;
pub mod summary;

pub use budget_status::{budget_alerts, budget_status, BudgetStatus};
pub use dashboard::DashboardReport;
pub use summary::{
    average_per_day, category_totals, category_usage, day_of_week_totals, month_start,
    monthly_totals, recent_expenses, top_category, top_expenses, total_spent, CategoryUsage,
    MonthComparison, MonthlyTotal, WEEKDAYS,
};
