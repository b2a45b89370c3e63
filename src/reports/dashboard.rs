//! Dashboard report
//!
//! Everything the dashboard shows for a filter window, gathered in one pass
//! over the tracker's snapshot.

use chrono::{NaiveDate, Weekday};

use crate::models::{Expense, ExpenseFilter, Money};
use crate::services::ExpenseTracker;

use super::budget_status::{budget_status, BudgetStatus};
use super::summary::{
    average_per_day, category_usage, day_of_week_totals, monthly_totals, recent_expenses,
    top_category, top_expenses, total_spent, CategoryUsage, MonthComparison, MonthlyTotal,
};

/// Dashboard for one user and filter window
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Number of expenses that matched the filter
    pub expense_count: usize,
    pub total_spent: Money,
    pub average_per_day: Money,
    pub top_category: Option<String>,
    /// Budgets measured against the filtered expenses
    pub budgets: Vec<BudgetStatus>,
    pub categories: Vec<CategoryUsage>,
    pub monthly: Vec<MonthlyTotal>,
    pub weekdays: [(Weekday, Money); 7],
    pub recent: Vec<Expense>,
    pub largest: Vec<Expense>,
    /// Always computed over the whole ledger, not the filter window
    pub comparison: MonthComparison,
}

impl DashboardReport {
    /// Generate the dashboard for a filter
    ///
    /// `top_n` bounds the recent and largest expense lists.
    pub fn generate(
        tracker: &ExpenseTracker<'_>,
        filter: &ExpenseFilter,
        today: NaiveDate,
        top_n: usize,
    ) -> Self {
        let filtered = tracker.filter(filter);

        Self {
            start_date: filter.start,
            end_date: filter.end,
            expense_count: filtered.len(),
            total_spent: total_spent(&filtered),
            average_per_day: average_per_day(&filtered),
            top_category: top_category(&filtered),
            budgets: budget_status(tracker.budgets(), &filtered),
            categories: category_usage(&filtered),
            monthly: monthly_totals(&filtered),
            weekdays: day_of_week_totals(&filtered),
            recent: recent_expenses(&filtered, top_n),
            largest: top_expenses(&filtered, top_n),
            comparison: MonthComparison::generate(tracker.expenses(), today),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency);
        let mut output = String::new();

        output.push_str(&format!(
            "Dashboard: {} to {}\n",
            self.start_date, self.end_date
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No expenses found for the selected filters\n\n");
            output.push_str(&self.comparison.format_terminal(currency));
            return output;
        }

        output.push_str(&format!("Total Spent:     {}\n", money(self.total_spent)));
        output.push_str(&format!("Average per Day: {}\n", money(self.average_per_day)));
        output.push_str(&format!(
            "Most Spent On:   {}\n\n",
            self.top_category.as_deref().unwrap_or("-")
        ));

        if !self.budgets.is_empty() {
            output.push_str("Budget Status\n");
            output.push_str(&"-".repeat(60));
            output.push('\n');
            for status in &self.budgets {
                output.push_str(&format!(
                    "{:<16} {} {:>5.1}%  {} / {}\n",
                    status.category,
                    status.progress_bar(),
                    status.display_percent(),
                    money(status.spent),
                    money(status.limit)
                ));
            }
            output.push('\n');
        }

        output.push_str("Category Distribution\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for usage in &self.categories {
            output.push_str(&format!(
                "{:<16} {:>14} {:>6.1}%\n",
                usage.category,
                money(usage.total),
                usage.share
            ));
        }
        output.push('\n');

        output.push_str("Spending Trend\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for month in &self.monthly {
            output.push_str(&format!("{:<16} {:>14}\n", month.label(), money(month.total)));
        }
        output.push('\n');

        output.push_str("Recent Expenses\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for expense in &self.recent {
            output.push_str(&format!(
                "{}  {:<12} {:>12}  {}\n",
                expense.date,
                expense.category,
                money(expense.amount),
                expense.description
            ));
        }
        output.push('\n');

        output.push_str("Spending by Day of Week\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for (day, total) in &self.weekdays {
            output.push_str(&format!("{:<16} {:>14}\n", day.to_string(), money(*total)));
        }
        output.push('\n');

        output.push_str("Expense Notes Summary\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for expense in &self.largest {
            output.push_str(&format!(
                "{} on {} ({}): {}\n",
                money(expense.amount),
                expense.date,
                expense.category,
                expense.description
            ));
        }
        output.push('\n');

        output.push_str(&self.comparison.format_terminal(currency));
        output
    }
}
