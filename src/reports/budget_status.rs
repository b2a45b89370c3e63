//! Budget status report
//!
//! Compares each budget ceiling with what was spent in its category.

use crate::models::{Budget, Expense, Money};

/// Spending against one budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    /// Spent as a percentage of the limit, uncapped (0 for a zero limit)
    pub percent_used: f64,
}

impl BudgetStatus {
    /// Compute the status of one budget over the given expenses
    pub fn compute(budget: &Budget, expenses: &[Expense]) -> Self {
        let spent: Money = expenses
            .iter()
            .filter(|e| e.category == budget.category)
            .map(|e| e.amount)
            .sum();

        Self {
            category: budget.category.clone(),
            limit: budget.amount,
            spent,
            percent_used: budget.percent_used(spent),
        }
    }

    /// Percentage for progress display, capped at 100
    pub fn display_percent(&self) -> f64 {
        self.percent_used.min(100.0)
    }

    /// Amount left before the ceiling (negative when over)
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }

    pub fn is_over(&self) -> bool {
        self.spent > self.limit
    }

    /// Ten-cell text progress bar
    pub fn progress_bar(&self) -> String {
        let filled = (self.display_percent() / 10.0).round() as usize;
        format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled))
    }

    /// Alert line for a budget at or past the threshold
    pub fn alert_message(&self, currency: &str) -> String {
        format!(
            "Alert: {} spending at {:.1}% of {}",
            self.category,
            self.percent_used,
            self.limit.format_with_symbol(currency)
        )
    }
}

/// Status of every budget, in budget order
pub fn budget_status(budgets: &[Budget], expenses: &[Expense]) -> Vec<BudgetStatus> {
    budgets
        .iter()
        .map(|b| BudgetStatus::compute(b, expenses))
        .collect()
}

/// Budgets whose raw percentage used is at or above `threshold_percent`
pub fn budget_alerts(
    budgets: &[Budget],
    expenses: &[Expense],
    threshold_percent: f64,
) -> Vec<BudgetStatus> {
    budget_status(budgets, expenses)
        .into_iter()
        .filter(|s| s.percent_used >= threshold_percent)
        .collect()
}
