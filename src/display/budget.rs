//! Budget display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::reports::BudgetStatus;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
}

/// Format budgets with their spending as a table
pub fn format_budget_table(statuses: &[BudgetStatus], currency: &str) -> String {
    if statuses.is_empty() {
        return "No budgets set.".to_string();
    }

    let rows: Vec<BudgetRow> = statuses
        .iter()
        .map(|s| BudgetRow {
            category: s.category.clone(),
            limit: s.limit.format_with_symbol(currency),
            spent: s.spent.format_with_symbol(currency),
            remaining: s.remaining().format_with_symbol(currency),
            used: format!("{} {:.1}%", s.progress_bar(), s.display_percent()),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format alert lines, one per budget past the threshold
pub fn format_budget_alerts(alerts: &[BudgetStatus], currency: &str, threshold: f64) -> String {
    if alerts.is_empty() {
        return format!("No budgets at or above {:.0}%.", threshold);
    }

    alerts
        .iter()
        .map(|s| s.alert_message(currency))
        .collect::<Vec<_>>()
        .join("\n")
}
