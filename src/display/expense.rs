//! Expense display formatting

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format expenses as a table
///
/// `date_format` is a strftime pattern from the settings.
pub fn format_expense_table(expenses: &[Expense], currency: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            date: e.date.format(date_format).to_string(),
            category: e.category.clone(),
            amount: e.amount.format_with_symbol(currency),
            description: e.description.clone(),
        })
        .collect();

    let total: crate::models::Money = expenses.iter().map(|e| e.amount).sum();

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .modify(Columns::single(2), Alignment::right());

    format!(
        "{}\n{} expense(s), total {}",
        table,
        expenses.len(),
        total.format_with_symbol(currency)
    )
}
