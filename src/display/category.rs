//! Category display formatting

use std::collections::BTreeSet;

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::is_default_category;
use crate::reports::CategoryUsage;

/// Format the available categories, marking the built-in ones
pub fn format_category_list(available: &BTreeSet<String>) -> String {
    let mut output = String::from("Available Categories:\n");
    for name in available {
        if is_default_category(name) {
            output.push_str(&format!("  {} (default)\n", name));
        } else {
            output.push_str(&format!("  {}\n", name));
        }
    }
    output
}

#[derive(Tabled)]
struct UsageRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Format per-category usage as a table
pub fn format_usage_table(usage: &[CategoryUsage], currency: &str) -> String {
    if usage.is_empty() {
        return "No expenses to analyze.".to_string();
    }

    let rows: Vec<UsageRow> = usage
        .iter()
        .map(|u| UsageRow {
            category: u.category.clone(),
            count: u.count,
            total: u.total.format_with_symbol(currency),
            share: format!("{:.1}%", u.share),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .modify(Columns::new(1..), Alignment::right());
    table.to_string()
}
