//! Spending aggregates
//!
//! Pure functions over a slice of expenses. Callers decide which expenses
//! go in (a filtered window for the dashboard, the whole ledger for usage
//! and month comparison).

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::models::{Expense, Money};

/// Days of the week in display order
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Number of expenses and their total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryUsage {
    pub category: String,
    pub count: usize,
    pub total: Money,
    /// Share of the overall total, in percent
    pub share: f64,
}

/// Total for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32,
    pub total: Money,
}

impl MonthlyTotal {
    /// Month label such as `2024-01`
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Sum of all amounts
pub fn total_spent(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Mean of the per-date totals, counting only dates that have expenses
pub fn average_per_day(expenses: &[Expense]) -> Money {
    let days: BTreeSet<NaiveDate> = expenses.iter().map(|e| e.date).collect();
    total_spent(expenses).div_round(days.len())
}

/// Per-category totals, keyed and ordered by category name
pub fn category_totals(expenses: &[Expense]) -> BTreeMap<String, Money> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_default() += expense.amount;
    }
    totals
}

/// Category with the highest total
///
/// Ties go to the alphabetically first name. `None` when there are no
/// expenses.
pub fn top_category(expenses: &[Expense]) -> Option<String> {
    let mut best: Option<(String, Money)> = None;
    for (category, total) in category_totals(expenses) {
        match &best {
            Some((_, best_total)) if total <= *best_total => {}
            _ => best = Some((category, total)),
        }
    }
    best.map(|(category, _)| category)
}

/// Count, total and share per category, ordered by category name
pub fn category_usage(expenses: &[Expense]) -> Vec<CategoryUsage> {
    let overall = total_spent(expenses);
    let mut usage: BTreeMap<String, (usize, Money)> = BTreeMap::new();

    for expense in expenses {
        let entry = usage.entry(expense.category.clone()).or_default();
        entry.0 += 1;
        entry.1 += expense.amount;
    }

    usage
        .into_iter()
        .map(|(category, (count, total))| CategoryUsage {
            category,
            count,
            total,
            share: if overall.is_positive() {
                total.as_f64() / overall.as_f64() * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Totals per calendar month, oldest first; months without expenses are skipped
pub fn monthly_totals(expenses: &[Expense]) -> Vec<MonthlyTotal> {
    let mut months: BTreeMap<(i32, u32), Money> = BTreeMap::new();
    for expense in expenses {
        *months
            .entry((expense.date.year(), expense.date.month()))
            .or_default() += expense.amount;
    }

    months
        .into_iter()
        .map(|((year, month), total)| MonthlyTotal { year, month, total })
        .collect()
}

/// Totals per weekday, Monday first, zero-filled
pub fn day_of_week_totals(expenses: &[Expense]) -> [(Weekday, Money); 7] {
    let mut totals = WEEKDAYS.map(|day| (day, Money::zero()));
    for expense in expenses {
        let idx = expense.date.weekday().num_days_from_monday() as usize;
        totals[idx].1 += expense.amount;
    }
    totals
}

/// The `n` largest expenses, largest first
pub fn top_expenses(expenses: &[Expense], n: usize) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by_key(|e| Reverse(e.amount));
    sorted.truncate(n);
    sorted
}

/// The `n` most recent expenses, newest first
pub fn recent_expenses(expenses: &[Expense], n: usize) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by_key(|e| Reverse(e.date));
    sorted.truncate(n);
    sorted
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Spending this calendar month against last calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthComparison {
    pub last_month_start: NaiveDate,
    pub this_month_start: NaiveDate,
    pub last_month_total: Money,
    pub this_month_total: Money,
}

impl MonthComparison {
    /// Compare the month containing `today` with the month before it
    ///
    /// Last month is `[first of previous month, first of this month)`. This
    /// month has no upper bound, so future-dated expenses count toward it.
    pub fn generate(expenses: &[Expense], today: NaiveDate) -> Self {
        let this_month_start = month_start(today);
        let last_month_start = month_start(this_month_start - Days::new(1));

        let mut last_month_total = Money::zero();
        let mut this_month_total = Money::zero();
        for expense in expenses {
            if expense.date >= this_month_start {
                this_month_total += expense.amount;
            } else if expense.date >= last_month_start {
                last_month_total += expense.amount;
            }
        }

        Self {
            last_month_start,
            this_month_start,
            last_month_total,
            this_month_total,
        }
    }

    /// This month minus last month
    pub fn change(&self) -> Money {
        self.this_month_total - self.last_month_total
    }

    /// Format the comparison for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();
        output.push_str("This Month vs. Last Month\n");
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<22} {:>16}\n",
            format!("Last Month ({})", self.last_month_start.format("%Y-%m")),
            self.last_month_total.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<22} {:>16}\n",
            format!("This Month ({})", self.this_month_start.format("%Y-%m")),
            self.this_month_total.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<22} {:>16}\n",
            "Change",
            self.change().format_with_symbol(currency)
        ));
        output
    }
}
