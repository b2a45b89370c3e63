//! CSV import parsing
//!
//! Turns an uploaded CSV into [`NewExpense`] rows. Parsing is all or
//! nothing: a missing column, a bad date or a bad amount rejects the whole
//! file before any row reaches the ledger.

use std::io::Read;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};

use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{Money, NewExpense};

/// Columns an import file must have, matched by header name
pub const REQUIRED_COLUMNS: [&str; 4] = ["date", "category", "amount", "description"];

/// Date formats tried in order; ISO first
const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%d/%m/%Y", "%d/%m/%y", "%Y/%m/%d", "%m-%d-%Y",
    "%d-%m-%Y",
];

/// Positions of the required columns in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndexes {
    date: usize,
    category: usize,
    amount: usize,
    description: usize,
}

impl ColumnIndexes {
    /// Locate the required columns (trimmed, case-insensitive)
    fn from_headers(headers: &StringRecord) -> Option<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        Some(Self {
            date: find("date")?,
            category: find("category")?,
            amount: find("amount")?,
            description: find("description")?,
        })
    }
}

/// Parse a date string using multiple format attempts
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}

/// Parse an import file into expense rows
///
/// Errors:
/// - missing required column: validation error
/// - unparsable date: validation error
/// - unreadable record or unparsable amount: `Import` error
pub fn parse_expenses<R: Read>(reader: R) -> FinTrackResult<Vec<NewExpense>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| FinTrackError::Import(e.to_string()))?
        .clone();

    let columns = ColumnIndexes::from_headers(&headers).ok_or_else(|| {
        FinTrackError::Validation(format!(
            "CSV must contain {} columns.",
            REQUIRED_COLUMNS.join(", ")
        ))
    })?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| FinTrackError::Import(e.to_string()))?;
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let date = parse_date(field(columns.date)).ok_or_else(|| {
            FinTrackError::Validation("Invalid date format in CSV. Use YYYY-MM-DD.".into())
        })?;

        let amount =
            Money::parse(field(columns.amount)).map_err(|e| FinTrackError::Import(e.to_string()))?;

        rows.push(NewExpense::new(
            date,
            field(columns.category),
            amount,
            field(columns.description),
        ));
    }

    Ok(rows)
}
