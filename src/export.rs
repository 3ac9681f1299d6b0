//! CSV export of the expense collection.

use crate::model::Expense;
use crate::{utils, Result};
use chrono::NaiveDate;
use std::path::Path;

/// The fixed header row of every export.
const CSV_HEADER: &str = "Date,Category,Amount,Description";

/// Serializes `expenses` into CSV text.
///
/// The format is an external contract and must stay bit-exact: the fixed four-column header,
/// then one row per expense with the raw date, category and amount, and the description wrapped
/// in double quotes with every literal double quote doubled. That quoting is the only escaping
/// performed; commas and newlines inside a description are tolerated because the field is always
/// quoted. Rows are joined by a newline with no trailing blank line. The same input list always
/// produces the same text, in the same order.
pub fn to_csv(expenses: &[Expense]) -> String {
    let mut rows = Vec::with_capacity(expenses.len() + 1);
    rows.push(CSV_HEADER.to_string());
    for expense in expenses {
        rows.push(format!(
            "{},{},{},\"{}\"",
            expense.date().to_rfc3339(),
            expense.category(),
            expense.amount(),
            expense.description().replace('"', "\"\""),
        ));
    }
    rows.join("\n")
}

/// Returns the canonical name for an export performed on `date`: `expenses-<date>.csv`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("expenses-{}.csv", date.format("%Y-%m-%d"))
}

/// Writes serialized CSV text to `path`. This is the side-effecting half of an export; `to_csv`
/// itself stays pure.
pub async fn write_export(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    utils::write(path, contents).await
}
