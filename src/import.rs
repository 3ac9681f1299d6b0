//! Reads previously exported CSV files back into expense records.

use crate::model::{Amount, Category, Expense};
use crate::{utils, Result};
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One data row of the export format. Columns are addressed by header name, so column order in
/// the input does not matter.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: Category,
    #[serde(rename = "Amount")]
    amount: Amount,
    #[serde(rename = "Description")]
    description: String,
}

/// Parses CSV text in the export format into new expense records.
///
/// The export format carries no ids or timestamps, so every record gets a fresh id and `now` for
/// both timestamps. Dates are accepted as RFC 3339 or plain `YYYY-MM-DD`.
pub fn from_csv(text: &str, now: DateTime<Utc>) -> Result<Vec<Expense>> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut expenses = Vec::new();
    for (ix, result) in reader.deserialize().enumerate() {
        // ix + 2: rows are 1-based and the header row was consumed.
        let row: CsvRow = result.with_context(|| format!("Unable to parse CSV row {}", ix + 2))?;
        let date = utils::parse_date(&row.date)?;
        expenses.push(Expense::new(
            date,
            row.amount,
            row.category,
            row.description,
            now,
        ));
    }
    Ok(expenses)
}
