//! Summary command handler.

use crate::args::SummaryArgs;
use crate::commands::Out;
use crate::model::Category;
use crate::summary::{summarize, ExpenseSummary};
use crate::{utils, Config, Result};
use chrono::Utc;

/// Computes and displays aggregate statistics for the recorded expenses.
///
/// The "this month" figure is computed relative to `--as-of` when provided, otherwise now.
pub async fn summary(config: Config, args: SummaryArgs) -> Result<Out<ExpenseSummary>> {
    let reference_now = match args.as_of() {
        Some(raw) => utils::parse_date(raw)?,
        None => Utc::now(),
    };
    let expenses = config.repository().load().await;
    let summary = summarize(&expenses, reference_now);
    let message = render(&summary, expenses.len());
    Ok(Out::new(message, summary))
}

fn render(summary: &ExpenseSummary, count: usize) -> String {
    let top_category = match summary.top_category() {
        Some(category) => category.to_string(),
        None => "(none)".to_string(),
    };
    let mut lines = vec![
        format!("Total spent:     {}", summary.total()),
        format!("This month:      {}", summary.monthly_total()),
        format!("Average expense: {}", summary.average()),
        format!("Top category:    {top_category}"),
        format!("By category ({count} expense(s)):"),
    ];
    for category in Category::ALL {
        lines.push(format!(
            "  {:<16} {}",
            category.to_string(),
            summary.category_total(category)
        ));
    }
    lines.join("\n")
}
