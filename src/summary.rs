//! Aggregate statistics over an expense collection.

use crate::model::{Amount, Category, Expense};
use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Derived aggregate statistics computed over an expense collection. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExpenseSummary {
    total: Amount,
    monthly_total: Amount,
    category_totals: BTreeMap<Category, Amount>,
    top_category: Option<Category>,
    average: Amount,
}

impl ExpenseSummary {
    /// The sum of every expense amount.
    pub fn total(&self) -> Amount {
        self.total
    }

    /// The sum of amounts dated in the reference month.
    pub fn monthly_total(&self) -> Amount {
        self.monthly_total
    }

    /// Per-category totals. Every category has an entry, zero-filled when unused.
    pub fn category_totals(&self) -> &BTreeMap<Category, Amount> {
        &self.category_totals
    }

    /// The total for a single category.
    pub fn category_total(&self, category: Category) -> Amount {
        self.category_totals
            .get(&category)
            .copied()
            .unwrap_or_default()
    }

    /// The category with the strictly greatest total, or `None` when there is no spending.
    pub fn top_category(&self) -> Option<Category> {
        self.top_category
    }

    /// The mean expense amount, zero when there are no expenses.
    pub fn average(&self) -> Amount {
        self.average
    }
}

/// Computes summary statistics for `expenses`.
///
/// `reference_now` decides which calendar month counts as the current month; it is a parameter
/// rather than a clock read so the function stays deterministic. Ties for the top category keep
/// the earliest category in the fixed enumeration order.
pub fn summarize(expenses: &[Expense], reference_now: DateTime<Utc>) -> ExpenseSummary {
    let mut total = Decimal::ZERO;
    let mut monthly_total = Decimal::ZERO;
    let mut buckets: BTreeMap<Category, Decimal> = Category::ALL
        .iter()
        .map(|category| (*category, Decimal::ZERO))
        .collect();

    for expense in expenses {
        let value = expense.amount().value();
        total += value;
        let date = expense.date();
        if date.year() == reference_now.year() && date.month() == reference_now.month() {
            monthly_total += value;
        }
        if let Some(bucket) = buckets.get_mut(&expense.category()) {
            *bucket += value;
        }
    }

    // A strict comparison makes earlier categories win ties, and leaves `None` when every
    // bucket is zero.
    let mut top_category = None;
    let mut top_total = Decimal::ZERO;
    for category in Category::ALL {
        let subtotal = buckets.get(&category).copied().unwrap_or_default();
        if subtotal > top_total {
            top_total = subtotal;
            top_category = Some(category);
        }
    }

    let average = if expenses.is_empty() {
        Decimal::ZERO
    } else {
        total / Decimal::from(expenses.len() as u64)
    };

    ExpenseSummary {
        total: Amount::new(total),
        monthly_total: Amount::new(monthly_total),
        category_totals: buckets
            .into_iter()
            .map(|(category, value)| (category, Amount::new(value)))
            .collect(),
        top_category,
        average: Amount::new(average),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{date, expense};
    use std::str::FromStr;

    fn scenario() -> Vec<Expense> {
        vec![
            expense("2024-01-05", "20.00", Category::Food, "Groceries"),
            expense("2024-01-20", "30.00", Category::Food, "Restaurant"),
            expense("2024-02-01", "50.00", Category::Bills, "Electricity"),
        ]
    }

    #[test]
    fn test_scenario_totals() {
        let summary = summarize(&scenario(), date("2024-02-15"));
        assert_eq!(summary.total().value(), Decimal::from(100));
        assert_eq!(summary.monthly_total().value(), Decimal::from(50));
        assert_eq!(
            summary.category_total(Category::Food).value(),
            Decimal::from(50)
        );
        assert_eq!(
            summary.category_total(Category::Bills).value(),
            Decimal::from(50)
        );
        assert_eq!(
            summary.category_total(Category::Shopping).value(),
            Decimal::ZERO
        );
        assert_eq!(summary.average().value().round_dp(2), Decimal::new(3333, 2));
    }

    #[test]
    fn test_scenario_tie_break_keeps_enumeration_order() {
        // Food and Bills are tied at 50; Food comes first in the enumeration order.
        let summary = summarize(&scenario(), date("2024-02-15"));
        assert_eq!(summary.top_category(), Some(Category::Food));
    }

    #[test]
    fn test_category_totals_sum_to_grand_total() {
        let summary = summarize(&scenario(), date("2024-02-15"));
        let sum: Decimal = summary
            .category_totals()
            .values()
            .map(|amount| amount.value())
            .sum();
        assert_eq!(sum, summary.total().value());
    }

    #[test]
    fn test_every_category_has_a_bucket() {
        let summary = summarize(&[], date("2024-02-15"));
        assert_eq!(summary.category_totals().len(), Category::ALL.len());
        for category in Category::ALL {
            assert!(summary.category_totals().contains_key(&category));
        }
    }

    #[test]
    fn test_empty_collection() {
        let summary = summarize(&[], date("2024-02-15"));
        assert_eq!(summary.total().value(), Decimal::ZERO);
        assert_eq!(summary.monthly_total().value(), Decimal::ZERO);
        assert_eq!(summary.average().value(), Decimal::ZERO);
        assert_eq!(summary.top_category(), None);
    }

    #[test]
    fn test_monthly_total_requires_matching_year() {
        let expenses = vec![
            expense("2023-02-10", "10.00", Category::Other, "Last year"),
            expense("2024-02-10", "25.00", Category::Other, "This year"),
        ];
        let summary = summarize(&expenses, date("2024-02-15"));
        assert_eq!(summary.monthly_total().value(), Decimal::from(25));
        assert_eq!(summary.total().value(), Decimal::from(35));
    }

    #[test]
    fn test_top_category_strictly_greatest() {
        let expenses = vec![
            expense("2024-03-01", "10.00", Category::Shopping, "Socks"),
            expense("2024-03-02", "10.01", Category::Bills, "Water"),
        ];
        let summary = summarize(&expenses, date("2024-03-15"));
        assert_eq!(summary.top_category(), Some(Category::Bills));
    }

    #[test]
    fn test_average_single_expense() {
        let expenses = vec![expense("2024-03-01", "12.34", Category::Food, "Lunch")];
        let summary = summarize(&expenses, date("2024-03-15"));
        assert_eq!(
            summary.average().value(),
            Decimal::from_str("12.34").unwrap()
        );
    }
}
