//! Derived, filtered views of an expense collection.

use crate::model::{Category, Expense};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A set of optional predicates narrowing the expense collection. Active predicates are ANDed.
/// Not persisted.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseFilters {
    /// Keep only expenses with exactly this category. `None` keeps every category.
    pub category: Option<Category>,
    /// Keep only expenses whose description contains this text, case-insensitively. Empty or
    /// absent text keeps everything.
    pub search: Option<String>,
    /// Keep only expenses dated on or after this instant (inclusive).
    pub start_date: Option<DateTime<Utc>>,
    /// Keep only expenses dated on or before this instant (inclusive).
    pub end_date: Option<DateTime<Utc>>,
}

impl ExpenseFilters {
    /// Returns true when no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.search.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = self.category {
            if expense.category() != category {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() && !expense.description().to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if expense.date() < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if expense.date() > end {
                return false;
            }
        }
        true
    }
}

/// Returns the expenses matching `filters`, sorted by date descending (most recent first)
/// regardless of input order. The input is not modified. Filtering an already-filtered list with
/// the same criteria yields the same list.
pub fn filter(expenses: &[Expense], filters: &ExpenseFilters) -> Vec<Expense> {
    let mut matched: Vec<Expense> = expenses
        .iter()
        .filter(|expense| filters.matches(expense))
        .cloned()
        .collect();
    matched.sort_by(|a, b| b.date().cmp(&a.date()));
    matched
}
