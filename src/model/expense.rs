use crate::model::{Amount, Category};
use crate::Result;
use anyhow::bail;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The minimum description length, in characters, after trimming.
pub(crate) const MIN_DESCRIPTION_LEN: usize = 3;

/// A single dated, categorized, described monetary outflow record.
///
/// Serialized field names are camelCase (`createdAt`, `updatedAt`) because that is the layout of
/// the persisted collection. There is no version field in the stored data, so changing these
/// names would require a manual migration pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    id: String,
    date: DateTime<Utc>,
    amount: Amount,
    category: Category,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Expense {
    /// Creates a new expense with a generated id. `now` becomes both `created_at` and
    /// `updated_at`.
    pub fn new(
        date: DateTime<Utc>,
        amount: Amount,
        category: Category,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            amount,
            category,
            description: description.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies the provided fields of `update` and stamps `updated_at` with `now`. The `id` and
    /// `created_at` fields are never changed.
    pub(crate) fn apply(&mut self, update: &ExpenseUpdate, now: DateTime<Utc>) {
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        self.updated_at = now;
    }
}

/// The fields of an expense that may be changed after creation. `None` leaves a field as-is.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseUpdate {
    pub date: Option<DateTime<Utc>>,
    pub amount: Option<Amount>,
    pub category: Option<Category>,
    pub description: Option<String>,
}

impl ExpenseUpdate {
    /// Returns true when no field is set.
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }
}

/// Checks the user-settable fields of an expense: the amount must be positive, the description
/// must be at least three characters after trimming, and the date must not be in the future
/// relative to `now`. These checks gate every mutation; a failure blocks the write and is fully
/// recoverable.
pub(crate) fn validate(
    date: DateTime<Utc>,
    amount: Amount,
    description: &str,
    now: DateTime<Utc>,
) -> Result<()> {
    if !amount.is_positive() {
        bail!("The amount must be greater than zero, got '{amount}'");
    }
    if description.trim().chars().count() < MIN_DESCRIPTION_LEN {
        bail!("The description must be at least {MIN_DESCRIPTION_LEN} characters long");
    }
    if date > now {
        bail!(
            "The expense date may not be in the future: '{}'",
            date.to_rfc3339()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{date, expense};
    use std::str::FromStr;

    #[test]
    fn test_new_sets_both_timestamps() {
        let now = date("2024-03-01");
        let expense = Expense::new(
            date("2024-02-20"),
            Amount::from_str("12.50").unwrap(),
            Category::Food,
            "Lunch",
            now,
        );
        assert_eq!(expense.created_at(), now);
        assert_eq!(expense.updated_at(), now);
        assert!(!expense.id().is_empty());
    }

    #[test]
    fn test_apply_touches_only_targeted_fields() {
        let mut record = expense("2024-01-05", "20.00", Category::Food, "Groceries");
        let original = record.clone();
        let later = date("2024-04-01");

        let update = ExpenseUpdate {
            description: Some("Weekly groceries".to_string()),
            ..Default::default()
        };
        record.apply(&update, later);

        assert_eq!(record.id(), original.id());
        assert_eq!(record.created_at(), original.created_at());
        assert_eq!(record.date(), original.date());
        assert_eq!(record.amount(), original.amount());
        assert_eq!(record.category(), original.category());
        assert_eq!(record.description(), "Weekly groceries");
        assert_eq!(record.updated_at(), later);
    }

    #[test]
    fn test_serialized_field_names_are_camel_case() {
        let record = expense("2024-01-05", "20.00", Category::Food, "Groceries");
        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("createdAt"));
        assert!(object.contains_key("updatedAt"));
        assert!(object.contains_key("amount"));
        assert!(object["amount"].is_number());
    }

    #[test]
    fn test_serde_round_trip() {
        let record = expense("2024-01-05", "20.50", Category::Bills, "Electricity");
        let json = serde_json::to_string(&record).unwrap();
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_validate_rejects_nonpositive_amount() {
        let now = date("2024-03-01");
        let zero = Amount::from_str("0").unwrap();
        assert!(validate(date("2024-02-01"), zero, "Lunch downtown", now).is_err());
        let negative = Amount::from_str("-5.00").unwrap();
        assert!(validate(date("2024-02-01"), negative, "Lunch downtown", now).is_err());
    }

    #[test]
    fn test_validate_rejects_short_description() {
        let now = date("2024-03-01");
        let amount = Amount::from_str("5.00").unwrap();
        assert!(validate(date("2024-02-01"), amount, "ab", now).is_err());
        assert!(validate(date("2024-02-01"), amount, "  a  ", now).is_err());
        assert!(validate(date("2024-02-01"), amount, "abc", now).is_ok());
    }

    #[test]
    fn test_validate_rejects_future_date() {
        let now = date("2024-03-01");
        let amount = Amount::from_str("5.00").unwrap();
        assert!(validate(date("2024-03-02"), amount, "Lunch", now).is_err());
        // The boundary is inclusive: an expense dated "now" is allowed.
        assert!(validate(now, amount, "Lunch", now).is_ok());
    }
}
