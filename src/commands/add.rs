//! Add command handler.

use crate::args::AddArgs;
use crate::commands::Out;
use crate::model::{self, Expense};
use crate::{utils, Config, Result};
use chrono::Utc;

/// Validates and records a new expense.
///
/// A unique id is generated for the record, and `created_at`/`updated_at` are stamped with the
/// current time. The date defaults to now when not provided.
///
/// # Errors
///
/// - Returns an error if the amount is not positive, the description is shorter than three
///   characters, or the date is in the future.
/// - Returns an error if the new collection cannot be persisted.
pub async fn add(config: Config, args: AddArgs) -> Result<Out<Expense>> {
    let now = Utc::now();
    let date = match args.date() {
        Some(raw) => utils::parse_date(raw)?,
        None => now,
    };
    model::validate(date, args.amount(), args.description(), now)?;

    let expense = Expense::new(date, args.amount(), args.category(), args.description(), now);
    let expenses = config.repository().add(expense.clone()).await?;

    let message = format!(
        "Recorded expense {} ({} recorded in total)",
        expense.id(),
        expenses.len()
    );
    Ok(Out::new(message, expense))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Amount, Category};
    use crate::test::TestEnv;
    use std::str::FromStr;

    #[tokio::test]
    async fn test_add_success() {
        let env = TestEnv::new().await;
        let args = AddArgs::new(
            Amount::from_str("12.50").unwrap(),
            Category::Food,
            "Lunch downtown",
            Some("2024-01-20".to_string()),
        );

        let out = add(env.config(), args).await.unwrap();
        assert!(out.message().contains("Recorded expense"));
        let recorded = out.structure().unwrap();

        // Adding then loading returns a collection grown by exactly one, containing the new id.
        let loaded = env.config().repository().load().await;
        assert_eq!(loaded.len(), 1);
        assert!(loaded.iter().any(|e| e.id() == recorded.id()));
    }

    #[tokio::test]
    async fn test_add_rejects_short_description() {
        let env = TestEnv::new().await;
        let args = AddArgs::new(
            Amount::from_str("12.50").unwrap(),
            Category::Food,
            "ab",
            None,
        );

        assert!(add(env.config(), args).await.is_err());
        assert!(env.config().repository().load().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_nonpositive_amount() {
        let env = TestEnv::new().await;
        let args = AddArgs::new(
            Amount::from_str("0").unwrap(),
            Category::Food,
            "Lunch downtown",
            None,
        );

        assert!(add(env.config(), args).await.is_err());
    }

    #[tokio::test]
    async fn test_add_rejects_future_date() {
        let env = TestEnv::new().await;
        let args = AddArgs::new(
            Amount::from_str("12.50").unwrap(),
            Category::Food,
            "Lunch downtown",
            Some("2999-01-01".to_string()),
        );

        assert!(add(env.config(), args).await.is_err());
    }
}
