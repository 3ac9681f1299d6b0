//! List command handler.

use crate::args::FilterArgs;
use crate::commands::{parse_filters, Out};
use crate::filter::filter;
use crate::model::Expense;
use crate::{Config, Result};

/// Lists expenses, optionally filtered, most recent first.
pub async fn list(config: Config, args: FilterArgs) -> Result<Out<Vec<Expense>>> {
    let filters = parse_filters(&args)?;
    let expenses = config.repository().load().await;
    let matched = filter(&expenses, &filters);
    let message = render(&matched);
    Ok(Out::new(message, matched))
}

fn render(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found".to_string();
    }
    let mut lines = Vec::with_capacity(expenses.len() + 1);
    lines.push(format!("{} expense(s):", expenses.len()));
    for expense in expenses {
        lines.push(format!(
            "{}  {:>12}  {:<14}  {}  [{}]",
            expense.date().format("%Y-%m-%d"),
            expense.amount().to_string(),
            expense.category().to_string(),
            expense.description(),
            expense.id(),
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::test::{expense, TestEnv};

    #[tokio::test]
    async fn test_list_sorted_most_recent_first() {
        let env = TestEnv::new().await;
        env.seed(&[
            expense("2024-01-05", "20.00", Category::Food, "Groceries"),
            expense("2024-02-01", "50.00", Category::Bills, "Electricity"),
        ])
        .await;

        let out = list(env.config(), FilterArgs::default()).await.unwrap();
        let matched = out.structure().unwrap();
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].description(), "Electricity");
        assert_eq!(matched[1].description(), "Groceries");
        assert!(out.message().starts_with("2 expense(s):"));
    }

    #[tokio::test]
    async fn test_list_with_category_filter() {
        let env = TestEnv::new().await;
        env.seed(&[
            expense("2024-01-05", "20.00", Category::Food, "Groceries"),
            expense("2024-02-01", "50.00", Category::Bills, "Electricity"),
        ])
        .await;

        let args = FilterArgs::new(Some(Category::Bills), None, None, None);
        let out = list(env.config(), args).await.unwrap();
        let matched = out.structure().unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].category(), Category::Bills);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let env = TestEnv::new().await;
        let out = list(env.config(), FilterArgs::default()).await.unwrap();
        assert_eq!(out.message(), "No expenses found");
        assert!(out.structure().unwrap().is_empty());
    }
}
