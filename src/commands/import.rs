//! Import command handler.

use crate::args::ImportArgs;
use crate::commands::Out;
use crate::import::from_csv;
use crate::{utils, Config, Result};
use chrono::Utc;

/// Appends the expenses parsed from a previously exported CSV file to the stored collection.
///
/// Imported records get fresh ids and timestamps; the file's dates, amounts, categories and
/// descriptions are kept.
pub async fn import(config: Config, args: ImportArgs) -> Result<Out<usize>> {
    let now = Utc::now();
    let text = utils::read(args.file()).await?;
    let imported = from_csv(&text, now)?;
    let count = imported.len();

    let repository = config.repository();
    let mut expenses = repository.load().await;
    expenses.extend(imported);
    repository.save_all(&expenses).await?;

    let message = format!(
        "Imported {} expense(s) from '{}'",
        count,
        args.file().display()
    );
    Ok(Out::new(message, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::to_csv;
    use crate::model::Category;
    use crate::test::{expense, TestEnv};

    #[tokio::test]
    async fn test_import_appends_to_collection() {
        let env = TestEnv::new().await;
        env.seed(&[expense("2024-01-05", "20.00", Category::Food, "Groceries")])
            .await;

        let text = to_csv(&[expense(
            "2024-02-01",
            "50.00",
            Category::Bills,
            "Electricity",
        )]);
        let file = env.config().root().join("restore.csv");
        tokio::fs::write(&file, text).await.unwrap();

        let out = import(env.config(), ImportArgs::new(&file)).await.unwrap();
        assert_eq!(out.structure(), Some(&1));

        let loaded = env.config().repository().load().await;
        assert_eq!(loaded.len(), 2);
        assert!(loaded.iter().any(|e| e.description() == "Electricity"));
    }

    #[tokio::test]
    async fn test_import_missing_file_fails() {
        let env = TestEnv::new().await;
        let file = env.config().root().join("nope.csv");
        assert!(import(env.config(), ImportArgs::new(&file)).await.is_err());
    }
}
