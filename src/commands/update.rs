//! Update command handler.

use crate::args::UpdateArgs;
use crate::commands::Out;
use crate::model::{self, Expense, ExpenseUpdate};
use crate::{utils, Config, Result};
use anyhow::bail;
use chrono::Utc;

/// Applies a partial update to an existing expense.
///
/// Only the provided fields change; `updated_at` is stamped with the current time and
/// `id`/`created_at` are never touched. When the id is not found, nothing is changed and the
/// outcome is reported in the message rather than as an error.
pub async fn update(config: Config, args: UpdateArgs) -> Result<Out<Expense>> {
    let now = Utc::now();
    let update = ExpenseUpdate {
        date: args.date().map(utils::parse_date).transpose()?,
        amount: args.amount(),
        category: args.category(),
        description: args.description().map(str::to_string),
    };
    if update.is_empty() {
        bail!(
            "Nothing to update: provide at least one of --date, --amount, --category or \
            --description"
        );
    }

    let repository = config.repository();
    let current = repository.load().await;
    let Some(existing) = current.iter().find(|e| e.id() == args.id()) else {
        let message = format!("No expense found with id '{}', nothing updated", args.id());
        return Ok(Out::new_message(message));
    };

    // Validate the record as it will look after the update.
    let mut merged = existing.clone();
    merged.apply(&update, now);
    model::validate(merged.date(), merged.amount(), merged.description(), now)?;

    repository.update(args.id(), &update, now).await?;
    let message = format!("Updated expense {}", args.id());
    Ok(Out::new(message, merged))
}
