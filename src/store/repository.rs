use crate::model::{Expense, ExpenseUpdate};
use crate::store::{Storage, EXPENSES_KEY};
use crate::Result;
use anyhow::Context;
use chrono::{DateTime, Utc};
use tracing::warn;

/// Coordinates every read and write of the persisted expense collection.
///
/// The collection is stored as one JSON array under a single key, and every mutation is a
/// whole-collection read-modify-write. A single active writer is assumed: there is no locking,
/// and two concurrent writers would silently clobber each other (last write wins).
///
/// Read failures degrade to an empty collection. Write failures are surfaced to the caller.
pub struct ExpenseRepository {
    storage: Box<dyn Storage>,
}

impl ExpenseRepository {
    /// Creates a repository over the given storage backend.
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    /// Loads the full expense collection.
    ///
    /// Read and parse failures are treated as "no data": the failure is logged and an empty
    /// collection is returned, never an error.
    pub async fn load(&self) -> Vec<Expense> {
        let raw = match self.storage.read(EXPENSES_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Unable to read the stored expenses, treating as empty: {e:#}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(expenses) => expenses,
            Err(e) => {
                warn!("The stored expense data is unreadable, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    /// Serializes and persists the whole collection, replacing whatever was stored.
    pub async fn save_all(&self, expenses: &[Expense]) -> Result<()> {
        let raw = serde_json::to_string(expenses).context("Unable to serialize the expenses")?;
        self.storage.write(EXPENSES_KEY, &raw).await
    }

    /// Appends `expense` and persists. Returns the new full collection.
    pub async fn add(&self, expense: Expense) -> Result<Vec<Expense>> {
        let mut expenses = self.load().await;
        expenses.push(expense);
        self.save_all(&expenses).await?;
        Ok(expenses)
    }

    /// Applies `update` to the expense with `id`, stamps its `updated_at` with `now`, and
    /// persists. If no expense has `id`, nothing is written and the unchanged collection is
    /// returned.
    pub async fn update(
        &self,
        id: &str,
        update: &ExpenseUpdate,
        now: DateTime<Utc>,
    ) -> Result<Vec<Expense>> {
        let mut expenses = self.load().await;
        if let Some(expense) = expenses.iter_mut().find(|e| e.id() == id) {
            expense.apply(update, now);
            self.save_all(&expenses).await?;
        }
        Ok(expenses)
    }

    /// Removes the expense with `id` and persists. Removing a nonexistent id returns the
    /// collection unchanged, not an error.
    pub async fn delete(&self, id: &str) -> Result<Vec<Expense>> {
        let mut expenses = self.load().await;
        let before = expenses.len();
        expenses.retain(|e| e.id() != id);
        if expenses.len() != before {
            self.save_all(&expenses).await?;
        }
        Ok(expenses)
    }

    /// Removes the entire stored collection.
    pub async fn clear(&self) -> Result<()> {
        self.storage.remove(EXPENSES_KEY).await
    }
}
