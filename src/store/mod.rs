//! This module is responsible for reading and writing the persisted expense collection.

mod file;
mod memory;
mod repository;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use repository::ExpenseRepository;

use crate::Result;
use async_trait::async_trait;

/// The single key under which the whole expense collection is persisted.
pub const EXPENSES_KEY: &str = "expenses";

/// A minimal key-value storage backend.
///
/// The production backend keeps one file per key in the data directory; tests inject an
/// in-memory backend. The repository assumes nothing about a backend beyond these three
/// operations.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Returns the stored value for `key`, or `None` if the key has never been written.
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}
