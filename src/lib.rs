pub mod args;
pub mod commands;
mod config;
mod error;
mod export;
mod filter;
mod import;
mod model;
mod store;
mod summary;
mod utils;

pub use config::Config;
pub use error::Error;
pub use error::Result;
pub use export::{export_filename, to_csv, write_export};
pub use filter::{filter, ExpenseFilters};
pub use import::from_csv;
pub use model::{Amount, AmountError, Category, Expense, ExpenseUpdate};
pub use store::{ExpenseRepository, FileStorage, MemoryStorage, Storage, EXPENSES_KEY};
pub use summary::{summarize, ExpenseSummary};
