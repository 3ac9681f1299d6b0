//! Types that represent the core data model, such as `Expense` and `Category`.
mod amount;
mod category;
mod expense;

pub use amount::{Amount, AmountError};
pub use category::Category;
pub(crate) use expense::validate;
pub use expense::{Expense, ExpenseUpdate};
