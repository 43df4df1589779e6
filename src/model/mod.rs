//! Types that represent the core data model, such as `Transaction` and `CategoryRules`.
mod amount;
mod category;
mod transaction;

pub use amount::{Amount, AmountError};
pub use category::{CategoryRule, CategoryRules, OTHER};
pub(crate) use transaction::StatementRow;
pub use transaction::Transaction;
