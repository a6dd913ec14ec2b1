//! Display formatting for terminal output
//!
//! Plain-text formatting of transactions and categories. Report tables live
//! with their reports in [`crate::reports`].

pub mod category;
pub mod transaction;

pub use category::format_category_list;
pub use transaction::{format_transaction_details, format_transaction_register};
