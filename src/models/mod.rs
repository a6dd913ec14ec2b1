//! Core data models for FinFlow
//!
//! This module contains the data structures that represent the finance
//! domain: transactions, budgets, categories and money amounts.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use budget::{Budget, BudgetStatus, DEFAULT_WARNING_THRESHOLD};
pub use category::{Category, CategoryPalette, FALLBACK_COLOR};
pub use ids::TransactionId;
pub use money::Money;
pub use transaction::{Transaction, TransactionType};
