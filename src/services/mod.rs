//! Service layer for FinFlow
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and keeping budgets reconciled with transactions.

pub mod budget;
pub mod reconciliation;
pub mod transaction;

pub use budget::BudgetService;
pub use reconciliation::{reconcile, reconcile_budgets, reconcile_storage, Reconciliation};
pub use transaction::{
    CreateTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
};
