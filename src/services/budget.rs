//! Budget service
//!
//! Sets and removes per-category budgets. Like transaction changes, every
//! budget change is saved and immediately reconciled against the current
//! month's spending.

use chrono::NaiveDate;

use crate::error::{FinflowError, FinflowResult};
use crate::models::{Budget, Category, Money};
use crate::storage::Storage;

use super::reconciliation::{reconcile_storage, Reconciliation};

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
    reference_date: NaiveDate,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage, reference_date: NaiveDate) -> Self {
        Self {
            storage,
            reference_date,
        }
    }

    /// Set the monthly ceiling for a category, creating the budget if needed
    ///
    /// Returns the budget as it stands after reconciliation.
    pub fn set(&self, category: Category, amount: Money) -> FinflowResult<Budget> {
        Budget::new(category, amount).validate()?;

        let existed = self.storage.budgets.get(category)?.is_some();
        self.storage.budgets.set_amount(category, amount)?;
        self.storage.budgets.save()?;
        reconcile_storage(self.storage, self.reference_date)?;

        if existed {
            tracing::info!(category = %category, amount = %amount, "updated budget");
        } else {
            tracing::info!(category = %category, amount = %amount, "created budget");
        }

        self.storage
            .budgets
            .get(category)?
            .ok_or_else(|| FinflowError::budget_not_found(category.name()))
    }

    /// Remove a category's budget
    pub fn remove(&self, category: Category) -> FinflowResult<Budget> {
        let removed = self.storage.budgets.remove(category)?;
        self.storage.budgets.save()?;
        tracing::info!(category = %category, "removed budget");
        Ok(removed)
    }

    /// Get the budget for a category
    pub fn get(&self, category: Category) -> FinflowResult<Option<Budget>> {
        self.storage.budgets.get(category)
    }

    /// All budgets, in the order they were first set
    pub fn list(&self) -> FinflowResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    /// Recompute `spent` for all budgets, saving only if something changed
    pub fn reconcile(&self) -> FinflowResult<Reconciliation> {
        reconcile_storage(self.storage, self.reference_date)
    }
}
