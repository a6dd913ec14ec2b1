//! Budget reconciliation
//!
//! Keeps each budget's `spent` field consistent with the current month's
//! expense transactions. Reconciliation never adds or removes budgets and
//! never reorders them; only `spent` values change.

use chrono::NaiveDate;

use crate::error::FinflowResult;
use crate::models::{Budget, Money, Transaction};
use crate::reports::aggregation::{category_expense_totals, current_month_transactions};
use crate::storage::Storage;

/// Result of reconciling a budget list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// The budgets with recomputed `spent` values, in the input order
    pub budgets: Vec<Budget>,
    /// Whether any budget differs from the input list
    pub changed: bool,
}

/// Recompute `spent` for every budget from `transactions`
///
/// A budget whose category has no expenses in the month of
/// `reference_date` ends up with `spent = 0`.
pub fn reconcile_budgets(
    budgets: &[Budget],
    transactions: &[Transaction],
    reference_date: NaiveDate,
) -> Vec<Budget> {
    let current = current_month_transactions(transactions, reference_date);
    let totals = category_expense_totals(&current);

    budgets
        .iter()
        .map(|budget| {
            let spent = totals
                .iter()
                .find(|(category, _)| *category == budget.category)
                .map(|(_, amount)| *amount)
                .unwrap_or_else(Money::zero);
            Budget {
                spent,
                ..budget.clone()
            }
        })
        .collect()
}

/// Reconcile and report whether anything changed
///
/// The comparison is order-sensitive. Because the budget store keeps a fixed
/// insertion order and reconciliation preserves it, an already-consistent
/// list always reports `changed == false`.
pub fn reconcile(
    budgets: &[Budget],
    transactions: &[Transaction],
    reference_date: NaiveDate,
) -> Reconciliation {
    let reconciled = reconcile_budgets(budgets, transactions, reference_date);
    let changed = reconciled.as_slice() != budgets;
    Reconciliation {
        budgets: reconciled,
        changed,
    }
}

/// Reconcile the stored budgets against the stored transactions, writing
/// budgets back to disk only when something changed
pub fn reconcile_storage(
    storage: &Storage,
    reference_date: NaiveDate,
) -> FinflowResult<Reconciliation> {
    let budgets = storage.budgets.get_all()?;
    let transactions = storage.transactions.get_all()?;

    let outcome = reconcile(&budgets, &transactions, reference_date);

    if outcome.changed {
        storage.budgets.replace_all(outcome.budgets.clone())?;
        storage.budgets.save()?;
        tracing::info!(
            budgets = outcome.budgets.len(),
            month = %reference_date.format("%Y-%m"),
            "budget spending updated"
        );
    } else {
        tracing::debug!("budgets already reconciled");
    }

    Ok(outcome)
}
