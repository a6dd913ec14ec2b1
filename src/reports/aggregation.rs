//! Transaction aggregation
//!
//! Pure functions that turn the flat transaction log into the aggregated
//! views the reports are built from. Every function takes the full list and
//! returns a fresh value; the reference date for "this month" is always an
//! explicit argument so results never depend on the system clock.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Category, CategoryPalette, Money, Transaction, TransactionType};

/// Number of most recent months kept by [`monthly_expense_series`]
pub const MONTHLY_SERIES_WINDOW: usize = 6;

/// Total expenses for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyExpense {
    pub year: i32,
    /// 1-based month
    pub month: u32,
    /// Short month and year, e.g. `Mar 2024`
    pub label: String,
    pub amount: Money,
}

/// Total expenses for one category, with its chart color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryExpense {
    pub category: Category,
    pub amount: Money,
    pub color: String,
}

/// Expense totals per calendar month, oldest first, limited to the most
/// recent [`MONTHLY_SERIES_WINDOW`] months that have any expenses
///
/// Months without expenses are absent rather than zero-filled.
pub fn monthly_expense_series(transactions: &[Transaction]) -> Vec<MonthlyExpense> {
    let mut buckets: BTreeMap<(i32, u32), (NaiveDate, Money)> = BTreeMap::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        let entry = buckets
            .entry((txn.date.year(), txn.date.month()))
            .or_insert((txn.date, Money::zero()));
        entry.1 += txn.amount;
    }

    let skip = buckets.len().saturating_sub(MONTHLY_SERIES_WINDOW);
    buckets
        .into_iter()
        .skip(skip)
        .map(|((year, month), (date, amount))| MonthlyExpense {
            year,
            month,
            label: date.format("%b %Y").to_string(),
            amount,
        })
        .collect()
}

/// Expense totals per category in first-appearance order, unsorted
pub fn category_expense_totals(transactions: &[Transaction]) -> Vec<(Category, Money)> {
    let mut totals: Vec<(Category, Money)> = Vec::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        match totals.iter_mut().find(|(c, _)| *c == txn.category) {
            Some((_, total)) => *total += txn.amount,
            None => totals.push((txn.category, txn.amount)),
        }
    }

    totals
}

/// Expense totals per category, largest first, each tagged with its color
///
/// Categories with equal totals keep the order in which they first appear
/// in `transactions`.
pub fn category_expense_breakdown(
    transactions: &[Transaction],
    palette: &CategoryPalette,
) -> Vec<CategoryExpense> {
    let mut totals = category_expense_totals(transactions);
    // sort_by is stable, which gives the first-appearance tie-break
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    totals
        .into_iter()
        .map(|(category, amount)| CategoryExpense {
            category,
            amount,
            color: palette.color_for(category).to_string(),
        })
        .collect()
}

/// Transactions dated in the same calendar month and year as `reference_date`
pub fn current_month_transactions(
    transactions: &[Transaction],
    reference_date: NaiveDate,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.in_month_of(reference_date))
        .cloned()
        .collect()
}

/// Sum of amounts for transactions of the given type
pub fn total_by_type(transactions: &[Transaction], kind: TransactionType) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}
