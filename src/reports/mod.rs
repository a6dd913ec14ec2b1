//! Reports module for FinFlow
//!
//! The aggregation functions that derive every view from the transaction
//! log, and the reports built on top of them: monthly summary, budget
//! progress and spending trends.

pub mod aggregation;
pub mod budget_progress;
pub mod spending;
pub mod summary;

pub use aggregation::{
    category_expense_breakdown, category_expense_totals, current_month_transactions,
    monthly_expense_series, total_by_type, CategoryExpense, MonthlyExpense,
    MONTHLY_SERIES_WINDOW,
};
pub use budget_progress::{budget_progress, BudgetProgress};
pub use spending::{SpendingReport, SpendingScope};
pub use summary::MonthlySummary;
