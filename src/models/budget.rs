//! Budget model
//!
//! A monthly spending ceiling for one category. The `spent` field is derived
//! from the current month's expense transactions and is only ever written by
//! budget reconciliation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// Default percentage above which a budget is flagged as nearing its limit
pub const DEFAULT_WARNING_THRESHOLD: u8 = 80;

/// A per-category monthly budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// The category this budget caps
    pub category: Category,

    /// Ceiling set by the user
    pub amount: Money,

    /// Current-month expenses in this category, as of the last reconciliation
    #[serde(default)]
    pub spent: Money,
}

impl Budget {
    /// Create a budget with nothing spent yet
    pub fn new(category: Category, amount: Money) -> Self {
        Self {
            category,
            amount,
            spent: Money::zero(),
        }
    }

    /// Amount left before hitting the ceiling (never negative)
    pub fn remaining(&self) -> Money {
        (self.amount - self.spent).clamp_non_negative()
    }

    /// Amount spent beyond the ceiling (never negative)
    pub fn overage(&self) -> Money {
        (self.spent - self.amount).clamp_non_negative()
    }

    /// Percentage of the ceiling already spent (unclamped)
    pub fn percent_used(&self) -> f64 {
        self.spent.percent_of(self.amount)
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.amount
    }

    /// Classify this budget's consumption
    pub fn status(&self, warning_threshold: u8) -> BudgetStatus {
        let percent = self.percent_used();
        if percent > 100.0 {
            BudgetStatus::OverBudget
        } else if percent > f64::from(warning_threshold) {
            BudgetStatus::Warning
        } else {
            BudgetStatus::OnTrack
        }
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.amount.is_positive() {
            return Err(BudgetValidationError::NonPositiveAmount(self.amount));
        }
        if self.spent.is_negative() {
            return Err(BudgetValidationError::NegativeSpent(self.spent));
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} / {}", self.category, self.spent, self.amount)
    }
}

/// How much of a budget has been consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OnTrack,
    Warning,
    OverBudget,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnTrack => f.pad("On Track"),
            Self::Warning => f.pad("Warning"),
            Self::OverBudget => f.pad("Over Budget"),
        }
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveAmount(Money),
    NegativeSpent(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Budget amount must be positive, got {}", amount)
            }
            Self::NegativeSpent(spent) => write!(f, "Budget spent cannot be negative: {}", spent),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
