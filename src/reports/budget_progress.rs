//! Budget Progress Report
//!
//! Shows each budget's consumption: how much is spent, what's left, and
//! whether it is on track, nearing its limit, or over.

use tabled::settings::{object::Columns, Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Budget, BudgetStatus, Category, Money};

/// Longest category label shown in the budget-vs-actual rows
const LABEL_WIDTH: usize = 12;

/// Consumption figures for one budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgress {
    pub category: Category,
    pub amount: Money,
    pub spent: Money,
    pub remaining: Money,
    pub overage: Money,
    /// Spent as a percentage of the ceiling, unclamped
    pub percent_used: f64,
    /// `percent_used` clamped to 100, for progress bars
    pub progress: f64,
    pub status: BudgetStatus,
}

impl BudgetProgress {
    /// Compute progress for one budget
    pub fn from_budget(budget: &Budget, warning_threshold: u8) -> Self {
        let percent_used = budget.percent_used();
        Self {
            category: budget.category,
            amount: budget.amount,
            spent: budget.spent,
            remaining: budget.remaining(),
            overage: budget.overage(),
            percent_used,
            progress: percent_used.min(100.0),
            status: budget.status(warning_threshold),
        }
    }

    /// Category name shortened for narrow chart-style rows
    pub fn short_label(&self) -> String {
        truncate_label(self.category.name(), LABEL_WIDTH)
    }
}

/// Compute progress for every budget, in the order given
pub fn budget_progress(budgets: &[Budget], warning_threshold: u8) -> Vec<BudgetProgress> {
    budgets
        .iter()
        .map(|b| BudgetProgress::from_budget(b, warning_threshold))
        .collect()
}

/// Shorten `label` to `width` characters, appending `...` when cut
pub fn truncate_label(label: &str, width: usize) -> String {
    if label.chars().count() > width {
        let head: String = label.chars().take(width).collect();
        format!("{}...", head)
    } else {
        label.to_string()
    }
}

#[derive(Tabled)]
struct ProgressRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budgeted")]
    budgeted: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Left / Over")]
    left: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Render budgets as a table for the terminal
pub fn format_progress_table(progress: &[BudgetProgress], currency_symbol: &str) -> String {
    if progress.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let rows: Vec<ProgressRow> = progress
        .iter()
        .map(|p| ProgressRow {
            category: p.category.name().to_string(),
            budgeted: p.amount.format_with_symbol(currency_symbol),
            spent: p.spent.format_with_symbol(currency_symbol),
            left: if p.overage.is_positive() {
                format!("{} over", p.overage.format_with_symbol(currency_symbol))
            } else {
                format!("{} left", p.remaining.format_with_symbol(currency_symbol))
            },
            used: format!("{:.1}%", p.percent_used),
            status: p.status.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..5)).with(Alignment::right()));

    let mut output = table.to_string();
    output.push('\n');
    output
}

/// Render budget vs. actual as horizontal bars, one line per budget
pub fn format_progress_bars(progress: &[BudgetProgress], bar_width: usize) -> String {
    let mut output = String::new();
    for p in progress {
        let filled = ((p.progress / 100.0) * bar_width as f64).round() as usize;
        let filled = filled.min(bar_width);
        output.push_str(&format!(
            "{:<15} [{}{}] {:>6.1}%\n",
            p.short_label(),
            "#".repeat(filled),
            " ".repeat(bar_width - filled),
            p.percent_used
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(category: Category, amount: i64, spent: i64) -> Budget {
        Budget {
            category,
            amount: Money::from_cents(amount),
            spent: Money::from_cents(spent),
        }
    }

    #[test]
    fn test_progress_figures() {
        let p = BudgetProgress::from_budget(&budget(Category::FoodDining, 10000, 5000), 80);
        assert_eq!(p.percent_used, 50.0);
        assert_eq!(p.progress, 50.0);
        assert_eq!(p.remaining, Money::from_cents(5000));
        assert_eq!(p.overage, Money::zero());
        assert_eq!(p.status, BudgetStatus::OnTrack);
    }

    #[test]
    fn test_progress_clamped_when_over() {
        let p = BudgetProgress::from_budget(&budget(Category::Shopping, 10000, 15000), 80);
        assert_eq!(p.percent_used, 150.0);
        assert_eq!(p.progress, 100.0);
        assert_eq!(p.overage, Money::from_cents(5000));
        assert_eq!(p.status, BudgetStatus::OverBudget);
    }

    #[test]
    fn test_budget_progress_keeps_order() {
        let list = budget_progress(
            &[
                budget(Category::Travel, 100, 90),
                budget(Category::FoodDining, 100, 10),
            ],
            80,
        );
        assert_eq!(list[0].category, Category::Travel);
        assert_eq!(list[0].status, BudgetStatus::Warning);
        assert_eq!(list[1].status, BudgetStatus::OnTrack);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Travel", 12), "Travel");
        assert_eq!(truncate_label("Bills & Utilities", 12), "Bills & Util...");
        assert_eq!(truncate_label("Food & Dining", 12), "Food & Dinin...");
    }

    #[test]
    fn test_progress_table() {
        let progress = budget_progress(&[budget(Category::Shopping, 10000, 15000)], 80);
        let output = format_progress_table(&progress, "$");
        assert!(output.contains("Shopping"));
        assert!(output.contains("$50.00 over"));
        assert!(output.contains("150.0%"));
        assert!(output.contains("Over Budget"));

        assert_eq!(format_progress_table(&[], "$"), "No budgets set.\n");
    }

    #[test]
    fn test_progress_bars() {
        let progress = budget_progress(&[budget(Category::Travel, 10000, 5000)], 80);
        let output = format_progress_bars(&progress, 10);
        assert!(output.contains("[#####     ]"));
        assert!(output.contains("50.0%"));
    }
}
