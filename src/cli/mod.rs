//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{FinflowError, FinflowResult};
use crate::models::Money;

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(value: &str) -> FinflowResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        FinflowError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", value))
    })
}

/// Parse a `YYYY-MM` month argument into the first day of that month
pub fn parse_month(value: &str) -> FinflowResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d").map_err(|_| {
        FinflowError::Validation(format!("Invalid month format: '{}'. Use YYYY-MM", value))
    })
}

/// Parse a positive amount argument such as `12.50` or `$12.50`
pub fn parse_amount(value: &str) -> FinflowResult<Money> {
    let amount = Money::parse(value).map_err(|e| {
        FinflowError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '50.00' or '100'. Error: {}",
            value, e
        ))
    })?;
    if !amount.is_positive() {
        return Err(FinflowError::Validation(format!(
            "Amount must be greater than zero, got '{}'",
            value
        )));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-05").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
        );
        assert!(parse_date("03/05/2024").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month("2024-02").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
        assert!(parse_month("2024-13").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap(), Money::from_cents(1250));
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("twelve").is_err());
    }
}
