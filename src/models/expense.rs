//! Expense model
//!
//! One recorded spending event. Expenses are created once and never edited.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A single spending event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent, always positive
    pub amount: Money,

    /// Free-text description
    pub description: String,

    /// Name of the category this expense belongs to
    pub category: String,

    /// Calendar date the expense was recorded (`YYYY-MM-DD` on disk)
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            category: category.into(),
            date,
        }
    }

    /// Validate the expense against the known categories
    pub fn validate(&self, categories: &[String]) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if !categories.iter().any(|c| *c == self.category) {
            return Err(ExpenseValidationError::UnknownCategory(self.category.clone()));
        }

        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    UnknownCategory(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero, got {}", amount)
            }
            Self::UnknownCategory(name) => write!(f, "Unknown category: {}", name),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn categories() -> Vec<String> {
        vec!["Groceries".into(), "Transportation".into()]
    }

    #[test]
    fn test_validate() {
        let expense = Expense::new(Money::from_cents(4250), "Bus", "Transportation", date("2025-01-15"));
        assert!(expense.validate(&categories()).is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let zero = Expense::new(Money::zero(), "Nothing", "Groceries", date("2025-01-15"));
        assert!(matches!(
            zero.validate(&categories()),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));

        let negative = Expense::new(Money::from_cents(-100), "Refund", "Groceries", date("2025-01-15"));
        assert!(negative.validate(&categories()).is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_category() {
        let expense = Expense::new(Money::from_cents(100), "Movie", "Entertainment", date("2025-01-15"));
        assert_eq!(
            expense.validate(&categories()),
            Err(ExpenseValidationError::UnknownCategory("Entertainment".into()))
        );
    }

    #[test]
    fn test_serialization_shape() {
        let expense = Expense::new(Money::from_cents(4250), "Bus", "Transportation", date("2025-01-15"));
        let json = serde_json::to_value(&expense).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "amount": 42.5,
                "description": "Bus",
                "category": "Transportation",
                "date": "2025-01-15"
            })
        );

        let back: Expense = serde_json::from_value(json).unwrap();
        assert_eq!(back, expense);
    }

    #[test]
    fn test_rejects_bad_date() {
        let json = r#"{"amount": 1.0, "description": "x", "category": "Groceries", "date": "15/01/2025"}"#;
        assert!(serde_json::from_str::<Expense>(json).is_err());
    }
}
