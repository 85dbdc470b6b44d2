//! Core data models for the expense recorder
//!
//! Expenses, amounts, category name rules and summary periods.

pub mod category;
pub mod expense;
pub mod money;
pub mod period;

pub use category::{default_categories, CategoryValidationError, DEFAULT_CATEGORIES};
pub use expense::{Expense, ExpenseValidationError};
pub use money::{Money, MoneyParseError};
pub use period::SummaryPeriod;
