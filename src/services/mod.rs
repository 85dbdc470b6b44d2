//! Business logic layer for the expense recorder
//!
//! Services borrow the store mutably, validate input, apply the change,
//! persist it and record it in the audit log.

pub mod category;
pub mod expense;

pub use category::CategoryService;
pub use expense::{CreateExpenseInput, ExpenseService};
