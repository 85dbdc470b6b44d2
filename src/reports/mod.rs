//! Reports module for the expense recorder
//!
//! Provides the periodic spending summary broken down by category.

pub mod summary;

pub use summary::{CategoryTotal, ExpenseSummary};
