//! Expense Recorder - a small terminal expense tracker
//!
//! Records expenses against named categories, keeps everything in a single
//! JSON file and summarizes spending over trailing periods with a pie chart.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and settings
//! - `error`: Custom error types
//! - `models`: Expenses, money amounts, categories and summary periods
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging of created records
//! - `reports`: Per-category spending summaries
//! - `chart`: Pie chart layout and SVG output
//! - `cli`: The interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_recorder::config::{ExpensePaths, Settings};
//! use expense_recorder::storage::ExpenseStore;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let (store, outcome) = ExpenseStore::load(paths.data_file());
//! ```

pub mod audit;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::ExpenseError;
