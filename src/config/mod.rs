//! Configuration module for the expense recorder
//!
//! This module provides configuration management including:
//! - Path resolution for the data file, chart, settings and audit log
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
