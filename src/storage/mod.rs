//! Storage layer for the expense recorder
//!
//! A single JSON document holds the category list and every expense. Writes
//! are atomic and a damaged file is set aside rather than overwritten.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseStore, LoadOutcome, StoreData};
pub use file_io::{read_json_optional, write_json_atomic};
