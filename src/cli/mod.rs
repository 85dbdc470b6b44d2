//! Interactive terminal front end
//!
//! The menu loop and the flows it dispatches to. Everything reads and writes
//! through a [`Prompter`] so the whole session can be scripted in tests.

pub mod category;
pub mod expense;
pub mod menu;
pub mod prompt;
pub mod summary;

pub use category::{choose_category, CategoryChoice, CategoryChoiceError};
pub use expense::add_expense;
pub use menu::{report_load_outcome, ExpenseRecorder, MenuChoice, MenuChoiceError};
pub use prompt::Prompter;
pub use summary::view_summary;
