//! Interactive category picker

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::services::CategoryService;
use crate::storage::ExpenseStore;

use super::prompt::Prompter;

/// A valid answer to the category menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryChoice {
    /// Index (0-based) into the category list
    Existing(usize),
    /// The trailing "Add new category" entry
    AddNew,
}

/// Why a category menu answer was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChoiceError {
    NotANumber,
    OutOfRange(i64),
}

impl fmt::Display for CategoryChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => write!(f, "Invalid input. Please enter a number."),
            Self::OutOfRange(_) => write!(f, "Invalid choice. Please try again."),
        }
    }
}

impl CategoryChoice {
    /// Interpret a 1-based menu answer for a list of `count` categories
    ///
    /// Numbers 1..=count pick a category and count + 1 adds a new one.
    pub fn parse(input: &str, count: usize) -> Result<Self, CategoryChoiceError> {
        let number: i64 = input
            .trim()
            .parse()
            .map_err(|_| CategoryChoiceError::NotANumber)?;

        match usize::try_from(number) {
            Ok(n) if (1..=count).contains(&n) => Ok(Self::Existing(n - 1)),
            Ok(n) if n == count + 1 => Ok(Self::AddNew),
            _ => Err(CategoryChoiceError::OutOfRange(number)),
        }
    }
}

/// Ask the user to pick a category or create one
///
/// Keeps asking until the answer is usable. Returns `None` when input runs
/// out or a new category could not be saved; the caller abandons the expense.
pub fn choose_category<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    store: &mut ExpenseStore,
) -> io::Result<Option<String>> {
    loop {
        prompter.say("\nExpense Categories:")?;
        for (i, name) in store.categories().iter().enumerate() {
            prompter.say(format!("{}. {}", i + 1, name))?;
        }
        let count = store.categories().len();
        prompter.say(format!("{}. Add new category", count + 1))?;

        let Some(answer) = prompter.prompt("Choose a category number: ")? else {
            return Ok(None);
        };

        match CategoryChoice::parse(&answer, count) {
            Ok(CategoryChoice::Existing(index)) => {
                return Ok(Some(store.categories()[index].clone()));
            }
            Ok(CategoryChoice::AddNew) => {
                let Some(raw_name) = prompter.prompt("Enter new category name: ")? else {
                    return Ok(None);
                };

                match CategoryService::new(store).add(&raw_name) {
                    Ok(name) => return Ok(Some(name)),
                    Err(e) if e.is_duplicate() || e.is_validation() => {
                        tracing::debug!(error = %e, "rejected category name");
                        prompter.say("Invalid or duplicate category name.")?;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to save new category");
                        prompter.say(format!("Could not save category: {}", e))?;
                        return Ok(None);
                    }
                }
            }
            Err(e) => prompter.say(e.to_string())?,
        }
    }
}
