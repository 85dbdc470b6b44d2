//! Add-expense flow

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use crate::models::{Money, MoneyParseError};
use crate::services::{CreateExpenseInput, ExpenseService};
use crate::storage::ExpenseStore;

use super::category::choose_category;
use super::prompt::Prompter;

/// Prompt for an expense and record it dated `today`
///
/// A bad amount abandons the operation without retrying. Nothing is written
/// unless every answer was usable.
pub fn add_expense<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    store: &mut ExpenseStore,
    today: NaiveDate,
) -> io::Result<()> {
    let Some(amount_str) = prompter.prompt("Enter amount spent: ")? else {
        return Ok(());
    };

    let amount = match Money::parse(&amount_str) {
        Ok(amount) => amount,
        Err(MoneyParseError::OutOfRange) => {
            return prompter.say(format!(
                "Invalid amount. The largest accepted amount is {}.",
                Money::MAX
            ));
        }
        Err(e) => {
            tracing::debug!(error = %e, "rejected amount");
            return prompter.say("Invalid amount. Please enter a numeric value.");
        }
    };
    if !amount.is_positive() {
        return prompter.say("Invalid amount. Please enter a value greater than zero.");
    }

    let Some(description) = prompter.prompt("Enter description: ")? else {
        return Ok(());
    };

    let Some(category) = choose_category(prompter, store)? else {
        return prompter.say("Expense not recorded.");
    };

    let input = CreateExpenseInput {
        amount,
        description,
        category,
        date: today,
    };

    match ExpenseService::new(store).create(input) {
        Ok(_) => prompter.say("Expense added successfully."),
        Err(e) => {
            tracing::warn!(error = %e, "failed to record expense");
            prompter.say(format!("Could not record expense: {}", e))
        }
    }
}
