//! Main menu loop

use std::fmt;
use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};

use crate::chart::ChartRenderer;
use crate::config::Settings;
use crate::models::SummaryPeriod;
use crate::storage::{ExpenseStore, LoadOutcome};

use super::expense::add_expense;
use super::prompt::Prompter;
use super::summary::view_summary;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    Summary(SummaryPeriod),
    Exit,
}

/// A menu answer that is not one of the listed options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuChoiceError(pub String);

impl fmt::Display for MenuChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid choice. Please try again.")
    }
}

impl MenuChoice {
    pub fn parse(input: &str) -> Result<Self, MenuChoiceError> {
        match input.trim() {
            "1" => Ok(Self::AddExpense),
            "2" => Ok(Self::Summary(SummaryPeriod::Daily)),
            "3" => Ok(Self::Summary(SummaryPeriod::Weekly)),
            "4" => Ok(Self::Summary(SummaryPeriod::Monthly)),
            "5" => Ok(Self::Exit),
            other => Err(MenuChoiceError(other.to_string())),
        }
    }
}

const MENU: &str = "\nExpense Recorder Menu:\n\
                    1. Add Expense\n\
                    2. View Daily Summary\n\
                    3. View Weekly Summary\n\
                    4. View Monthly Summary\n\
                    5. Exit";

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// The interactive expense recorder session
pub struct ExpenseRecorder<C> {
    store: ExpenseStore,
    settings: Settings,
    renderer: C,
    today: fn() -> NaiveDate,
}

impl<C: ChartRenderer> ExpenseRecorder<C> {
    pub fn new(store: ExpenseStore, settings: Settings, renderer: C) -> Self {
        Self {
            store,
            settings,
            renderer,
            today: local_today,
        }
    }

    /// Replace the clock used to date new expenses and anchor summaries
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Run the menu until the user exits or input ends
    pub fn run<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> io::Result<()> {
        loop {
            prompter.say(MENU)?;

            let Some(answer) = prompter.prompt("Choose an option: ")? else {
                tracing::debug!("input closed, leaving menu");
                break;
            };

            let choice = match MenuChoice::parse(&answer) {
                Ok(choice) => choice,
                Err(e) => {
                    prompter.say(e.to_string())?;
                    continue;
                }
            };

            let today = (self.today)();
            match choice {
                MenuChoice::AddExpense => add_expense(prompter, &mut self.store, today)?,
                MenuChoice::Summary(period) => view_summary(
                    prompter,
                    &self.store,
                    &self.settings,
                    &mut self.renderer,
                    period,
                    today,
                )?,
                MenuChoice::Exit => break,
            }
        }

        prompter.say("Exiting the program. Goodbye!")
    }
}

/// Tell the user when the saved data could not be used
pub fn report_load_outcome<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    outcome: &LoadOutcome,
) -> io::Result<()> {
    if !outcome.is_fallback() {
        return Ok(());
    }

    prompter.say("No previous data found or file is corrupted. Starting fresh.")?;
    if let LoadOutcome::Corrupt {
        preserved: Some(path),
        ..
    } = outcome
    {
        prompter.say(format!("The unreadable file was copied to {}", path.display()))?;
    }
    Ok(())
}
