//! Expense service
//!
//! Business logic for recording expenses.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseValidationError, Money};
use crate::storage::ExpenseStore;

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub amount: Money,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a mut ExpenseStore,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a mut ExpenseStore) -> Self {
        Self { store }
    }

    /// Record a new expense and persist the store
    ///
    /// If the store cannot be saved the expense is not kept in memory either.
    pub fn create(&mut self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        let expense = Expense::new(input.amount, input.description, input.category, input.date);

        expense
            .validate(self.store.categories())
            .map_err(|e| match e {
                ExpenseValidationError::UnknownCategory(name) => {
                    ExpenseError::category_not_found(name)
                }
                other => ExpenseError::Validation(other.to_string()),
            })?;

        self.store.insert_expense(expense.clone())?;

        let position = self.store.expenses().len() - 1;
        self.store.log_create(
            EntityType::Expense,
            format!("expense-{}", position),
            Some(expense.description.clone()),
            &expense,
        );
        tracing::info!(
            amount = %expense.amount,
            category = %expense.category,
            "recorded expense"
        );

        Ok(expense)
    }
}
