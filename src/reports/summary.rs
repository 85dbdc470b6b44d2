//! Expense summary
//!
//! Totals and per-category subtotals for the expenses in a period.

use chrono::NaiveDate;

use crate::models::{Expense, Money, SummaryPeriod};

/// Width of the bar drawn next to each category
const BAR_WIDTH: usize = 20;

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Sum of amounts
    pub total: Money,
    /// Number of expenses
    pub expense_count: usize,
    /// Percentage of the summary total
    pub percentage: f64,
}

impl CategoryTotal {
    /// Bar of `BAR_WIDTH` cells, filled in proportion to this category's share
    /// of `whole`, rounded to the nearest cell
    fn share_bar(&self, whole: Money) -> String {
        let filled = if whole.is_positive() && self.total.is_positive() {
            let scaled = i128::from(self.total.cents()) * BAR_WIDTH as i128;
            let whole = i128::from(whole.cents());
            ((scaled + whole / 2) / whole).min(BAR_WIDTH as i128) as usize
        } else {
            0
        };
        format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
    }
}

/// Summary of the expenses in a period
#[derive(Debug, Clone)]
pub struct ExpenseSummary {
    /// Period the summary covers
    pub period: SummaryPeriod,
    /// Earliest included date, `None` for all-time summaries
    pub start_date: Option<NaiveDate>,
    /// The day the summary was generated for
    pub end_date: NaiveDate,
    /// Sum of all included amounts
    pub total: Money,
    /// Number of included expenses
    pub expense_count: usize,
    /// Per-category subtotals in order of first appearance
    pub categories: Vec<CategoryTotal>,
}

impl ExpenseSummary {
    /// Summarize the expenses that fall in `period` ending on `today`
    pub fn generate(expenses: &[Expense], period: SummaryPeriod, today: NaiveDate) -> Self {
        let mut categories: Vec<CategoryTotal> = Vec::new();
        let mut total = Money::zero();
        let mut expense_count = 0;

        for expense in expenses.iter().filter(|e| period.contains(e.date, today)) {
            total += expense.amount;
            expense_count += 1;

            match categories.iter_mut().find(|c| c.category == expense.category) {
                Some(entry) => {
                    entry.total += expense.amount;
                    entry.expense_count += 1;
                }
                None => categories.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: expense.amount,
                    expense_count: 1,
                    percentage: 0.0,
                }),
            }
        }

        for entry in &mut categories {
            entry.percentage = entry.total.percentage_of(total);
        }

        Self {
            period,
            start_date: period.cutoff(today),
            end_date: today,
            total,
            expense_count,
            categories,
        }
    }

    /// Whether no expenses fell in the period
    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.is_empty() {
            return "No expenses found for the selected period.\n".to_string();
        }

        let mut output = String::new();

        output.push_str(&format!("\nSummary ({}):\n", self.period.label()));
        if let Some(start) = self.start_date {
            output.push_str(&format!("Period: {} to {}\n", start, self.end_date));
        }
        output.push_str(&format!(
            "Total Spent: {}\n",
            self.total.format_with_symbol(currency_symbol)
        ));

        // "<category>: <amount>" first, share details after
        for entry in &self.categories {
            output.push_str(&format!(
                "{}: {} ({:.1}%) {}\n",
                entry.category,
                entry.total.format_with_symbol(currency_symbol),
                entry.percentage,
                entry.share_bar(self.total),
            ));
        }

        output
    }
}
