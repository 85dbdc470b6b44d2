//! Summary view: text breakdown followed by a pie chart

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use crate::chart::{ChartRenderer, PieChart};
use crate::config::Settings;
use crate::models::SummaryPeriod;
use crate::reports::ExpenseSummary;
use crate::storage::ExpenseStore;

use super::prompt::Prompter;

/// Print the summary for `period` and draw its chart
///
/// The chart is skipped when the period has no expenses. After a chart is
/// written the view waits for Enter before handing control back.
pub fn view_summary<R, W, C>(
    prompter: &mut Prompter<R, W>,
    store: &ExpenseStore,
    settings: &Settings,
    renderer: &mut C,
    period: SummaryPeriod,
    today: NaiveDate,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    C: ChartRenderer + ?Sized,
{
    let summary = ExpenseSummary::generate(store.expenses(), period, today);
    tracing::debug!(%period, expenses = summary.expense_count, "generated summary");
    prompter.write_raw(&summary.format_terminal(&settings.currency_symbol))?;

    if summary.is_empty() {
        return Ok(());
    }

    let chart = PieChart::from_summary(&summary, settings.chart_title.as_str(), settings.chart_start_angle);
    match renderer.render(&chart) {
        Ok(path) => {
            prompter.say(format!("Pie chart saved to {}", path.display()))?;
            prompter.prompt("Press Enter to return to the menu...")?;
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to render chart");
            prompter.say(format!("Could not draw chart: {}", e))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExpenseError, ExpenseResult};
    use crate::models::Money;
    use crate::services::{CreateExpenseInput, ExpenseService};
    use std::io::Cursor;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingRenderer {
        charts: Vec<PieChart>,
        fail: bool,
    }

    impl ChartRenderer for RecordingRenderer {
        fn render(&mut self, chart: &PieChart) -> ExpenseResult<PathBuf> {
            if self.fail {
                return Err(ExpenseError::Chart("no display".into()));
            }
            self.charts.push(chart.clone());
            Ok(PathBuf::from("chart.svg"))
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn seeded_store(temp_dir: &TempDir) -> ExpenseStore {
        let mut store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        let entries = [
            (3000, "Weekly shop", "Groceries", today()),
            (1000, "Bus", "Transportation", today()),
            (2000, "Power", "Utilities", today() - chrono::Duration::days(5)),
        ];
        for (cents, description, category, date) in entries {
            ExpenseService::new(&mut store)
                .create(CreateExpenseInput {
                    amount: Money::from_cents(cents),
                    description: description.into(),
                    category: category.into(),
                    date,
                })
                .unwrap();
        }
        store
    }

    fn run(
        input: &str,
        store: &ExpenseStore,
        renderer: &mut RecordingRenderer,
        period: SummaryPeriod,
    ) -> String {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        view_summary(&mut prompter, store, &Settings::default(), renderer, period, today()).unwrap();
        let (_, output) = prompter.into_inner();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_daily_summary_draws_chart() {
        let temp_dir = TempDir::new().unwrap();
        let store = seeded_store(&temp_dir);
        let mut renderer = RecordingRenderer::default();

        let output = run("\n", &store, &mut renderer, SummaryPeriod::Daily);

        assert!(output.contains("Summary (Daily):"));
        assert!(output.contains("Total Spent: $40.00"));
        assert!(!output.contains("Utilities"));
        assert!(output.contains("Pie chart saved to chart.svg"));

        assert_eq!(renderer.charts.len(), 1);
        let chart = &renderer.charts[0];
        assert_eq!(chart.labels(), vec!["Groceries", "Transportation"]);
        assert_eq!(chart.sizes(), vec![30.0, 10.0]);
        assert_eq!(chart.start_angle, 140.0);
    }

    #[test]
    fn test_weekly_summary_includes_older_expenses() {
        let temp_dir = TempDir::new().unwrap();
        let store = seeded_store(&temp_dir);
        let mut renderer = RecordingRenderer::default();

        let output = run("\n", &store, &mut renderer, SummaryPeriod::Weekly);

        assert!(output.contains("Total Spent: $60.00"));
        assert_eq!(renderer.charts[0].labels().len(), 3);
    }

    #[test]
    fn test_empty_period_skips_chart() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        let mut renderer = RecordingRenderer::default();

        let output = run("", &store, &mut renderer, SummaryPeriod::Monthly);

        assert!(output.contains("No expenses found for the selected period."));
        assert!(!output.contains("Total Spent"));
        assert!(renderer.charts.is_empty());
    }

    #[test]
    fn test_render_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let store = seeded_store(&temp_dir);
        let mut renderer = RecordingRenderer {
            fail: true,
            ..Default::default()
        };

        let output = run("", &store, &mut renderer, SummaryPeriod::Daily);

        assert!(output.contains("Total Spent: $40.00"));
        assert!(output.contains("Could not draw chart"));
        assert!(!output.contains("Press Enter"));
    }
}
