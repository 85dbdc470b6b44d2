use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use expense_recorder::audit::AuditLogger;
use expense_recorder::chart::SvgChartRenderer;
use expense_recorder::cli::{report_load_outcome, ExpenseRecorder, Prompter};
use expense_recorder::config::{paths::DIR_ENV_VAR, ExpensePaths, Settings};
use expense_recorder::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Record daily expenses and review spending by category",
    long_about = "An interactive expense recorder. Expenses are filed under \
                  categories, kept in expenses.json and summarized over the \
                  last day, week or month with a pie chart."
)]
struct Cli {
    /// Directory holding expenses.json, the chart and the audit log
    #[arg(short, long, env = DIR_ENV_VAR)]
    dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Initialize paths and settings
    let paths = match cli.dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    tracing::debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    // Load the store, falling back to defaults
    let (mut store, outcome) = ExpenseStore::load(paths.data_file());
    if settings.audit_enabled {
        store = store.with_audit(AuditLogger::new(paths.audit_log()));
    }

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    report_load_outcome(&mut prompter, &outcome).context("Failed to write to terminal")?;

    let renderer = SvgChartRenderer::new(paths.chart_file());
    let mut recorder = ExpenseRecorder::new(store, settings, renderer);
    recorder
        .run(&mut prompter)
        .context("Terminal input or output failed")?;

    Ok(())
}
