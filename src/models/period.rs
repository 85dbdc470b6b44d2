//! Summary periods
//!
//! A period is a trailing window ending today. "All" has no lower bound.

use chrono::{Duration, NaiveDate};
use std::fmt;

/// Named time window used to filter expenses for a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryPeriod {
    /// The last day (today and yesterday)
    Daily,
    /// The last 7 days
    Weekly,
    /// The last 30 days
    Monthly,
    /// Every recorded expense
    All,
}

impl SummaryPeriod {
    /// Length of the trailing window in days, `None` for `All`
    pub const fn window_days(&self) -> Option<i64> {
        match self {
            Self::Daily => Some(1),
            Self::Weekly => Some(7),
            Self::Monthly => Some(30),
            Self::All => None,
        }
    }

    /// Earliest included date, `None` when the period is unbounded
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.window_days()
            .and_then(|days| today.checked_sub_signed(Duration::days(days)))
    }

    /// Whether `date` falls inside the period ending on `today` (inclusive)
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.cutoff(today) {
            Some(cutoff) => date >= cutoff,
            None => true,
        }
    }

    /// Capitalized name for headings, e.g. "Weekly"
    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::All => "All",
        }
    }
}

impl fmt::Display for SummaryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::All => "all",
        };
        f.write_str(name)
    }
}
