//! Pie chart geometry
//!
//! Angles are in degrees, counter-clockwise from the positive x-axis. The
//! first slice starts at the chart's start angle and later slices follow
//! counter-clockwise.

use crate::reports::ExpenseSummary;

/// One labelled value in a pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

/// A slice placed on the circle
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub label: String,
    /// Share of the whole, between 0 and 1
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Wedge {
    /// Angle halfway through the wedge, where labels are placed
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Percentage label with one decimal, e.g. "12.5%"
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.fraction * 100.0)
    }

    /// Whether the wedge is the whole circle
    pub fn is_full_circle(&self) -> bool {
        self.end_angle - self.start_angle >= 360.0 - 1e-9
    }
}

/// Labels and sizes to draw as a pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub start_angle: f64,
    pub slices: Vec<Slice>,
}

impl PieChart {
    /// Create an empty chart
    pub fn new(title: impl Into<String>, start_angle: f64) -> Self {
        Self {
            title: title.into(),
            start_angle,
            slices: Vec::new(),
        }
    }

    /// One slice per category of the summary, in the summary's order
    pub fn from_summary(summary: &ExpenseSummary, title: impl Into<String>, start_angle: f64) -> Self {
        let mut chart = Self::new(title, start_angle);
        for entry in &summary.categories {
            chart.push(entry.category.clone(), entry.total.as_f64());
        }
        chart
    }

    /// Append a slice
    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.slices.push(Slice {
            label: label.into(),
            value,
        });
    }

    /// Category labels in slice order
    pub fn labels(&self) -> Vec<&str> {
        self.slices.iter().map(|s| s.label.as_str()).collect()
    }

    /// Slice sizes in slice order
    pub fn sizes(&self) -> Vec<f64> {
        self.slices.iter().map(|s| s.value).collect()
    }

    /// Sum of all positive slice values
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value.max(0.0)).sum()
    }

    /// Lay the slices out around the circle
    ///
    /// Slices with a non-positive value take no space and are skipped.
    pub fn wedges(&self) -> Vec<Wedge> {
        let total = self.total();
        if total <= 0.0 {
            return Vec::new();
        }

        let mut angle = self.start_angle;
        self.slices
            .iter()
            .filter(|s| s.value > 0.0)
            .map(|s| {
                let fraction = s.value / total;
                let start_angle = angle;
                angle += fraction * 360.0;
                Wedge {
                    label: s.label.clone(),
                    fraction,
                    start_angle,
                    end_angle: angle,
                }
            })
            .collect()
    }
}
