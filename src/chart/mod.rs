//! Pie chart rendering
//!
//! `PieChart` holds the labels and sizes, `ChartRenderer` is the seam the
//! menu draws through, and `SvgChartRenderer` is the shipped backend.

pub mod pie;
pub mod render;

use std::path::PathBuf;

use crate::error::ExpenseResult;

pub use pie::{PieChart, Slice, Wedge};
pub use render::SvgChartRenderer;

/// Something that can draw a pie chart
pub trait ChartRenderer {
    /// Draw the chart, returning where the result can be viewed
    fn render(&mut self, chart: &PieChart) -> ExpenseResult<PathBuf>;
}
