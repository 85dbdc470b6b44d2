//! SVG rendering of pie charts

use std::path::PathBuf;

use svg::{
    node::element::{Circle, Path, Text},
    Document,
};

use super::pie::{PieChart, Wedge};
use super::ChartRenderer;
use crate::error::{ExpenseError, ExpenseResult};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const CENTER_X: f64 = 400.0;
const CENTER_Y: f64 = 320.0;
const RADIUS: f64 = 210.0;

const COLORS: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Point on the circle of radius `r` at `angle` degrees, in SVG coordinates
fn polar(r: f64, angle: f64) -> (f64, f64) {
    let rad = angle.to_radians();
    // SVG's y axis points down
    (CENTER_X + r * rad.cos(), CENTER_Y - r * rad.sin())
}

/// Escape markup characters; the svg crate writes text nodes verbatim
fn escape_text(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn text(x: f64, y: f64, anchor: &str, content: &str) -> Text {
    Text::new()
        .set("x", x)
        .set("y", y)
        .set("text-anchor", anchor)
        .set("font-family", "sans-serif")
        .add(svg::node::Text::new(escape_text(content)))
}

/// SVG path outline of a partial wedge
fn wedge_outline(wedge: &Wedge) -> String {
    let (x0, y0) = polar(RADIUS, wedge.start_angle);
    let (x1, y1) = polar(RADIUS, wedge.end_angle);
    let large_arc = u8::from(wedge.end_angle - wedge.start_angle > 180.0);

    // Counter-clockwise on screen is sweep-flag 0
    format!(
        "M {:.3} {:.3} L {:.3} {:.3} A {r:.3} {r:.3} 0 {} 0 {:.3} {:.3} Z",
        CENTER_X,
        CENTER_Y,
        x0,
        y0,
        large_arc,
        x1,
        y1,
        r = RADIUS,
    )
}

fn add_wedge(document: Document, wedge: &Wedge, color: &str) -> Document {
    if wedge.is_full_circle() {
        return document.add(
            Circle::new()
                .set("cx", CENTER_X)
                .set("cy", CENTER_Y)
                .set("r", RADIUS)
                .set("fill", color),
        );
    }

    document.add(
        Path::new()
            .set("fill", color)
            .set("stroke", "white")
            .set("stroke-width", 1.5)
            .set("d", wedge_outline(wedge)),
    )
}

/// Build the SVG document for a chart
pub fn render_document(chart: &PieChart) -> Document {
    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, WIDTH, HEIGHT))
        .set("width", WIDTH)
        .set("height", HEIGHT)
        .add(
            text(CENTER_X, 50.0, "middle", &chart.title)
                .set("font-size", 24.0)
                .set("font-weight", "bold"),
        );

    for (i, wedge) in chart.wedges().iter().enumerate() {
        let color = COLORS[i % COLORS.len()];
        document = add_wedge(document, wedge, color);

        let mid = wedge.mid_angle();
        let (px, py) = if wedge.is_full_circle() {
            (CENTER_X, CENTER_Y)
        } else {
            polar(RADIUS * 0.6, mid)
        };
        document = document.add(
            text(px, py, "middle", &wedge.percent_label())
                .set("font-size", 14.0)
                .set("fill", "white"),
        );

        let (lx, ly) = polar(RADIUS * 1.1, mid);
        let anchor = if mid.to_radians().cos() >= 0.0 { "start" } else { "end" };
        document = document.add(text(lx, ly, anchor, &wedge.label).set("font-size", 16.0));
    }

    document
}

/// Writes each chart as an SVG file, replacing the previous one
#[derive(Debug, Clone)]
pub struct SvgChartRenderer {
    path: PathBuf,
}

impl SvgChartRenderer {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn render(&mut self, chart: &PieChart) -> ExpenseResult<PathBuf> {
        let document = render_document(chart);
        svg::save(&self.path, &document).map_err(|e| {
            ExpenseError::Chart(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        tracing::debug!(path = %self.path.display(), slices = chart.slices.len(), "rendered pie chart");
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_chart() -> PieChart {
        let mut chart = PieChart::new("Expenses by Category", 140.0);
        chart.push("Groceries", 30.0);
        chart.push("Transportation", 10.0);
        chart
    }

    #[test]
    fn test_document_contains_labels_and_percentages() {
        let svg = render_document(&sample_chart()).to_string();

        assert!(svg.contains("Expenses by Category"));
        assert!(svg.contains("Groceries"));
        assert!(svg.contains("Transportation"));
        assert!(svg.contains("75.0%"));
        assert!(svg.contains("25.0%"));
        assert_eq!(svg.matches("<path").count(), 2);
    }

    /// Every `&` must start an entity and no label may open a tag
    fn assert_well_formed_text(svg: &str) {
        const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];
        for (i, _) in svg.match_indices('&') {
            assert!(
                ENTITIES.iter().any(|e| svg[i..].starts_with(e)),
                "bare ampersand at {} in {}",
                i,
                svg
            );
        }
        assert_eq!(svg.matches("<text").count(), svg.matches("</text>").count());
    }

    #[test]
    fn test_labels_are_escaped() {
        let mut chart = PieChart::new("Bills & <Other> \"stuff\"", 140.0);
        chart.push("Food & Drink", 30.0);
        chart.push("<Misc>", 10.0);

        let svg = render_document(&chart).to_string();

        assert!(!svg.contains("Food & Drink"));
        assert!(!svg.contains("<Misc>"));
        assert!(svg.contains("Food &amp; Drink"));
        assert!(svg.contains("&lt;Misc&gt;"));
        assert!(svg.contains("Bills &amp; &lt;Other&gt; &quot;stuff&quot;"));
        assert_well_formed_text(&svg);
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("Rent"), "Rent");
        assert_eq!(escape_text("A&B's"), "A&amp;B&apos;s");
    }

    #[test]
    fn test_single_category_draws_circle() {
        let mut chart = PieChart::new("Expenses by Category", 140.0);
        chart.push("Transportation", 42.5);

        let svg = render_document(&chart).to_string();
        assert!(svg.contains("<circle"));
        assert!(svg.contains("100.0%"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_outline_uses_large_arc_for_big_wedges() {
        let mut chart = PieChart::new("t", 0.0);
        chart.push("big", 3.0);
        chart.push("small", 1.0);
        let wedges = chart.wedges();

        assert!(wedge_outline(&wedges[0]).contains(" 0 1 0 "));
        assert!(wedge_outline(&wedges[1]).contains(" 0 0 0 "));
    }

    #[test]
    fn test_polar_axes() {
        let (x, y) = polar(10.0, 90.0);
        assert!((x - CENTER_X).abs() < 1e-9);
        assert!((y - (CENTER_Y - 10.0)).abs() < 1e-9);
    }

    #[test]
    fn test_renderer_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chart.svg");
        let mut renderer = SvgChartRenderer::new(path.clone());

        let written = renderer.render(&sample_chart()).unwrap();

        assert_eq!(written, path);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<svg"));
        assert!(contents.contains("Groceries"));
    }

    #[test]
    fn test_renderer_reports_unwritable_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("chart.svg");
        let mut renderer = SvgChartRenderer::new(path);

        let err = renderer.render(&sample_chart()).unwrap_err();
        assert!(matches!(err, ExpenseError::Chart(_)));
    }
}
