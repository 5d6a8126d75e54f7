//! Static Chart Renderer
//! Draws the chart model to a PNG file using plotters.
//!
//! Layout:
//! 1. Caption: the chart title, centered
//! 2. Mesh with gridlines and the axis descriptions
//! 3. One connected line per series
//! 4. Legend box listing the series labels

use anyhow::{Context, Result};
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

use crate::charts::Chart;

const SERIES_COLORS: [RGBColor; 4] = [BLUE, RED, GREEN, MAGENTA];
const LINE_WIDTH: u32 = 2;

/// Render the chart to `path` as a PNG of the given pixel size.
pub fn render_png(chart: &Chart, path: &Path, size: (u32, u32)) -> Result<()> {
    let x_spec = padded(chart.x_range().context("chart has no samples")?);
    let y_spec = padded(chart.y_range().context("chart has no samples")?);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(chart.title(), ("sans-serif", 32).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_spec, y_spec)?;

    ctx.configure_mesh()
        .x_desc(chart.x_label())
        .y_desc(chart.y_label())
        .draw()?;

    for (i, series) in chart.series().iter().enumerate() {
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];
        ctx.draw_series(LineSeries::new(
            series.points().iter().map(|p| (p[0], p[1])),
            color.stroke_width(LINE_WIDTH),
        ))?
        .label(series.label())
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
        });
    }

    ctx.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Widen a data range by 10% so curves do not touch the plot frame.
/// A flat range gets a unit of headroom instead.
fn padded(range: (f64, f64)) -> Range<f64> {
    let (lo, hi) = range;
    let pad = if hi > lo { 0.1 * (hi - lo) } else { 1.0 };
    (lo - pad)..(hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_widens_both_ends() {
        let range = padded((0.0, 2.0));
        assert!((range.start - -0.2).abs() < 1e-12);
        assert!((range.end - 2.2).abs() < 1e-12);
    }

    #[test]
    fn flat_range_still_has_extent() {
        let range = padded((1.0, 1.0));
        assert!(range.end - range.start > 0.5);
        assert!(range.start < 1.0 && 1.0 < range.end);
    }
}
