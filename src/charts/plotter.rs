//! Chart Plotter Module
//! Chart model and interactive line overlays using egui_plot.

use egui_plot::{Legend, Line, Plot, PlotPoints};

/// One plotted curve: a label plus its samples in draw order.
#[derive(Debug, Clone)]
pub struct Series {
    label: String,
    points: Vec<[f64; 2]>,
}

impl Series {
    pub fn new(label: impl Into<String>, points: &[[f64; 2]]) -> Self {
        Self {
            label: label.into(),
            points: points.to_vec(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }
}

/// A chart under assembly: fixed decorations plus series in insertion order.
///
/// Once handed to a renderer the chart is moved, so no series can be added
/// after display starts.
#[derive(Debug, Clone)]
pub struct Chart {
    title: String,
    x_label: String,
    y_label: String,
    series: Vec<Series>,
}

impl Chart {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series: Vec::new(),
        }
    }

    pub fn push_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Legend labels, one per series, in insertion order.
    pub fn legend_labels(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label()).collect()
    }

    /// Smallest and largest x over all series.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        self.bounds(0)
    }

    /// Smallest and largest y over all series.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.bounds(1)
    }

    fn bounds(&self, axis: usize) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for point in self.series.iter().flat_map(|s| s.points()) {
            let v = point[axis];
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
        bounds
    }
}

/// Draw the chart as an interactive overlay filling the available space.
///
/// One connected line per series, legend from the series labels, labeled
/// axes, gridlines on.
pub fn draw_chart(ui: &mut egui::Ui, chart: &Chart) {
    Plot::new("series_overlay")
        .legend(Legend::default())
        .x_axis_label(chart.x_label())
        .y_axis_label(chart.y_label())
        .show_grid(true)
        .show(ui, |plot_ui| {
            for series in chart.series() {
                let points = PlotPoints::from_iter(series.points().iter().copied());
                plot_ui.line(Line::new(points).width(1.5).name(series.label()));
            }
        });
}
