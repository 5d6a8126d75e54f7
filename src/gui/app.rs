//! Viewer Application
//! Single window showing the finished chart until the user closes it.

use egui::RichText;

use crate::charts::{self, Chart};

/// Main application window.
///
/// Owns the chart outright, so the series set is frozen once the
/// window opens.
pub struct ViewerApp {
    chart: Chart,
}

impl ViewerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, chart: Chart) -> Self {
        Self { chart }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(self.chart.title()).size(18.0).strong());
            });
            ui.add_space(4.0);
            charts::draw_chart(ui, &self.chart);
        });
    }
}
