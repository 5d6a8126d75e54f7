//! Charts module - Chart model and rendering

mod plotter;
mod renderer;

pub use plotter::{draw_chart, Chart, Series};
pub use renderer::render_png;
