#[path = "plotters_renderer.rs"]
pub mod plotters_renderer;

pub use plotters_renderer::PlottersChartRenderer;
