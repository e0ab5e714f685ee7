pub mod chart_renderer;

pub use chart_renderer::{BarChart, ChartError, ChartRenderer};
