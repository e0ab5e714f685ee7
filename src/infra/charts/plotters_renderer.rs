use std::io::Cursor;

use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};

use crate::core::charts::{BarChart, ChartError, ChartRenderer};

const FONT_FAMILY: &str = "sans-serif";

/// Draws bar charts into an in-memory RGB buffer and encodes them as PNG.
pub struct PlottersChartRenderer {
    width: u32,
    height: u32,
}

impl PlottersChartRenderer {
    /// Register the TrueType font at `font_path` for all chart text.
    ///
    /// Fonts are registered process-wide, so this should run once at startup.
    pub fn load(font_path: &str, width: u32, height: u32) -> Result<Self, ChartError> {
        let bytes = std::fs::read(font_path)
            .map_err(|e| ChartError::Render(format!("cannot read font {}: {}", font_path, e)))?;
        // plotters keeps a reference to the font data for the rest of the process
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        register_font(FONT_FAMILY, FontStyle::Normal, bytes)
            .map_err(|_| ChartError::Render(format!("{} is not a usable font", font_path)))?;

        Ok(Self { width, height })
    }

    fn draw(&self, chart: &BarChart, buffer: &mut [u8]) -> Result<(), ChartError> {
        let root = BitMapBackend::with_buffer(buffer, (self.width, self.height)).into_drawing_area();
        root.fill(&BLACK).map_err(render_err)?;

        let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
        let fill = RGBColor(chart.color.0, chart.color.1, chart.color.2);

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, (FONT_FAMILY, 30).into_font().color(&WHITE))
            .margin_top(20)
            .margin_bottom(40)
            .margin_right(40)
            .margin_left(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(
                (0..chart.bars.len()).into_segmented(),
                0u32..chart.scale.axis_end(),
            )
            .map_err(render_err)?;

        let x_formatter = |v: &SegmentValue<usize>| match v {
            SegmentValue::CenterOf(i) => labels.get(*i).map(|l| l.to_string()).unwrap_or_default(),
            _ => String::new(),
        };
        let y_formatter = |v: &u32| v.to_string();

        ctx.configure_mesh()
            .disable_x_mesh()
            .bold_line_style(WHITE.mix(0.2))
            .light_line_style(TRANSPARENT)
            .axis_style(WHITE)
            .label_style((FONT_FAMILY, 18).into_font().color(&WHITE))
            .x_labels(labels.len())
            .x_label_formatter(&x_formatter)
            // One label per tick, plus the headroom row above the tallest bar
            .y_labels(chart.scale.ticks.len() + 1)
            .y_label_formatter(&y_formatter)
            .draw()
            .map_err(render_err)?;

        ctx.draw_series(
            Histogram::vertical(&ctx)
                .style(fill.filled())
                .margin(10)
                .data(chart.bars.iter().enumerate().map(|(i, bar)| (i, bar.value))),
        )
        .map_err(render_err)?;

        root.present().map_err(render_err)?;
        Ok(())
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Render(e.to_string())
}

impl ChartRenderer for PlottersChartRenderer {
    fn render(&self, chart: &BarChart) -> Result<Vec<u8>, ChartError> {
        if chart.bars.is_empty() {
            return Err(ChartError::Empty);
        }

        let mut buffer = vec![0u8; self.width as usize * self.height as usize * 3];
        self.draw(chart, &mut buffer)?;

        let image = image::RgbImage::from_raw(self.width, self.height, buffer)
            .ok_or_else(|| ChartError::Encode("buffer does not match image size".to_string()))?;
        let mut png = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .map_err(|e| ChartError::Encode(e.to_string()))?;

        tracing::debug!(bytes = png.len(), bars = chart.bars.len(), "Rendered chart");
        Ok(png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::charts::chart_renderer::{Bar, BarColor};
    use crate::core::contests::ChartScale;

    #[test]
    fn test_missing_font_is_an_error() {
        let result = PlottersChartRenderer::load("/nonexistent/font.ttf", 100, 100);
        assert!(matches!(result, Err(ChartError::Render(_))));
    }

    #[test]
    fn test_empty_chart_is_rejected() {
        let renderer = PlottersChartRenderer {
            width: 100,
            height: 100,
        };
        let chart = BarChart {
            title: "Empty".to_string(),
            bars: Vec::new(),
            scale: ChartScale {
                max: 0,
                ticks: vec![0],
            },
            color: BarColor::ACCEPTED,
        };
        assert!(matches!(renderer.render(&chart), Err(ChartError::Empty)));
    }

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    const DEJAVU: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

    fn bars(values: &[(&str, u32)]) -> BarChart {
        let max = values.iter().map(|(_, v)| *v).max().unwrap_or(0);
        BarChart {
            title: "Regional Finals".to_string(),
            bars: values
                .iter()
                .map(|(label, value)| Bar {
                    label: label.to_string(),
                    value: *value,
                })
                .collect(),
            scale: ChartScale {
                max,
                ticks: (0..=max).collect(),
            },
            color: BarColor::ACCEPTED,
        }
    }

    #[test]
    fn test_renders_png_with_real_font() {
        if !std::path::Path::new(DEJAVU).exists() {
            eprintln!("skipping: {} not installed", DEJAVU);
            return;
        }
        let renderer = PlottersChartRenderer::load(DEJAVU, 1500, 800).unwrap();

        let two_bars = renderer.render(&bars(&[("A", 2), ("B", 0)])).unwrap();
        assert!(two_bars.starts_with(&PNG_MAGIC));

        let all_zero = renderer.render(&bars(&[("A", 0)])).unwrap();
        assert!(all_zero.starts_with(&PNG_MAGIC));

        let many: Vec<(String, u32)> = (0..26u32)
            .map(|i| (((b'A' + i as u8) as char).to_string(), i % 5))
            .collect();
        let many: Vec<(&str, u32)> = many.iter().map(|(l, v)| (l.as_str(), *v)).collect();
        let wide = renderer.render(&bars(&many)).unwrap();
        assert!(wide.starts_with(&PNG_MAGIC));
    }
}
