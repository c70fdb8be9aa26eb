//! Minimal raster charts rendered with the `image` crate.
//!
//! Charts carry no text; the data they plot is always returned alongside
//! them as tables.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use tracing::trace;

use crate::error::ChartError;

/// Result type for chart rendering.
pub type Result<T> = std::result::Result<T, ChartError>;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([0, 0, 0]);
const GRID: Rgb<u8> = Rgb([230, 230, 230]);
const BAR: Rgb<u8> = Rgb([31, 119, 180]);
const EDGE: Rgb<u8> = Rgb([255, 255, 255]);

const MARGIN: u32 = 60;
const GRID_LINES: u32 = 5;

/// How bars share their slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarLayout {
    /// Separated bars covering `width` of each slot (0.0 - 1.0).
    Spaced { width: f32 },
    /// Adjacent bars, as in a histogram.
    Contiguous,
}

/// Bar chart renderer.
#[derive(Debug, Clone)]
pub struct BarChart {
    width: u32,
    height: u32,
    layout: BarLayout,
}

impl BarChart {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            layout: BarLayout::Spaced { width: 0.5 },
        }
    }

    /// Set the bar layout.
    pub fn with_layout(mut self, layout: BarLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Render one bar per value and encode the chart as PNG.
    pub fn render_png(&self, values: &[f64]) -> Result<Vec<u8>> {
        let image = self.render(values)?;
        let mut data = Vec::new();
        DynamicImage::ImageRgb8(image).write_to(&mut Cursor::new(&mut data), ImageFormat::Png)?;
        Ok(data)
    }

    /// Render one bar per value.
    pub fn render(&self, values: &[f64]) -> Result<RgbImage> {
        if self.width <= 2 * MARGIN || self.height <= 2 * MARGIN {
            return Err(ChartError::Dimensions {
                width: self.width,
                height: self.height,
            });
        }

        let mut canvas = RgbImage::from_pixel(self.width, self.height, BACKGROUND);

        let left = MARGIN;
        let right = self.width - MARGIN;
        let top = MARGIN;
        let bottom = self.height - MARGIN;
        let plot_height = (bottom - top) as f64;

        for i in 1..=GRID_LINES {
            let y = bottom - (bottom - top) * i / GRID_LINES;
            draw_hline(&mut canvas, left, right, y, GRID);
        }

        let max = values.iter().copied().fold(0.0_f64, f64::max);
        if !values.is_empty() && max > 0.0 {
            let slot = (right - left) as f64 / values.len() as f64;
            let fill = match self.layout {
                BarLayout::Spaced { width } => f64::from(width.clamp(0.05, 1.0)),
                BarLayout::Contiguous => 1.0,
            };

            for (i, &value) in values.iter().enumerate() {
                if value <= 0.0 {
                    continue;
                }
                let center = left as f64 + slot * (i as f64 + 0.5);
                let x0 = (center - slot * fill / 2.0).round() as u32;
                let x1 = ((center + slot * fill / 2.0).round() as u32).min(right);
                let bar_height = (value / max * plot_height).round() as u32;
                let y0 = bottom.saturating_sub(bar_height).max(top);

                fill_rect(&mut canvas, x0, y0, x1, bottom, BAR);
                if self.layout == BarLayout::Contiguous && x1 > x0 {
                    draw_vline(&mut canvas, x0, y0, bottom, EDGE);
                }
            }

            trace!("Rendered {} bars (max {})", values.len(), max);
        }

        draw_hline(&mut canvas, left, right, bottom, AXIS);
        draw_vline(&mut canvas, left, top, bottom, AXIS);

        Ok(canvas)
    }
}

fn fill_rect(canvas: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
    for y in y0..y1.min(canvas.height()) {
        for x in x0..x1.min(canvas.width()) {
            canvas.put_pixel(x, y, color);
        }
    }
}

fn draw_hline(canvas: &mut RgbImage, x0: u32, x1: u32, y: u32, color: Rgb<u8>) {
    fill_rect(canvas, x0, y, x1 + 1, y + 1, color);
}

fn draw_vline(canvas: &mut RgbImage, x: u32, y0: u32, y1: u32, color: Rgb<u8>) {
    fill_rect(canvas, x, y0, x + 1, y1 + 1, color);
}
