//! Figure composition onto an RGBA canvas.
//!
//! Lays out a white canvas with a plot box, axis ticks, a vertical
//! colorbar with tick values and a rotated label, and a centered title
//! band. Raster grids fill the plot box with nearest-value sampling
//! (the box sets the aspect, not the grid), scatter point sets map
//! through their data extents.

use hydro_common::Grid2D;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use thiserror::Error;
use tracing::debug;

use crate::colormap::{Color, ColorRamp};
use crate::style::StylePolicy;
use crate::text;

/// Unscaled default canvas width, before the display doubling.
pub const DEFAULT_FIGURE_WIDTH: u32 = 640;
/// Unscaled default canvas height, before the display doubling.
pub const DEFAULT_FIGURE_HEIGHT: u32 = 480;

const MARGIN_LEFT: u32 = 70;
const MARGIN_TOP: u32 = 56;
const MARGIN_BOTTOM: u32 = 44;
const COLORBAR_GAP: u32 = 24;
const COLORBAR_WIDTH: u32 = 22;
const COLORBAR_TEXT_SPACE: u32 = 94;
const MARGIN_RIGHT: u32 = COLORBAR_GAP + COLORBAR_WIDTH + COLORBAR_TEXT_SPACE;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// The default figure size doubled in both directions, the display
/// convention for grid and weight figures.
pub fn doubled_default_size() -> (u32, u32) {
    (DEFAULT_FIGURE_WIDTH * 2, DEFAULT_FIGURE_HEIGHT * 2)
}

/// A composed figure: the finished canvas plus the diagnostic note
/// produced while preparing the data, when there was one.
#[derive(Debug, Clone)]
pub struct Figure {
    pub image: RgbaImage,
    pub note: Option<String>,
}

impl Figure {
    pub fn new(image: RgbaImage) -> Self {
        Self { image, note: None }
    }

    pub fn with_note(image: RgbaImage, note: Option<String>) -> Self {
        Self { image, note }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Nothing to draw: {0}")]
    Empty(String),

    #[error("Figure size {width}x{height} is too small for the plot layout")]
    FigureTooSmall { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// Inputs for one raster figure.
pub struct RasterParams<'a> {
    pub grid: &'a Grid2D,
    pub policy: &'a StylePolicy,
    /// Explicit low end of the render range; data minimum when `None`.
    pub vmin: Option<f32>,
    /// Explicit high end of the render range; data maximum when `None`.
    pub vmax: Option<f32>,
    /// Fill for NaN cells; left as canvas background when `None`.
    pub bad_color: Option<Color>,
    pub colorbar_label: &'a str,
    pub title: &'a str,
    pub size: (u32, u32),
}

/// Inputs for one scatter figure. All slices are index-aligned.
pub struct ScatterParams<'a> {
    pub x: &'a [f32],
    pub y: &'a [f32],
    pub values: &'a [f32],
    /// Marker radius per point, in pixels.
    pub radii: &'a [i32],
    pub ramp: &'static ColorRamp,
    pub vmin: Option<f32>,
    pub vmax: Option<f32>,
    pub colorbar_label: &'a str,
    pub title: &'a str,
    pub size: (u32, u32),
}

struct PlotArea {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

fn layout(width: u32, height: u32) -> Result<PlotArea, RenderError> {
    if width < MARGIN_LEFT + MARGIN_RIGHT + 40 || height < MARGIN_TOP + MARGIN_BOTTOM + 40 {
        return Err(RenderError::FigureTooSmall { width, height });
    }
    Ok(PlotArea {
        x: MARGIN_LEFT,
        y: MARGIN_TOP,
        w: width - MARGIN_LEFT - MARGIN_RIGHT,
        h: height - MARGIN_TOP - MARGIN_BOTTOM,
    })
}

/// Compose a raster figure from a dense grid.
pub fn compose_raster(p: &RasterParams<'_>) -> Result<RgbaImage, RenderError> {
    let (width, height) = p.size;
    let plot = layout(width, height)?;
    if p.grid.rows() == 0 || p.grid.cols() == 0 {
        return Err(RenderError::Empty("grid has no cells".to_string()));
    }

    let (dmin, dmax) = p.grid.finite_min_max().unwrap_or((0.0, 1.0));
    let vmin = p.vmin.unwrap_or(dmin);
    let vmax = p.vmax.unwrap_or(dmax);

    let mut img = RgbaImage::from_pixel(width, height, WHITE);

    // Nearest-value fill; the plot box sets the aspect ratio
    for py in 0..plot.h {
        let row = (py as usize * p.grid.rows()) / plot.h as usize;
        for px in 0..plot.w {
            let col = (px as usize * p.grid.cols()) / plot.w as usize;
            let v = p.grid.get(row, col);
            let color = if v.is_nan() {
                match p.bad_color {
                    Some(c) => c,
                    None => continue,
                }
            } else {
                p.policy.color_for(v, vmin, vmax)
            };
            img.put_pixel(plot.x + px, plot.y + py, color.to_rgba());
        }
    }

    draw_frame(&mut img, &plot);
    // Cell-index axes, row 0 at the top as rendered
    draw_axis_ticks(
        &mut img,
        &plot,
        (0.0, (p.grid.cols() - 1) as f64),
        (0.0, (p.grid.rows() - 1) as f64),
    );

    match p.policy {
        StylePolicy::Classified(classes) => {
            let bounds = classes.boundaries();
            let low = bounds[0];
            let high = *bounds.last().unwrap();
            draw_colorbar(&mut img, &plot, low, high, bounds, p.colorbar_label, &|v| {
                classes.classify(v)
            });
        }
        StylePolicy::Gradient(_) => {
            let (low, high) = (f64::from(vmin), f64::from(vmax));
            let ticks = even_ticks(low, high);
            draw_colorbar(&mut img, &plot, low, high, &ticks, p.colorbar_label, &|v| {
                p.policy.color_for(v as f32, vmin, vmax)
            });
        }
    }

    draw_title(&mut img, width, p.title);
    debug!(
        rows = p.grid.rows(),
        cols = p.grid.cols(),
        vmin,
        vmax,
        "Composed raster figure"
    );
    Ok(img)
}

/// Compose a scatter figure from index-aligned point arrays.
pub fn compose_scatter(p: &ScatterParams<'_>) -> Result<RgbaImage, RenderError> {
    let (width, height) = p.size;
    let plot = layout(width, height)?;
    let n = p.x.len();
    if n == 0 {
        return Err(RenderError::Empty("no scatter points".to_string()));
    }
    if p.y.len() != n || p.values.len() != n || p.radii.len() != n {
        return Err(RenderError::Empty(format!(
            "scatter arrays disagree in length: x={}, y={}, values={}, radii={}",
            p.x.len(),
            p.y.len(),
            p.values.len(),
            p.radii.len()
        )));
    }

    let (xmin, xmax) = padded_extent(finite_extent(p.x));
    let (ymin, ymax) = padded_extent(finite_extent(p.y));
    let (dmin, dmax) = finite_extent(p.values);
    let vmin = p.vmin.unwrap_or(dmin);
    let vmax = p.vmax.unwrap_or(dmax);
    let vrange = if (vmax - vmin).abs() < 1e-3 { 1.0 } else { vmax - vmin };

    let mut img = RgbaImage::from_pixel(width, height, WHITE);

    for i in 0..n {
        let (xi, yi, vi) = (p.x[i], p.y[i], p.values[i]);
        if !xi.is_finite() || !yi.is_finite() || !vi.is_finite() {
            continue;
        }
        let fx = (xi - xmin) / (xmax - xmin);
        let fy = (ymax - yi) / (ymax - ymin);
        let cx = plot.x as i32 + (fx * (plot.w - 1) as f32).round() as i32;
        let cy = plot.y as i32 + (fy * (plot.h - 1) as f32).round() as i32;
        let color = p.ramp.sample((vi - vmin) / vrange);
        draw_filled_circle_mut(&mut img, (cx, cy), p.radii[i].max(1), color.to_rgba());
    }

    draw_frame(&mut img, &plot);
    draw_axis_ticks(
        &mut img,
        &plot,
        (f64::from(xmin), f64::from(xmax)),
        (f64::from(ymax), f64::from(ymin)),
    );

    let (low, high) = (f64::from(vmin), f64::from(vmax));
    let ticks = even_ticks(low, high);
    draw_colorbar(&mut img, &plot, low, high, &ticks, p.colorbar_label, &|v| {
        let t = ((v as f32) - vmin) / vrange;
        p.ramp.sample(t)
    });

    draw_title(&mut img, width, p.title);
    debug!(points = n, vmin, vmax, "Composed scatter figure");
    Ok(img)
}

fn finite_extent(values: &[f32]) -> (f32, f32) {
    let mut iter = values.iter().copied().filter(|v| v.is_finite());
    match iter.next() {
        Some(first) => iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))),
        None => (0.0, 1.0),
    }
}

fn padded_extent((lo, hi): (f32, f32)) -> (f32, f32) {
    if (hi - lo).abs() < f32::EPSILON {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}

fn even_ticks(low: f64, high: f64) -> Vec<f64> {
    (0..5).map(|i| low + (high - low) * i as f64 / 4.0).collect()
}

fn draw_frame(img: &mut RgbaImage, plot: &PlotArea) {
    let rect = Rect::at(plot.x as i32, plot.y as i32).of_size(plot.w, plot.h);
    draw_hollow_rect_mut(img, rect, BLACK);
}

/// Ticks along both axes. `x_range` runs left to right, `y_range` top
/// to bottom (already inverted by the caller when needed).
fn draw_axis_ticks(img: &mut RgbaImage, plot: &PlotArea, x_range: (f64, f64), y_range: (f64, f64)) {
    let n = 5;
    for i in 0..n {
        let frac = i as f64 / (n - 1) as f64;

        let px = plot.x as f32 + (frac * (plot.w - 1) as f64) as f32;
        let base = (plot.y + plot.h) as f32;
        draw_line_segment_mut(img, (px, base), (px, base + 4.0), BLACK);
        let label = format_tick(x_range.0 + frac * (x_range.1 - x_range.0));
        let lw = text::text_width(&label, 1) as i32;
        text::draw_text(img, BLACK, px as i32 - lw / 2, base as i32 + 7, 1, &label);

        let py = plot.y as f32 + (frac * (plot.h - 1) as f64) as f32;
        draw_line_segment_mut(img, ((plot.x - 4) as f32, py), (plot.x as f32, py), BLACK);
        let label = format_tick(y_range.0 + frac * (y_range.1 - y_range.0));
        let lw = text::text_width(&label, 1) as i32;
        text::draw_text(img, BLACK, plot.x as i32 - 7 - lw, py as i32 - 4, 1, &label);
    }
}

/// Vertical colorbar to the right of the plot box, spanning `low..high`
/// with `high` at the top, tick values at the given positions and a
/// rotated label along the outer edge.
fn draw_colorbar(
    img: &mut RgbaImage,
    plot: &PlotArea,
    low: f64,
    high: f64,
    ticks: &[f64],
    label: &str,
    color_of: &dyn Fn(f64) -> Color,
) {
    let bar_x = plot.x + plot.w + COLORBAR_GAP;
    let span = if (high - low).abs() < f64::EPSILON {
        1.0
    } else {
        high - low
    };

    for py in 0..plot.h {
        let frac = 1.0 - py as f64 / (plot.h - 1) as f64;
        let color = color_of(low + frac * span).to_rgba();
        for px in 0..COLORBAR_WIDTH {
            img.put_pixel(bar_x + px, plot.y + py, color);
        }
    }
    let rect = Rect::at(bar_x as i32, plot.y as i32).of_size(COLORBAR_WIDTH, plot.h);
    draw_hollow_rect_mut(img, rect, BLACK);

    let tick_x = (bar_x + COLORBAR_WIDTH) as f32;
    for &value in ticks {
        let frac = (value - low) / span;
        if !(0.0..=1.0).contains(&frac) {
            continue;
        }
        let py = plot.y as f32 + ((1.0 - frac) * (plot.h - 1) as f64) as f32;
        draw_line_segment_mut(img, (tick_x, py), (tick_x + 4.0, py), BLACK);
        let text_val = format_tick(value);
        text::draw_text(img, BLACK, tick_x as i32 + 7, py as i32 - 4, 1, &text_val);
    }

    if !label.is_empty() {
        let label_x = (bar_x + COLORBAR_WIDTH + 48) as i32;
        let lw = text::text_width(label, 1) as i32;
        let label_y = plot.y as i32 + (plot.h as i32 + lw) / 2;
        text::draw_text_vertical(img, BLACK, label_x, label_y, 1, label);
    }
}

fn draw_title(img: &mut RgbaImage, width: u32, title: &str) {
    if title.is_empty() {
        return;
    }
    let scale = 2;
    let tw = text::text_width(title, scale) as i32;
    let x = (width as i32 - tw) / 2;
    let y = (MARGIN_TOP as i32 - text::text_height(scale) as i32) / 2;
    text::draw_text(img, BLACK, x.max(2), y.max(2), scale, title);
}

fn format_tick(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let a = v.abs();
    if a >= 10000.0 || a < 0.001 {
        // Two significant decimals, trailing zeros trimmed from the mantissa
        let s = format!("{:.2e}", v);
        match s.split_once('e') {
            Some((mantissa, exp)) => {
                let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
                format!("{}e{}", mantissa, exp)
            }
            None => s,
        }
    } else if (v - v.round()).abs() < 1e-6 {
        format!("{}", v.round() as i64)
    } else {
        format!("{:.2}", v)
    }
}
