use std::path::Path;

use ::image::{ImageFormat, Rgb, RgbImage};

use crate::color::{axis_rgb, series_rgb};
use crate::data::projection::PlotSeries;
use crate::error::Result;

use super::PlotStyle;

// ---------------------------------------------------------------------------
// Raster plot
// ---------------------------------------------------------------------------

/// 6.4 x 4.8 inches at 200 dpi.
pub const WIDTH: u32 = 1280;
pub const HEIGHT: u32 = 960;

const MARGIN: u32 = 80;
const TICKS: u32 = 5;
const TICK_LEN: i64 = 10;
const MARKER_RADIUS: i64 = 4;
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Maps data coordinates onto the pixel rectangle inside the margins.
struct Frame {
    x_range: [f64; 2],
    y_range: [f64; 2],
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Frame {
    fn new(series: &PlotSeries, width: u32, height: u32) -> Self {
        let (x_range, y_range) = series.bounds().unwrap_or(([0.0, 1.0], [0.0, 1.0]));
        Self {
            x_range: pad(x_range),
            y_range: pad(y_range),
            left: MARGIN as f64,
            right: (width - MARGIN) as f64,
            top: MARGIN as f64,
            bottom: (height - MARGIN) as f64,
        }
    }

    fn to_pixel(&self, [x, y]: [f64; 2]) -> Option<(i64, i64)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let fx = (x - self.x_range[0]) / (self.x_range[1] - self.x_range[0]);
        let fy = (y - self.y_range[0]) / (self.y_range[1] - self.y_range[0]);
        let px = self.left + fx * (self.right - self.left);
        let py = self.bottom - fy * (self.bottom - self.top);
        Some((px.round() as i64, py.round() as i64))
    }
}

/// Widen a zero-length range so a flat series still gets a frame, and add a
/// small gap so points do not sit on the axes.
fn pad([lo, hi]: [f64; 2]) -> [f64; 2] {
    let span = hi - lo;
    if span <= f64::EPSILON * lo.abs().max(1.0) {
        return [lo - 0.5, hi + 0.5];
    }
    [lo - span * 0.05, hi + span * 0.05]
}

/// Draw `series` into a new image of the given size.
pub fn render(series: &PlotSeries, style: PlotStyle, width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    let frame = Frame::new(series, width, height);
    draw_axes(&mut img, &frame);

    let color = Rgb(series_rgb());
    let mut previous: Option<(i64, i64)> = None;
    for point in series.points() {
        let current = frame.to_pixel(point);
        match (style, previous, current) {
            (PlotStyle::Line, Some(from), Some(to)) => draw_line(&mut img, from, to, color),
            (PlotStyle::Line, None, Some(at)) => put(&mut img, at.0, at.1, color),
            (PlotStyle::Scatter, _, Some(at)) => draw_marker(&mut img, at, color),
            // Non-finite points break the line.
            _ => {}
        }
        previous = current;
    }
    img
}

/// Render and write `series` to `path` in `format`.
pub fn save(series: &PlotSeries, style: PlotStyle, path: &Path, format: ImageFormat) -> Result<()> {
    let img = render(series, style, WIDTH, HEIGHT);
    img.save_with_format(path, format)?;
    log::info!("wrote {} points to {}", series.len(), path.display());
    Ok(())
}

fn draw_axes(img: &mut RgbImage, frame: &Frame) {
    let color = Rgb(axis_rgb());
    let (l, r) = (frame.left as i64, frame.right as i64);
    let (t, b) = (frame.top as i64, frame.bottom as i64);
    draw_line(img, (l, t), (r, t), color);
    draw_line(img, (l, b), (r, b), color);
    draw_line(img, (l, t), (l, b), color);
    draw_line(img, (r, t), (r, b), color);

    for i in 0..=TICKS as i64 {
        let x = l + (r - l) * i / TICKS as i64;
        let y = b - (b - t) * i / TICKS as i64;
        draw_line(img, (x, b), (x, b + TICK_LEN), color);
        draw_line(img, (l - TICK_LEN, y), (l, y), color);
    }
}

/// Bresenham line between two pixels.
fn draw_line(img: &mut RgbImage, (x0, y0): (i64, i64), (x1, y1): (i64, i64), color: Rgb<u8>) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let (mut x, mut y) = (x0, y0);
    let mut err = dx + dy;
    loop {
        put(img, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn draw_marker(img: &mut RgbImage, (cx, cy): (i64, i64), color: Rgb<u8>) {
    for dy in -MARKER_RADIUS..=MARKER_RADIUS {
        for dx in -MARKER_RADIUS..=MARKER_RADIUS {
            if dx * dx + dy * dy <= MARKER_RADIUS * MARKER_RADIUS {
                put(img, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Set a pixel, ignoring coordinates outside the image.
fn put(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u64) < img.width() as u64 && (y as u64) < img.height() as u64 {
        img.put_pixel(x as u32, y as u32, color);
    }
}
