//! Minimal software rasterization for the demo binaries.
//!
//! This is demo plumbing, not a rendering backend: it fills gradient
//! triangles and strokes one-pixel segments into an RGBA image so the
//! extraction output can be eyeballed as a PNG. Vertices with NaN
//! coordinates are dropped, matching what a real renderer does with
//! NaN geometry.
use std::path::Path;

use anyhow::Context;
use glam::DVec2;
use grid_contour::prelude::*;
use image::{Rgba, RgbaImage};

/// Installs a fmt subscriber honoring `RUST_LOG`; safe to call repeatedly.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// View-to-image mapping and styling for the demo renderer.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Output image size in pixels.
    pub image_size: (u32, u32),
    /// Lower-left corner of the rendered view in output coordinates.
    pub view_min: DVec2,
    /// Upper-right corner of the rendered view in output coordinates.
    pub view_max: DVec2,
    /// Background fill.
    pub background: [u8; 3],
    /// Global alpha multiplier applied to band triangles.
    pub band_alpha: f64,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), view_min: DVec2, view_max: DVec2) -> Self {
        Self {
            image_size,
            view_min,
            view_max,
            background: [255, 255, 255],
            band_alpha: 1.0,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_band_alpha(mut self, band_alpha: f64) -> Self {
        self.band_alpha = band_alpha;
        self
    }

    /// Output coordinates to pixel coordinates, y flipped.
    fn to_pixel(&self, p: DVec2) -> DVec2 {
        let (w, h) = self.image_size;
        let extent = self.view_max - self.view_min;
        let tx = (p.x - self.view_min.x) / extent.x;
        let ty = (p.y - self.view_min.y) / extent.y;
        DVec2::new(
            tx * f64::from(w.saturating_sub(1)),
            (1.0 - ty) * f64::from(h.saturating_sub(1)),
        )
    }
}

/// Rasterizes band triangles (painter's order, first below) and contour
/// segments on top, then writes a PNG to `path`.
pub fn render_contours_to_png(
    triangles: &[ColoredTriangle],
    segments: &[Segment],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbaImage::from_pixel(
        w,
        h,
        Rgba([
            config.background[0],
            config.background[1],
            config.background[2],
            255,
        ]),
    );

    for tri in triangles {
        let p = tri.positions.map(|v| config.to_pixel(v));
        if p.iter().any(|v| !v.is_finite()) {
            continue;
        }
        fill_triangle(&mut img, p, tri.colors, config.band_alpha);
    }

    for segment in segments {
        let p0 = config.to_pixel(segment.p0);
        let p1 = config.to_pixel(segment.p1);
        if !p0.is_finite() || !p1.is_finite() {
            continue;
        }
        stroke_segment(&mut img, p0, p1, segment.color);
    }

    img.save(path.as_ref())
        .with_context(|| format!("writing {}", path.as_ref().display()))
}

fn fill_triangle(img: &mut RgbaImage, p: [DVec2; 3], colors: [Color; 3], alpha: f64) {
    let area = (p[1] - p[0]).perp_dot(p[2] - p[0]);
    if area == 0.0 {
        return;
    }
    let min_x = p.iter().map(|v| v.x).fold(f64::INFINITY, f64::min).floor();
    let max_x = p.iter().map(|v| v.x).fold(f64::NEG_INFINITY, f64::max).ceil();
    let min_y = p.iter().map(|v| v.y).fold(f64::INFINITY, f64::min).floor();
    let max_y = p.iter().map(|v| v.y).fold(f64::NEG_INFINITY, f64::max).ceil();
    let x0 = min_x.max(0.0) as u32;
    let x1 = (max_x.min(f64::from(img.width() - 1))).max(0.0) as u32;
    let y0 = min_y.max(0.0) as u32;
    let y1 = (max_y.min(f64::from(img.height() - 1))).max(0.0) as u32;

    for py in y0..=y1 {
        for px in x0..=x1 {
            let q = DVec2::new(f64::from(px) + 0.5, f64::from(py) + 0.5);
            let w0 = (p[1] - q).perp_dot(p[2] - q) / area;
            let w1 = (p[2] - q).perp_dot(p[0] - q) / area;
            let w2 = (p[0] - q).perp_dot(p[1] - q) / area;
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }
            let blend = |f: fn(Color) -> u8| {
                f64::from(f(colors[0])) * w0
                    + f64::from(f(colors[1])) * w1
                    + f64::from(f(colors[2])) * w2
            };
            let a = blend(Color::a) / 255.0 * alpha;
            let rgb = [blend(Color::r), blend(Color::g), blend(Color::b)];
            composite(img, px, py, rgb, a);
        }
    }
}

fn stroke_segment(img: &mut RgbaImage, p0: DVec2, p1: DVec2, color: Color) {
    let delta = p1 - p0;
    let steps = delta.x.abs().max(delta.y.abs()).ceil() as usize;
    let a = f64::from(color.a()) / 255.0;
    let rgb = [
        f64::from(color.r()),
        f64::from(color.g()),
        f64::from(color.b()),
    ];
    for s in 0..=steps {
        let t = if steps == 0 { 0.0 } else { s as f64 / steps as f64 };
        let q = p0 + t * delta;
        if q.x < 0.0 || q.y < 0.0 {
            continue;
        }
        let (px, py) = (q.x.round() as u32, q.y.round() as u32);
        if px < img.width() && py < img.height() {
            composite(img, px, py, rgb, a);
        }
    }
}

fn composite(img: &mut RgbaImage, px: u32, py: u32, rgb: [f64; 3], alpha: f64) {
    let pixel = img.get_pixel_mut(px, py);
    for (channel, value) in pixel.0.iter_mut().take(3).zip(rgb) {
        let blended = f64::from(*channel) * (1.0 - alpha) + value * alpha;
        *channel = blended.round().clamp(0.0, 255.0) as u8;
    }
    pixel.0[3] = 255;
}
