//! Full-frame background: diagonal gradient, two soft highlights and a faint stripe texture.
//!
//! All lengths are in preview pixels and scaled by [`Canvas::scale`].

use crate::foundation::color::Rgb8;
use crate::foundation::core::Canvas;

/// `(x%, y%, peak alpha, extent as a fraction of the farthest-corner radius)`.
const HIGHLIGHTS: [(f64, f64, f64, f64); 2] = [(0.20, 0.20, 0.18, 0.55), (0.80, 0.10, 0.12, 0.45)];
const STRIPE_PERIOD: f64 = 6.0;
const STRIPE_WIDTH: f64 = 2.0;
const STRIPE_ALPHA: f64 = 0.03;

/// Position along a 135° gradient (top-left to bottom-right), `0..=1`.
pub(crate) fn gradient_t(x: f64, y: f64, width: f64, height: f64) -> f64 {
    let d = std::f64::consts::FRAC_1_SQRT_2;
    let line = (width + height) * d;
    if line <= 0.0 {
        return 0.0;
    }
    let proj = (x - width / 2.0) * d + (y - height / 2.0) * d;
    (proj / line + 0.5).clamp(0.0, 1.0)
}

fn highlight_alpha(x: f64, y: f64, width: f64, height: f64) -> f64 {
    let mut keep = 1.0;
    for (hx, hy, peak, extent) in HIGHLIGHTS {
        let cx = hx * width;
        let cy = hy * height;
        let far_x = cx.max(width - cx);
        let far_y = cy.max(height - cy);
        let reach = (far_x * far_x + far_y * far_y).sqrt() * extent;
        if reach <= 0.0 {
            continue;
        }
        let d = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
        let a = peak * (1.0 - d / reach).max(0.0);
        keep *= 1.0 - a;
    }
    1.0 - keep
}

fn in_stripe(x: f64, y: f64, scale: f64) -> bool {
    let period = STRIPE_PERIOD * scale;
    if period <= 0.0 {
        return false;
    }
    let s = (x - y) * std::f64::consts::FRAC_1_SQRT_2;
    s.rem_euclid(period) < STRIPE_WIDTH * scale
}

/// Opaque premultiplied RGBA8 background for `canvas`.
pub(crate) fn paint_backdrop(canvas: Canvas, from: Rgb8, to: Rgb8) -> Vec<u8> {
    let (w, h) = (f64::from(canvas.width()), f64::from(canvas.height()));
    let scale = canvas.scale();
    let mut out = Vec::with_capacity(canvas.byte_len());

    for y in 0..canvas.height() {
        let fy = f64::from(y) + 0.5;
        for x in 0..canvas.width() {
            let fx = f64::from(x) + 0.5;
            let base = from.lerp(to, gradient_t(fx, fy, w, h));

            let mut white = highlight_alpha(fx, fy, w, h);
            if in_stripe(fx, fy, scale) {
                white = 1.0 - (1.0 - white) * (1.0 - STRIPE_ALPHA);
            }
            let mix = |c: u8| (f64::from(c) * (1.0 - white) + 255.0 * white).round() as u8;
            out.extend_from_slice(&[mix(base.r), mix(base.g), mix(base.b), 255]);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/backdrop.rs"]
mod tests;
