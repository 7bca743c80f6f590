use crate::foundation::error::{ThumbsmithError, ThumbsmithResult};
use crate::foundation::math::{mul_div255_u8, mul_div255_u16};

pub type PremulRgba8 = [u8; 4];

/// Source-over with an extra opacity multiplier.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));
    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Screen blend, premultiplied: `s + d - s*d` per channel including alpha.
///
/// Lightens wherever the source has coverage; never darkens the destination.
pub fn screen(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    let mut out = [0u8; 4];
    for i in 0..4 {
        let s = u16::from(src[i]);
        let d = u16::from(dst[i]);
        out[i] = (s + d - mul_div255_u16(s, d)).min(255) as u8;
    }
    out
}

fn check_pair(dst: &[u8], src: &[u8], op: &str) -> ThumbsmithResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(ThumbsmithError::render(format!(
            "{op} expects equal-length rgba8 buffers"
        )));
    }
    Ok(())
}

pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> ThumbsmithResult<()> {
    check_pair(dst, src, "over_in_place")?;
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

pub fn screen_in_place(dst: &mut [u8], src: &[u8]) -> ThumbsmithResult<()> {
    check_pair(dst, src, "screen_in_place")?;
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = screen([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Coverage of pixel `(x, y)` inside a `width x height` rectangle with rounded corners.
///
/// Anti-aliased over one pixel at the corner arcs; 1.0 everywhere else inside.
pub fn rounded_coverage(x: u32, y: u32, width: u32, height: u32, radius: f64) -> f64 {
    let radius = radius.clamp(0.0, f64::from(width.min(height)) / 2.0);
    if radius <= 0.0 {
        return 1.0;
    }
    let px = f64::from(x) + 0.5;
    let py = f64::from(y) + 0.5;
    let (w, h) = (f64::from(width), f64::from(height));

    let cx = if px < radius {
        radius
    } else if px > w - radius {
        w - radius
    } else {
        return 1.0;
    };
    let cy = if py < radius {
        radius
    } else if py > h - radius {
        h - radius
    } else {
        return 1.0;
    };

    let d = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
    (radius + 0.5 - d).clamp(0.0, 1.0)
}

/// Clip the frame to a rounded rectangle.
///
/// Outside the corners pixels become transparent, or `matte` when given (the frame is
/// composited over it).
pub fn apply_rounded_frame(
    data: &mut [u8],
    width: u32,
    height: u32,
    radius: f64,
    matte: Option<PremulRgba8>,
) -> ThumbsmithResult<()> {
    if data.len() != width as usize * height as usize * 4 {
        return Err(ThumbsmithError::render(
            "rounded frame expects width*height*4 bytes",
        ));
    }
    let r_px = radius.max(0.0).ceil() as u32;
    for y in 0..height {
        let near_y = y < r_px || y + r_px >= height;
        if !near_y {
            continue;
        }
        for x in 0..width {
            let cov = rounded_coverage(x, y, width, height, radius);
            if cov >= 1.0 {
                continue;
            }
            let i = (y as usize * width as usize + x as usize) * 4;
            let c = ((cov * 255.0).round() as u16).min(255);
            let mut px = [0u8; 4];
            for k in 0..4 {
                px[k] = mul_div255_u8(u16::from(data[i + k]), c);
            }
            if let Some(m) = matte {
                px = over(m, px, 1.0);
            }
            data[i..i + 4].copy_from_slice(&px);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
