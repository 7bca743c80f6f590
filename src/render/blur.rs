use crate::foundation::error::{ThumbsmithError, ThumbsmithResult};

/// Largest sigma blurred at full resolution; wider blurs run on a downscaled layer.
pub(crate) const MAX_DIRECT_SIGMA: f64 = 6.0;
const MAX_DOWNSCALE: u32 = 8;
/// Kernels never grow past this radius; wider blurs flatten toward a box filter.
pub(crate) const MAX_RADIUS: u32 = 256;

/// Kernel radius covering three standard deviations, capped at [`MAX_RADIUS`].
pub(crate) fn radius_for_sigma(sigma: f64) -> u32 {
    if !sigma.is_finite() || sigma <= 0.0 {
        return 0;
    }
    (sigma * 3.0).ceil().min(f64::from(MAX_RADIUS)) as u32
}

/// Integer downscale factor that keeps the effective sigma near [`MAX_DIRECT_SIGMA`].
pub(crate) fn downscale_for_sigma(sigma: f64) -> u32 {
    if !sigma.is_finite() || sigma <= MAX_DIRECT_SIGMA {
        return 1;
    }
    ((sigma / MAX_DIRECT_SIGMA).ceil() as u32).clamp(1, MAX_DOWNSCALE)
}

/// Separable gaussian blur over a premultiplied RGBA8 buffer. Edges clamp.
pub(crate) fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    sigma: f64,
) -> ThumbsmithResult<Vec<u8>> {
    let expected_len = rgba_len(width, height)?;
    if src.len() != expected_len {
        return Err(ThumbsmithError::render(
            "blur expects src matching width*height*4",
        ));
    }
    let radius = radius_for_sigma(sigma);
    if radius == 0 || width == 0 || height == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];
    pass(src, &mut tmp, width, height, &kernel, Axis::X);
    pass(&tmp, &mut out, width, height, &kernel, Axis::Y);
    Ok(out)
}

/// Q16 weights summing to exactly `1 << 16`.
fn gaussian_kernel_q16(radius: u32, sigma: f64) -> ThumbsmithResult<Vec<u32>> {
    let r = radius as i32;
    let denom = 2.0 * sigma * sigma;
    let weights_f: Vec<f64> = (-r..=r)
        .map(|i| {
            let x = f64::from(i);
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f64 = weights_f.iter().sum();
    if sum <= 0.0 || !sum.is_finite() {
        return Err(ThumbsmithError::render("gaussian kernel sum is zero"));
    }

    let mut weights: Vec<u32> = weights_f
        .iter()
        .map(|wf| ((wf / sum) * 65536.0).round().clamp(0.0, 65536.0) as u32)
        .collect();
    let acc: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    let mid = weights.len() / 2;
    weights[mid] = (i64::from(weights[mid]) + 65536 - acc).clamp(0, 65536) as u32;
    Ok(weights)
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

fn pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32], axis: Axis) {
    let radius = (k.len() / 2) as i32;
    let (w, h) = (width as i32, height as i32);
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let d = ki as i32 - radius;
                let (sx, sy) = match axis {
                    Axis::X => ((x + d).clamp(0, w - 1), y),
                    Axis::Y => (x, (y + d).clamp(0, h - 1)),
                };
                let idx = ((sy * w + sx) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = ((acc[c] + 32768) >> 16).min(255) as u8;
            }
        }
    }
}

/// Bilinear resample of a premultiplied RGBA8 buffer to `dst_w x dst_h`.
///
/// Sample positions use pixel centers so a layer drawn at `1/f` scale lines up with the full
/// canvas after upsampling.
pub(crate) fn resample_bilinear(
    src: &[u8],
    src_w: u32,
    src_h: u32,
    dst_w: u32,
    dst_h: u32,
) -> ThumbsmithResult<Vec<u8>> {
    if src.len() != rgba_len(src_w, src_h)? {
        return Err(ThumbsmithError::render(
            "resample expects src matching width*height*4",
        ));
    }
    let mut out = vec![0u8; rgba_len(dst_w, dst_h)?];
    if src_w == 0 || src_h == 0 {
        return Ok(out);
    }

    let sx_scale = f64::from(src_w) / f64::from(dst_w.max(1));
    let sy_scale = f64::from(src_h) / f64::from(dst_h.max(1));
    let max_x = f64::from(src_w - 1);
    let max_y = f64::from(src_h - 1);
    let at = |x: u32, y: u32, c: usize| f64::from(src[((y * src_w + x) as usize) * 4 + c]);

    for y in 0..dst_h {
        let fy = ((f64::from(y) + 0.5) * sy_scale - 0.5).clamp(0.0, max_y);
        let y0 = fy.floor() as u32;
        let y1 = (y0 + 1).min(src_h - 1);
        let ty = fy - f64::from(y0);
        for x in 0..dst_w {
            let fx = ((f64::from(x) + 0.5) * sx_scale - 0.5).clamp(0.0, max_x);
            let x0 = fx.floor() as u32;
            let x1 = (x0 + 1).min(src_w - 1);
            let tx = fx - f64::from(x0);
            let o = ((y * dst_w + x) as usize) * 4;
            for c in 0..4 {
                let top = at(x0, y0, c) * (1.0 - tx) + at(x1, y0, c) * tx;
                let bottom = at(x0, y1, c) * (1.0 - tx) + at(x1, y1, c) * tx;
                out[o + c] = (top * (1.0 - ty) + bottom * ty).round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    Ok(out)
}

fn rgba_len(width: u32, height: u32) -> ThumbsmithResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| ThumbsmithError::render("rgba buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
