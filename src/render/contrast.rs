use crate::foundation::color::Rgb8;

/// Foreground used on light accents.
pub const CONTRAST_DARK: &str = "#0f172a";
/// Foreground used on dark accents.
pub const CONTRAST_LIGHT: &str = "#f8fafc";
pub const LUMINANCE_THRESHOLD: f64 = 0.55;

/// `(0.299r + 0.587g + 0.114b) / 255`, in `[0, 1]`.
pub fn luminance(c: Rgb8) -> f64 {
    (0.299 * f64::from(c.r) + 0.587 * f64::from(c.g) + 0.114 * f64::from(c.b)) / 255.0
}

/// Strictly above the threshold is dark; exactly 0.55 stays light.
pub fn contrast_for_luminance(luminance: f64) -> &'static str {
    if luminance > LUMINANCE_THRESHOLD {
        CONTRAST_DARK
    } else {
        CONTRAST_LIGHT
    }
}

/// Badge text color for an accent given as `#rrggbb`.
///
/// An accent that does not parse gets the light foreground.
pub fn contrast_color(accent: &str) -> &'static str {
    match Rgb8::from_hex(accent) {
        Ok(c) => contrast_for_luminance(luminance(c)),
        Err(_) => CONTRAST_LIGHT,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/contrast.rs"]
mod tests;
