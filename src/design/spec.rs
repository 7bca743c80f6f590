use serde::{Deserialize, Serialize};

use crate::foundation::color::is_hex6;
use crate::foundation::error::{ThumbsmithError, ThumbsmithResult};

/// Largest shape diameter accepted in a hand-edited design, in preview pixels.
pub const MAX_SHAPE_SIZE: u32 = 2000;
/// Largest shape blur accepted in a hand-edited design, in preview pixels.
pub const MAX_SHAPE_BLUR: u32 = 200;

/// One generated thumbnail concept.
///
/// Serialized with camelCase keys (`badgeText`, `accentColor`) so saved designs can be edited by
/// hand and fed back into the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSpec {
    /// Headline text.
    pub title: String,
    /// Supporting line under the headline.
    pub subtitle: String,
    /// Short label shown in the top-left pill.
    pub tagline: String,
    /// Call-to-action shown in the accent badge.
    pub badge_text: String,
    /// `#rrggbb` highlight color.
    pub accent_color: String,
    /// Background gradient, drawn at 135 degrees.
    pub gradient: Gradient,
    /// Decorative blurred circles.
    pub shapes: Vec<Shape>,
    /// Rationale notes for the user.
    pub suggestions: Vec<String>,
}

impl DesignSpec {
    /// Check a hand-edited design: `#rrggbb` colors, shapes inside the canvas with bounded
    /// size and blur.
    pub fn validate(&self) -> ThumbsmithResult<()> {
        for (field, value) in [
            ("accentColor", &self.accent_color),
            ("gradient.from", &self.gradient.from),
            ("gradient.to", &self.gradient.to),
        ] {
            if !is_hex6(value) {
                return Err(ThumbsmithError::validation(format!(
                    "{field} must be #rrggbb, got \"{value}\""
                )));
            }
        }
        for (i, shape) in self.shapes.iter().enumerate() {
            let in_range = (0.0..=100.0).contains(&shape.top)
                && (0.0..=100.0).contains(&shape.left)
                && (0.0..=1.0).contains(&shape.opacity);
            if !in_range {
                return Err(ThumbsmithError::validation(format!(
                    "shape {i} is out of range: {shape:?}"
                )));
            }
            if shape.size > MAX_SHAPE_SIZE || shape.blur > MAX_SHAPE_BLUR {
                return Err(ThumbsmithError::validation(format!(
                    "shape {i} exceeds size {MAX_SHAPE_SIZE} or blur {MAX_SHAPE_BLUR}: {shape:?}"
                )));
            }
        }
        Ok(())
    }
}

/// Two-stop background gradient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub from: String,
    pub to: String,
}

/// A decorative circle placement.
///
/// `top` and `left` are percentages of the canvas; `size` and `blur` are preview pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub top: f64,
    pub left: f64,
    pub size: u32,
    pub opacity: f32,
    pub blur: u32,
}

#[cfg(test)]
#[path = "../../tests/unit/design/spec.rs"]
mod tests;
