use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::foundation::color::Rgb8;
use crate::foundation::core::Canvas;
use crate::foundation::error::{ThumbsmithError, ThumbsmithResult};
use crate::render::RenderSettings;

/// Export and rendering settings, loadable from a JSON file.
///
/// Every field has a default, so `{}` is a valid settings file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailSettings {
    pub width: u32,
    pub height: u32,
    /// Leave the area outside the rounded corners transparent.
    pub transparent_background: bool,
    /// `#rrggbb` behind the corners when `transparent_background` is off.
    pub matte_color: String,
    /// Corner radius in preview pixels.
    pub corner_radius: f64,
    pub font_path: Option<PathBuf>,
    pub out_dir: PathBuf,
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            width: Canvas::HD.width(),
            height: Canvas::HD.height(),
            transparent_background: true,
            matte_color: "#020617".to_owned(),
            corner_radius: 28.0,
            font_path: None,
            out_dir: PathBuf::from("."),
        }
    }
}

impl ThumbnailSettings {
    /// Read and validate a JSON settings file.
    pub fn load(path: &Path) -> ThumbsmithResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read settings {}", path.display()))?;
        let settings: Self = serde_json::from_str(&text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Output canvas: non-zero, fits in `u16`, exactly 16:9.
    pub fn canvas(&self) -> ThumbsmithResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    pub fn validate(&self) -> ThumbsmithResult<()> {
        self.canvas()?;
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ThumbsmithError::validation(
                "corner_radius must be finite and >= 0",
            ));
        }
        if !self.transparent_background {
            Rgb8::from_hex(&self.matte_color)?;
        }
        Ok(())
    }

    pub fn to_render_settings(&self) -> ThumbsmithResult<RenderSettings> {
        self.validate()?;
        let matte = if self.transparent_background {
            None
        } else {
            Some(Rgb8::from_hex(&self.matte_color)?)
        };
        Ok(RenderSettings {
            canvas: self.canvas()?,
            matte,
            corner_radius: self.corner_radius,
            font_path: self.font_path.clone(),
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
