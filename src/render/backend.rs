use std::path::PathBuf;

use crate::design::DesignSpec;
use crate::foundation::color::Rgb8;
use crate::foundation::core::Canvas;
use crate::foundation::error::ThumbsmithResult;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the `premultiplied` flag makes this explicit at API
/// boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`; `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// Anything that can paint a [`DesignSpec`] into a frame.
///
/// This is the "rendered region" the exporter captures from.
pub trait Rasterizer: Send + Sync {
    /// Size of the frames this rasterizer produces.
    fn canvas(&self) -> Canvas;

    fn rasterize(&self, design: &DesignSpec) -> ThumbsmithResult<FrameRGBA>;
}

/// Backend settings.
#[derive(Clone, Debug)]
pub struct RenderSettings {
    pub canvas: Canvas,
    /// Color behind the rounded frame corners; `None` leaves them transparent.
    pub matte: Option<Rgb8>,
    /// Corner radius in preview pixels.
    pub corner_radius: f64,
    /// Font file for all text; when unset, a few well-known system fonts are tried.
    pub font_path: Option<PathBuf>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            canvas: Canvas::HD,
            matte: None,
            corner_radius: 28.0,
            font_path: None,
        }
    }
}
