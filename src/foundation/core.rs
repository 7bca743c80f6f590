use crate::foundation::error::{ThumbsmithError, ThumbsmithResult};

pub use kurbo::{Point, Rect};

/// Logical preview width the design's pixel values (shape size, blur) are expressed in.
pub const PREVIEW_WIDTH: f64 = 768.0;

/// Output surface size in pixels.
///
/// Only constructible through [`Canvas::new`], so every value is non-empty, 16:9 and fits a
/// `u16` raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    /// Default export target.
    pub const HD: Canvas = Canvas {
        width: 1280,
        height: 720,
    };

    pub fn new(width: u32, height: u32) -> ThumbsmithResult<Self> {
        if width == 0 || height == 0 {
            return Err(ThumbsmithError::validation("canvas must be non-empty"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(ThumbsmithError::validation(
                "canvas dimensions must fit in u16",
            ));
        }
        if u64::from(width) * 9 != u64::from(height) * 16 {
            return Err(ThumbsmithError::validation(format!(
                "canvas must be 16:9, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub const fn width(self) -> u32 {
        self.width
    }

    pub const fn height(self) -> u32 {
        self.height
    }

    /// Factor mapping preview pixels onto this canvas.
    pub fn scale(self) -> f64 {
        f64::from(self.width) / PREVIEW_WIDTH
    }

    pub(crate) fn dims_u16(self) -> ThumbsmithResult<(u16, u16)> {
        let w: u16 = self
            .width
            .try_into()
            .map_err(|_| ThumbsmithError::render("canvas width exceeds u16"))?;
        let h: u16 = self
            .height
            .try_into()
            .map_err(|_| ThumbsmithError::render("canvas height exceeds u16"))?;
        Ok((w, h))
    }

    pub(crate) fn byte_len(self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::HD
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
