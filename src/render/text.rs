use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::foundation::error::{ThumbsmithError, ThumbsmithResult};

/// Bold sans faces probed, in order, when no font file is configured.
pub(crate) const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

/// Font bytes loaded once per renderer.
#[derive(Clone, Debug)]
pub(crate) struct LoadedFont {
    pub(crate) path: PathBuf,
    pub(crate) bytes: Arc<Vec<u8>>,
}

/// Load the configured font, or the first readable system candidate.
///
/// A configured path that cannot be read is an error. Missing system fonts are not: the
/// renderer then draws every element except glyphs.
pub(crate) fn resolve_font(configured: Option<&Path>) -> ThumbsmithResult<Option<LoadedFont>> {
    if let Some(path) = configured {
        let bytes = std::fs::read(path).map_err(|e| {
            ThumbsmithError::validation(format!("read font {}: {e}", path.display()))
        })?;
        return Ok(Some(LoadedFont {
            path: path.to_path_buf(),
            bytes: Arc::new(bytes),
        }));
    }

    for candidate in SYSTEM_FONT_CANDIDATES {
        let path = Path::new(candidate);
        if let Ok(bytes) = std::fs::read(path) {
            tracing::debug!(font = %path.display(), "using system font");
            return Ok(Some(LoadedFont {
                path: path.to_path_buf(),
                bytes: Arc::new(bytes),
            }));
        }
    }

    tracing::warn!("no usable font found; text will be skipped (pass a font path to fix)");
    Ok(None)
}

/// Stateful helper for building Parley text layouts from a single registered face.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
}

impl TextLayoutEngine {
    /// Register `font_bytes` with a fresh font collection.
    pub(crate) fn new(font_bytes: &[u8]) -> ThumbsmithResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            ThumbsmithError::validation("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ThumbsmithError::validation("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    /// Shape and lay out `text`, wrapping at `max_width_px` when given.
    pub(crate) fn layout_plain(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
        max_width_px: Option<f32>,
    ) -> ThumbsmithResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ThumbsmithError::render(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(max_width_px);
        layout.align(
            max_width_px,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        Ok(layout)
    }
}

/// Width of a single line of `chars` glyphs when no font is available.
pub(crate) fn estimate_width(chars: usize, size_px: f64) -> f64 {
    chars as f64 * size_px * 0.6
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
