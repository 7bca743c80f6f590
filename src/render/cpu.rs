use vello_cpu::kurbo::Shape as _;

use crate::design::{DesignSpec, Shape};
use crate::foundation::color::Rgb8;
use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::error::{ThumbsmithError, ThumbsmithResult};
use crate::render::backdrop::paint_backdrop;
use crate::render::backend::{FrameRGBA, Rasterizer, RenderSettings};
use crate::render::blur::{blur_rgba8_premul, downscale_for_sigma, resample_bilinear};
use crate::render::composite::{apply_rounded_frame, over_in_place, screen_in_place};
use crate::render::contrast::contrast_color;
use crate::render::layout::{
    BADGE_SIZE, Extent, FOOTER_SIZE, Measured, SUBTITLE_SIZE, TAGLINE_SIZE, TITLE_MAX_WIDTH,
    TITLE_SIZE, estimate_extent, layout_frame,
};
use crate::render::text::{LoadedFont, TextBrushRgba8, TextLayoutEngine, resolve_font};

pub const FOOTER_LEFT: &str = "Hook • Mood • Composition";
pub const FOOTER_RIGHT: &str = "Designed in seconds";

const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
const TAGLINE_PILL_ALPHA: u8 = 26;
const TAGLINE_TEXT_ALPHA: u8 = 204;
const SUBTITLE_ALPHA: u8 = 204;
const FOOTER_ALPHA: u8 = 179;

/// Software rasterizer built on `vello_cpu` and `parley`.
///
/// Paints, back to front: the gradient backdrop, blurred accent shapes (screen-blended), the
/// pills and text, then clips to the rounded frame.
pub struct CpuRenderer {
    settings: RenderSettings,
    font: Option<LoadedFont>,
    glyph_font: Option<vello_cpu::peniko::FontData>,
}

impl std::fmt::Debug for CpuRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuRenderer")
            .field("settings", &self.settings)
            .field("font", &self.font.as_ref().map(|font| &font.path))
            .finish()
    }
}

impl CpuRenderer {
    /// Build a renderer, resolving the font from `settings.font_path` or the system.
    pub fn new(settings: RenderSettings) -> ThumbsmithResult<Self> {
        let font = resolve_font(settings.font_path.as_deref())?;
        if let Some(loaded) = &font {
            // Fail on an unusable face here rather than on every frame.
            TextLayoutEngine::new(&loaded.bytes)?;
        }
        Ok(Self::with_font(settings, font))
    }

    /// Renderer that never draws glyphs; pills and layout use estimated text sizes.
    pub fn without_text(settings: RenderSettings) -> Self {
        Self::with_font(settings, None)
    }

    fn with_font(settings: RenderSettings, font: Option<LoadedFont>) -> Self {
        let glyph_font = font.as_ref().map(|f| {
            vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(f.bytes.as_ref().clone()),
                0,
            )
        });
        Self {
            settings,
            font,
            glyph_font,
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn draws_text(&self) -> bool {
        self.font.is_some()
    }
}

impl Rasterizer for CpuRenderer {
    fn canvas(&self) -> Canvas {
        self.settings.canvas
    }

    #[tracing::instrument(
        skip_all,
        fields(width = self.settings.canvas.width(), height = self.settings.canvas.height())
    )]
    fn rasterize(&self, design: &DesignSpec) -> ThumbsmithResult<FrameRGBA> {
        let canvas = self.settings.canvas;
        let accent = Rgb8::from_hex(&design.accent_color)?;
        let from = Rgb8::from_hex(&design.gradient.from)?;
        let to = Rgb8::from_hex(&design.gradient.to)?;

        let mut data = paint_backdrop(canvas, from, to);
        for shape in &design.shapes {
            let layer = render_shape_layer(canvas, shape, accent)?;
            screen_in_place(&mut data, &layer)?;
        }

        let foreground = self.render_foreground(canvas, design, accent)?;
        over_in_place(&mut data, &foreground, 1.0)?;

        let radius = self.settings.corner_radius * canvas.scale();
        let matte = self.settings.matte.map(|m| m.with_alpha(255).to_array());
        apply_rounded_frame(&mut data, canvas.width(), canvas.height(), radius, matte)?;

        Ok(FrameRGBA {
            width: canvas.width(),
            height: canvas.height(),
            data,
            premultiplied: true,
        })
    }
}

/// One blurred accent circle on a transparent full-canvas layer.
///
/// Wide blurs are computed on a downscaled layer and resampled back up.
fn render_shape_layer(canvas: Canvas, shape: &Shape, accent: Rgb8) -> ThumbsmithResult<Vec<u8>> {
    let s = canvas.scale();
    let sigma = f64::from(shape.blur) * s;
    let factor = downscale_for_sigma(sigma);
    let f = f64::from(factor);
    let (width, height) = (canvas.width(), canvas.height());
    let (layer_w, layer_h) = (width.div_ceil(factor), height.div_ceil(factor));
    // The canvas fits u16, so a downscaled layer does too.
    let (lw, lh) = (layer_w as u16, layer_h as u16);

    let diameter = f64::from(shape.size) * s;
    let left = shape.left / 100.0 * f64::from(width);
    let top = shape.top / 100.0 * f64::from(height);
    let center =
        vello_cpu::kurbo::Point::new((left + diameter / 2.0) / f, (top + diameter / 2.0) / f);
    let alpha = (f64::from(shape.opacity).clamp(0.0, 1.0) * 255.0).round() as u8;

    let mut ctx = vello_cpu::RenderContext::new(lw, lh);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        accent.r, accent.g, accent.b, alpha,
    ));
    ctx.fill_path(&vello_cpu::kurbo::Circle::new(center, diameter / 2.0 / f).to_path(0.1));
    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(lw, lh);
    ctx.render_to_pixmap(&mut pixmap);

    let blurred = blur_rgba8_premul(pixmap.data_as_u8_slice(), layer_w, layer_h, sigma / f)?;
    if factor == 1 {
        return Ok(blurred);
    }
    resample_bilinear(&blurred, layer_w, layer_h, width, height)
}

struct TextBlock {
    layout: Option<parley::Layout<TextBrushRgba8>>,
    extent: Extent,
}

fn brush(c: Rgb8, a: u8) -> TextBrushRgba8 {
    TextBrushRgba8 {
        r: c.r,
        g: c.g,
        b: c.b,
        a,
    }
}

impl CpuRenderer {
    fn measure(
        engine: Option<&mut TextLayoutEngine>,
        text: &str,
        size_px: f64,
        color: TextBrushRgba8,
        max_width: Option<f64>,
    ) -> ThumbsmithResult<TextBlock> {
        let Some(engine) = engine else {
            return Ok(TextBlock {
                layout: None,
                extent: estimate_extent(text, size_px, max_width),
            });
        };
        let layout =
            engine.layout_plain(text, size_px as f32, color, max_width.map(|w| w as f32))?;
        let extent = Extent {
            width: f64::from(layout.width()),
            height: f64::from(layout.height()),
        };
        Ok(TextBlock {
            layout: Some(layout),
            extent,
        })
    }

    fn render_foreground(
        &self,
        canvas: Canvas,
        design: &DesignSpec,
        accent: Rgb8,
    ) -> ThumbsmithResult<Vec<u8>> {
        let s = canvas.scale();
        let mut engine = match &self.font {
            Some(font) => Some(TextLayoutEngine::new(&font.bytes)?),
            None => None,
        };
        let badge_fg = Rgb8::from_hex(contrast_color(&design.accent_color))?;

        let tagline = Self::measure(
            engine.as_mut(),
            &design.tagline.to_uppercase(),
            TAGLINE_SIZE * s,
            brush(WHITE, TAGLINE_TEXT_ALPHA),
            None,
        )?;
        let badge = Self::measure(
            engine.as_mut(),
            &design.badge_text,
            BADGE_SIZE * s,
            brush(badge_fg, 255),
            None,
        )?;
        let title = Self::measure(
            engine.as_mut(),
            &design.title.to_uppercase(),
            TITLE_SIZE * s,
            brush(WHITE, 255),
            Some(TITLE_MAX_WIDTH * s),
        )?;
        let subtitle = Self::measure(
            engine.as_mut(),
            &design.subtitle,
            SUBTITLE_SIZE * s,
            brush(WHITE, SUBTITLE_ALPHA),
            Some(TITLE_MAX_WIDTH * s),
        )?;
        let footer_left = Self::measure(
            engine.as_mut(),
            FOOTER_LEFT,
            FOOTER_SIZE * s,
            brush(WHITE, FOOTER_ALPHA),
            None,
        )?;
        let footer_right = Self::measure(
            engine.as_mut(),
            FOOTER_RIGHT,
            FOOTER_SIZE * s,
            brush(WHITE, FOOTER_ALPHA),
            None,
        )?;

        let frame = layout_frame(
            canvas,
            &Measured {
                tagline: tagline.extent,
                badge: badge.extent,
                title: title.extent,
                subtitle: subtitle.extent,
                footer_left: footer_left.extent,
                footer_right: footer_right.extent,
            },
        );

        let (w, h) = canvas.dims_u16()?;
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        fill_pill(&mut ctx, frame.tagline_pill, WHITE, TAGLINE_PILL_ALPHA);
        fill_pill(&mut ctx, frame.badge_pill, accent, 255);

        if let Some(font) = &self.glyph_font {
            for (block, origin) in [
                (&tagline, frame.tagline_text),
                (&badge, frame.badge_text),
                (&title, frame.title),
                (&subtitle, frame.subtitle),
                (&footer_left, frame.footer_left),
                (&footer_right, frame.footer_right),
            ] {
                if let Some(layout) = &block.layout {
                    draw_layout(&mut ctx, font, layout, origin);
                }
            }
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);
        let data = pixmap.data_as_u8_slice().to_vec();
        if data.len() != canvas.byte_len() {
            return Err(ThumbsmithError::render("foreground pixmap size mismatch"));
        }
        Ok(data)
    }
}

fn fill_pill(ctx: &mut vello_cpu::RenderContext, rect: Rect, color: Rgb8, alpha: u8) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, alpha,
    ));
    let pill = vello_cpu::kurbo::RoundedRect::new(
        rect.x0,
        rect.y0,
        rect.x1,
        rect.y1,
        rect.height() / 2.0,
    );
    ctx.fill_path(&pill.to_path(0.1));
}

fn draw_layout(
    ctx: &mut vello_cpu::RenderContext,
    font: &vello_cpu::peniko::FontData,
    layout: &parley::Layout<TextBrushRgba8>,
    origin: Point,
) {
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
