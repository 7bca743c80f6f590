use crate::foundation::core::{Canvas, Point, Rect};

pub(crate) const PAD_X: f64 = 48.0;
pub(crate) const PAD_Y: f64 = 40.0;
pub(crate) const TAGLINE_SIZE: f64 = 12.0;
pub(crate) const BADGE_SIZE: f64 = 14.0;
pub(crate) const TITLE_SIZE: f64 = 60.0;
pub(crate) const SUBTITLE_SIZE: f64 = 20.0;
pub(crate) const FOOTER_SIZE: f64 = 14.0;
pub(crate) const TITLE_MAX_WIDTH: f64 = 576.0;

const TAGLINE_PAD: (f64, f64) = (16.0, 8.0);
const BADGE_PAD: (f64, f64) = (20.0, 12.0);
const TITLE_GAP: f64 = 24.0;
const FOOTER_GAP: f64 = 40.0;
const HEADER_GAP: f64 = 16.0;

/// Measured size of a laid-out text block, in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Extent {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

/// Measured text blocks, one per foreground element.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Measured {
    pub(crate) tagline: Extent,
    pub(crate) badge: Extent,
    pub(crate) title: Extent,
    pub(crate) subtitle: Extent,
    pub(crate) footer_left: Extent,
    pub(crate) footer_right: Extent,
}

/// Where everything in the foreground goes. Text points are top-left corners.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrameLayout {
    pub(crate) tagline_pill: Rect,
    pub(crate) tagline_text: Point,
    pub(crate) badge_pill: Rect,
    pub(crate) badge_text: Point,
    pub(crate) title: Point,
    pub(crate) subtitle: Point,
    pub(crate) footer_left: Point,
    pub(crate) footer_right: Point,
}

/// Header row on top (tagline left, badge right), footer row at the bottom, headline block
/// stacked directly above the footer.
pub(crate) fn layout_frame(canvas: Canvas, m: &Measured) -> FrameLayout {
    let s = canvas.scale();
    let (w, h) = (f64::from(canvas.width()), f64::from(canvas.height()));
    let (pad_x, pad_y) = (PAD_X * s, PAD_Y * s);

    let tag_w = m.tagline.width + 2.0 * TAGLINE_PAD.0 * s;
    let tag_h = m.tagline.height + 2.0 * TAGLINE_PAD.1 * s;
    let badge_w = m.badge.width + 2.0 * BADGE_PAD.0 * s;
    let badge_h = m.badge.height + 2.0 * BADGE_PAD.1 * s;
    let row_h = tag_h.max(badge_h);

    let tag_y = pad_y + (row_h - tag_h) / 2.0;
    let tagline_pill = Rect::new(pad_x, tag_y, pad_x + tag_w, tag_y + tag_h);
    let badge_y = pad_y + (row_h - badge_h) / 2.0;
    let badge_pill = Rect::new(w - pad_x - badge_w, badge_y, w - pad_x, badge_y + badge_h);

    let footer_top = h - pad_y - m.footer_left.height.max(m.footer_right.height);
    let subtitle_top = footer_top - FOOTER_GAP * s - m.subtitle.height;
    let title_top = (subtitle_top - TITLE_GAP * s - m.title.height)
        .max(pad_y + row_h + HEADER_GAP * s);

    FrameLayout {
        tagline_pill,
        tagline_text: Point::new(
            tagline_pill.x0 + TAGLINE_PAD.0 * s,
            tagline_pill.y0 + TAGLINE_PAD.1 * s,
        ),
        badge_pill,
        badge_text: Point::new(badge_pill.x0 + BADGE_PAD.0 * s, badge_pill.y0 + BADGE_PAD.1 * s),
        title: Point::new(pad_x, title_top),
        subtitle: Point::new(pad_x, subtitle_top),
        footer_left: Point::new(pad_x, footer_top),
        footer_right: Point::new(w - pad_x - m.footer_right.width, footer_top),
    }
}

/// Size of `text` at `size_px` without a font: 0.6em per char, 1.25em lines, wrapped at
/// `max_width` by whole-width slices.
pub(crate) fn estimate_extent(text: &str, size_px: f64, max_width: Option<f64>) -> Extent {
    let width = super::text::estimate_width(text.chars().count(), size_px);
    let line_h = size_px * 1.25;
    match max_width {
        Some(max) if max > 0.0 && width > max => Extent {
            width: max,
            height: (width / max).ceil() * line_h,
        },
        _ => Extent {
            width,
            height: line_h,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
