use super::*;
use crate::design::generate_design;
use crate::render::layout::{Measured, estimate_extent};

fn small_settings() -> RenderSettings {
    RenderSettings {
        canvas: Canvas::new(160, 90).unwrap(),
        ..RenderSettings::default()
    }
}

fn design() -> DesignSpec {
    generate_design("High-energy gaming thumbnail announcing a Fortnite tournament with prizes.")
}

#[test]
fn frame_matches_canvas_and_is_premultiplied() {
    let r = CpuRenderer::without_text(small_settings());
    let frame = r.rasterize(&design()).unwrap();
    assert_eq!((frame.width, frame.height), (160, 90));
    assert_eq!(frame.data.len(), 160 * 90 * 4);
    assert!(frame.premultiplied);
    assert!(
        frame
            .data
            .chunks_exact(4)
            .all(|p| p[0] <= p[3] && p[1] <= p[3] && p[2] <= p[3])
    );
}

#[test]
fn rendering_is_deterministic() {
    let r = CpuRenderer::without_text(small_settings());
    let d = design();
    assert_eq!(r.rasterize(&d).unwrap().data, r.rasterize(&d).unwrap().data);
}

#[test]
fn corners_are_transparent_without_a_matte() {
    let r = CpuRenderer::without_text(small_settings());
    let frame = r.rasterize(&design()).unwrap();
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(159, 89), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(80, 45).map(|p| p[3]), Some(255));
}

#[test]
fn matte_fills_the_corners() {
    let settings = RenderSettings {
        matte: Some(Rgb8::new(2, 6, 23)),
        ..small_settings()
    };
    let frame = CpuRenderer::without_text(settings)
        .rasterize(&design())
        .unwrap();
    assert_eq!(frame.pixel(0, 0), Some([2, 6, 23, 255]));
    assert!(frame.data.chunks_exact(4).all(|p| p[3] == 255));
}

#[test]
fn badge_pill_is_painted_in_the_accent_color() {
    let settings = small_settings();
    let canvas = settings.canvas;
    let d = design();
    let s = canvas.scale();
    let frame = CpuRenderer::without_text(settings).rasterize(&d).unwrap();

    let m = Measured {
        tagline: estimate_extent(&d.tagline.to_uppercase(), TAGLINE_SIZE * s, None),
        badge: estimate_extent(&d.badge_text, BADGE_SIZE * s, None),
        ..Measured::default()
    };
    let pill = layout_frame(canvas, &m).badge_pill;
    let c = pill.center();
    let px = frame.pixel(c.x as u32, c.y as u32).unwrap();
    let accent = Rgb8::from_hex(&d.accent_color).unwrap();
    for (got, want) in px.iter().zip([accent.r, accent.g, accent.b, 255]) {
        assert!(got.abs_diff(want) <= 2, "{px:?} vs {accent:?}");
    }
}

#[test]
fn shapes_only_lighten_the_backdrop() {
    let r = CpuRenderer::without_text(small_settings());
    let mut bare = design();
    bare.shapes.clear();
    let with_shapes = r.rasterize(&design()).unwrap();
    let without = r.rasterize(&bare).unwrap();
    let sum = |f: &FrameRGBA| f.data.iter().map(|&b| u64::from(b)).sum::<u64>();
    assert!(sum(&with_shapes) > sum(&without));
    for (a, b) in with_shapes.data.iter().zip(&without.data) {
        assert!(a >= b);
    }
}

#[test]
fn invalid_colors_are_reported() {
    let r = CpuRenderer::without_text(small_settings());
    let mut d = design();
    d.accent_color = "chartreuse".to_owned();
    assert!(r.rasterize(&d).is_err());

    let mut d = design();
    d.gradient.to = "#12345".to_owned();
    assert!(r.rasterize(&d).is_err());

    let mut d = design();
    d.gradient.from = "#+f+f+f".to_owned();
    assert!(r.rasterize(&d).is_err());
}

#[test]
fn missing_configured_font_fails_construction() {
    let settings = RenderSettings {
        font_path: Some("/no/such/font.ttf".into()),
        ..small_settings()
    };
    assert!(CpuRenderer::new(settings).is_err());
}

#[test]
fn text_renderer_matches_canvas_when_a_font_is_available() {
    let r = CpuRenderer::new(small_settings()).unwrap();
    let frame = r.rasterize(&design()).unwrap();
    assert_eq!(frame.data.len(), 160 * 90 * 4);
    if r.draws_text() {
        let plain = CpuRenderer::without_text(small_settings())
            .rasterize(&design())
            .unwrap();
        assert_ne!(frame.data, plain.data);
    }
}

#[test]
fn extreme_blur_renders_without_overflow() {
    let r = CpuRenderer::without_text(small_settings());
    let mut d = design();
    d.shapes.truncate(1);
    d.shapes[0].blur = 20_000_000;
    let frame = r.rasterize(&d).unwrap();
    assert_eq!(frame.data.len(), 160 * 90 * 4);

    d.shapes[0].blur = u32::MAX;
    assert!(r.rasterize(&d).is_ok());
}
