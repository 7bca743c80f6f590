use super::*;

fn measured(scale: f64) -> Measured {
    let e = |w: f64, h: f64| Extent {
        width: w * scale,
        height: h * scale,
    };
    Measured {
        tagline: e(120.0, 16.0),
        badge: e(90.0, 20.0),
        title: e(500.0, 150.0),
        subtitle: e(400.0, 28.0),
        footer_left: e(200.0, 20.0),
        footer_right: e(140.0, 20.0),
    }
}

#[test]
fn preview_layout_matches_hand_computed_positions() {
    let canvas = Canvas::new(768, 432).unwrap();
    let l = layout_frame(canvas, &measured(1.0));

    assert_eq!(l.tagline_pill.x0, 48.0);
    assert_eq!(l.tagline_pill.width(), 152.0);
    assert_eq!(l.tagline_pill.height(), 32.0);
    // Badge is the taller pill (44px), so the tagline is centered on it.
    assert_eq!(l.tagline_pill.y0, 46.0);
    assert_eq!(l.badge_pill.x1, 720.0);
    assert_eq!(l.badge_pill.y0, 40.0);
    assert_eq!(l.badge_text, Point::new(l.badge_pill.x0 + 20.0, 52.0));

    assert_eq!(l.footer_left, Point::new(48.0, 372.0));
    assert_eq!(l.footer_right, Point::new(580.0, 372.0));
    assert_eq!(l.subtitle.y, 372.0 - 40.0 - 28.0);
    assert_eq!(l.title.y, l.subtitle.y - 24.0 - 150.0);
}

#[test]
fn layout_scales_with_canvas_width() {
    let small = layout_frame(Canvas::new(768, 432).unwrap(), &measured(1.0));
    let hd = Canvas::HD;
    let big = layout_frame(hd, &measured(hd.scale()));
    let s = hd.scale();
    assert!((big.tagline_pill.x0 - small.tagline_pill.x0 * s).abs() < 1e-9);
    assert!((big.title.y - small.title.y * s).abs() < 1e-6);
    assert!((big.footer_right.x - small.footer_right.x * s).abs() < 1e-6);
}

#[test]
fn tall_titles_never_climb_into_the_header() {
    let mut m = measured(1.0);
    m.title.height = 1000.0;
    let l = layout_frame(Canvas::new(768, 432).unwrap(), &m);
    assert!(l.title.y >= l.badge_pill.y1);
}

#[test]
fn estimates_wrap_long_text() {
    let one = estimate_extent("ABCD", 10.0, None);
    assert_eq!(one, Extent { width: 24.0, height: 12.5 });
    let wrapped = estimate_extent("ABCDEFGHIJ", 10.0, Some(25.0));
    assert_eq!(wrapped.width, 25.0);
    assert_eq!(wrapped.height, 3.0 * 12.5);
}
