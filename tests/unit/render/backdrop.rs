use super::*;

#[test]
fn gradient_runs_corner_to_corner() {
    assert!(gradient_t(0.0, 0.0, 160.0, 90.0).abs() < 1e-9);
    assert!((gradient_t(160.0, 90.0, 160.0, 90.0) - 1.0).abs() < 1e-9);
    assert!((gradient_t(80.0, 45.0, 160.0, 90.0) - 0.5).abs() < 1e-9);
}

#[test]
fn backdrop_is_opaque_and_sized() {
    let canvas = Canvas::new(160, 90).unwrap();
    let px = paint_backdrop(canvas, Rgb8::new(0, 0, 0), Rgb8::new(0, 0, 255));
    assert_eq!(px.len(), canvas.byte_len());
    assert!(px.chunks_exact(4).all(|p| p[3] == 255));
}

#[test]
fn backdrop_follows_the_gradient_direction() {
    let canvas = Canvas::new(160, 90).unwrap();
    let px = paint_backdrop(canvas, Rgb8::new(0, 0, 0), Rgb8::new(0, 0, 255));
    let blue = |x: u32, y: u32| px[((y * 160 + x) * 4 + 2) as usize];
    // Bottom-right is past both highlights, so blue dominates there.
    assert!(blue(159, 89) > blue(0, 0));
    assert!(blue(159, 89) > 200);
}

#[test]
fn highlights_lighten_the_top_left() {
    let canvas = Canvas::new(160, 90).unwrap();
    let black = Rgb8::new(0, 0, 0);
    let px = paint_backdrop(canvas, black, black);
    let red = |x: u32, y: u32| px[((y * 160 + x) * 4) as usize];
    assert!(red(32, 18) > red(150, 85));
}
