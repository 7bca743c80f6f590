use super::*;

#[test]
fn canvas_accepts_16_9_only() {
    assert_eq!(Canvas::new(1280, 720).unwrap(), Canvas::HD);
    assert!(Canvas::new(1920, 1080).is_ok());
    assert!(Canvas::new(1280, 721).is_err());
    assert!(Canvas::new(0, 0).is_err());
    assert!(Canvas::new(160_000, 90_000).is_err());

    let c = Canvas::new(320, 180).unwrap();
    assert_eq!((c.width(), c.height()), (320, 180));
}

#[test]
fn canvas_scale_is_relative_to_preview_width() {
    assert!((Canvas::new(768, 432).unwrap().scale() - 1.0).abs() < 1e-12);
    assert!((Canvas::HD.scale() - 1280.0 / 768.0).abs() < 1e-12);
}

#[test]
fn premul_from_straight() {
    assert_eq!(
        Rgba8Premul::from_straight_rgba(255, 128, 0, 255).to_array(),
        [255, 128, 0, 255]
    );
    assert_eq!(
        Rgba8Premul::from_straight_rgba(200, 100, 50, 0),
        Rgba8Premul::transparent()
    );
    assert_eq!(
        Rgba8Premul::from_straight_rgba(255, 255, 255, 128).to_array(),
        [128, 128, 128, 128]
    );
}
