use super::*;

#[test]
fn white_accent_gets_dark_text() {
    assert_eq!(contrast_color("#ffffff"), CONTRAST_DARK);
}

#[test]
fn slate_accent_gets_light_text() {
    assert_eq!(contrast_color("#0f172a"), CONTRAST_LIGHT);
}

#[test]
fn threshold_is_strict() {
    assert_eq!(contrast_for_luminance(0.55), CONTRAST_LIGHT);
    assert_eq!(contrast_for_luminance(0.550_000_1), CONTRAST_DARK);
    assert_eq!(contrast_for_luminance(0.0), CONTRAST_LIGHT);
    assert_eq!(contrast_for_luminance(1.0), CONTRAST_DARK);
}

#[test]
fn luminance_weights() {
    assert!((luminance(Rgb8::new(255, 255, 255)) - 1.0).abs() < 1e-12);
    assert!((luminance(Rgb8::new(255, 0, 0)) - 0.299).abs() < 1e-12);
    assert!((luminance(Rgb8::new(0, 255, 0)) - 0.587).abs() < 1e-12);
    assert!((luminance(Rgb8::new(0, 0, 255)) - 0.114).abs() < 1e-12);
}

#[test]
fn palette_accents_pick_expected_sides() {
    // Lime (#a3e635) is bright; rose (#db2777) is not.
    assert_eq!(contrast_color("#a3e635"), CONTRAST_DARK);
    assert_eq!(contrast_color("#db2777"), CONTRAST_LIGHT);
}

#[test]
fn unparseable_accent_falls_back_to_light() {
    assert_eq!(contrast_color("not-a-color"), CONTRAST_LIGHT);
    assert_eq!(contrast_color(""), CONTRAST_LIGHT);
}
