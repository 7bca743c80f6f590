use super::*;

#[test]
fn parses_hex_with_and_without_hash() {
    assert_eq!(Rgb8::from_hex("#ff0000").unwrap(), Rgb8::new(255, 0, 0));
    assert_eq!(Rgb8::from_hex("0F172A").unwrap(), Rgb8::new(15, 23, 42));
    assert_eq!(Rgb8::from_hex("  #f8fafc ").unwrap(), Rgb8::new(248, 250, 252));
}

#[test]
fn rejects_malformed_hex() {
    assert!(Rgb8::from_hex("#fff").is_err());
    assert!(Rgb8::from_hex("#gg0000").is_err());
    assert!(Rgb8::from_hex("#ff00001a").is_err());
    assert!(Rgb8::from_hex("").is_err());
    assert!(Rgb8::from_hex("#ééé").is_err());
    assert!(Rgb8::from_hex("#+f+f+f").is_err());
    assert!(Rgb8::from_hex("-fffff").is_err());
}

#[test]
fn hex_formatting_is_lowercase_six_digits() {
    let c = Rgb8::new(10, 171, 255);
    assert_eq!(c.to_hex(), "#0aabff");
    assert!(is_hex6(&c.to_hex()));
    assert!(!is_hex6("#0aabf"));
    assert!(!is_hex6("0aabff0"));
}

#[test]
fn lerp_endpoints_and_midpoint() {
    let a = Rgb8::new(0, 100, 200);
    let b = Rgb8::new(200, 100, 0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Rgb8::new(100, 100, 100));
    assert_eq!(a.lerp(b, 7.0), b);
}
