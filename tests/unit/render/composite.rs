use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    assert_eq!(over(dst, [200, 200, 200, 200], 0.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let src = [255, 0, 0, 255];
    assert_eq!(over([0, 0, 0, 255], src, 1.0), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let src = [100, 110, 120, 200];
    assert_eq!(over([0, 0, 0, 0], src, 1.0), src);
}

#[test]
fn screen_with_transparent_src_is_noop() {
    let dst = [10, 20, 30, 255];
    assert_eq!(screen(dst, [0, 0, 0, 0]), dst);
}

#[test]
fn screen_never_darkens() {
    let dst = [40, 80, 120, 255];
    let out = screen(dst, [60, 10, 200, 255]);
    for i in 0..4 {
        assert!(out[i] >= dst[i]);
    }
    assert_eq!(screen(dst, [255, 255, 255, 255]), [255, 255, 255, 255]);
}

#[test]
fn in_place_ops_reject_mismatched_lengths() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4], 1.0).is_err());
    assert!(screen_in_place(&mut dst, &[0u8; 12]).is_err());
}

#[test]
fn coverage_is_full_inside_and_empty_at_extreme_corners() {
    assert_eq!(rounded_coverage(50, 50, 100, 100, 20.0), 1.0);
    assert_eq!(rounded_coverage(0, 50, 100, 100, 20.0), 1.0);
    assert_eq!(rounded_coverage(0, 0, 100, 100, 20.0), 0.0);
    assert_eq!(rounded_coverage(99, 99, 100, 100, 20.0), 0.0);
    assert_eq!(rounded_coverage(0, 0, 100, 100, 0.0), 1.0);
}

#[test]
fn rounded_frame_clears_or_mattes_corners() {
    let (w, h) = (40u32, 20u32);
    let fill = [200u8, 100, 50, 255];

    let mut clear = fill.repeat((w * h) as usize);
    apply_rounded_frame(&mut clear, w, h, 8.0, None).unwrap();
    assert_eq!(&clear[0..4], &[0, 0, 0, 0]);
    let mid = ((10 * w + 20) * 4) as usize;
    assert_eq!(&clear[mid..mid + 4], &fill);

    let matte = [2, 6, 23, 255];
    let mut matted = fill.repeat((w * h) as usize);
    apply_rounded_frame(&mut matted, w, h, 8.0, Some(matte)).unwrap();
    assert_eq!(&matted[0..4], &matte);
    assert_eq!(&matted[mid..mid + 4], &fill);
}
