use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.iter().count(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(2)).is_err());
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_frame_secs_conversion() {
    let fps = Fps::STANDARD;
    assert_eq!(fps.frame_to_secs(FrameIndex(45)), 1.5);
    assert_eq!(fps.secs_to_frame_floor(1.5), FrameIndex(45));
    assert_eq!(fps.secs_to_frame_floor(-2.0), FrameIndex(0));
}

#[test]
fn canvas_center() {
    assert_eq!(Canvas::PORTRAIT.center(), Point::new(540.0, 960.0));
}

#[test]
fn premul_halves_channels_at_half_alpha() {
    let c = Rgba8 {
        r: 200,
        g: 100,
        b: 0,
        a: 128,
    };
    assert_eq!(c.to_premul(), [100, 50, 0, 128]);
    assert_eq!(Rgba8::WHITE.with_alpha_mul(0.5).a, 128);
}

#[test]
fn hex_output_omits_opaque_alpha() {
    assert_eq!(Rgba8::rgb(255, 0, 16).to_hex(), "#ff0010");
    assert_eq!(Rgba8::WHITE.with_alpha_mul(0.0).to_hex(), "#ffffff00");
}
