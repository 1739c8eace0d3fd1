use super::*;
use serde_json::json;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn frame_range_clamp_and_shift() {
    let r = FrameRange::new(FrameIndex(10), FrameIndex(20)).unwrap();
    assert_eq!(r.clamp(FrameIndex(3)), FrameIndex(10));
    assert_eq!(r.clamp(FrameIndex(99)), FrameIndex(19));
    let s = r.shift(-15);
    assert_eq!(s.start, FrameIndex(0));
    assert_eq!(s.end, FrameIndex(5));
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn fps_rejects_zero() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn transform_to_affine_identity_and_translation() {
    let t = Transform2D::default();
    assert_eq!(t.to_affine(), Affine::IDENTITY);
    assert!(t.is_identity());

    let t = Transform2D::translate(10.0, -2.5);
    assert_eq!(t.to_affine(), Affine::translate(Vec2::new(10.0, -2.5)));
}

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba8 = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgba8::rgb(255, 0, 0));

    let c: Rgba8 = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert_eq!(c, Rgba8::rgba(0, 0, 255, 128));

    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#zz0000").is_err());
}

#[test]
fn parses_rgba_object_array_and_hsla() {
    let c: Rgba8 = serde_json::from_value(json!({"r": 1.0, "g": 0.0, "b": 0.0, "a": 0.5})).unwrap();
    assert_eq!(c, Rgba8::rgba(255, 0, 0, 128));

    let c: Rgba8 = serde_json::from_value(json!([0.0, 1.0, 0.0])).unwrap();
    assert_eq!(c, Rgba8::rgb(0, 255, 0));

    let c: Rgba8 = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    assert_eq!(c, Rgba8::rgb(255, 0, 0));
}

#[test]
fn color_serializes_as_hex() {
    let v = serde_json::to_value(Rgba8::rgba(0x8b, 0x5c, 0xf6, 0xff)).unwrap();
    assert_eq!(v, json!("#8b5cf6ff"));
}

#[test]
fn with_opacity_scales_alpha() {
    assert_eq!(Rgba8::WHITE.with_opacity(0.5).a, 128);
    assert_eq!(Rgba8::WHITE.with_opacity(2.0).a, 255);
}
