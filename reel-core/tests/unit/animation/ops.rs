use super::*;

#[test]
fn elapsed_is_negative_before_trigger() {
    assert_eq!(elapsed(5, 8), -3);
    assert_eq!(elapsed(8, 8), 0);
    assert_eq!(elapsed(20, 8), 12);
}

#[test]
fn window_is_half_open() {
    assert!(!in_window(9, 10, 5));
    assert!(in_window(10, 10, 5));
    assert!(in_window(14, 10, 5));
    assert!(!in_window(15, 10, 5));
    assert!(!in_window(10, 10, 0));
}

#[test]
fn local_frame_maps_into_sequence() {
    assert_eq!(local_frame(99, 100, 50), None);
    assert_eq!(local_frame(100, 100, 50), Some(0));
    assert_eq!(local_frame(149, 100, 50), Some(49));
    assert_eq!(local_frame(150, 100, 50), None);
}

#[test]
fn stagger_spaces_triggers() {
    let starts: Vec<i64> = (0..4).map(|i| stagger_start(20, i, 15)).collect();
    assert_eq!(starts, vec![20, 35, 50, 65]);
}

#[test]
fn loop_repeat_wraps_including_negative_frames() {
    assert_eq!(loop_frame(7, 5, LoopMode::Repeat).unwrap(), 2);
    assert_eq!(loop_frame(-1, 5, LoopMode::Repeat).unwrap(), 4);
}

#[test]
fn loop_ping_pong_bounces() {
    let seq: Vec<u64> = (0..9)
        .map(|f| loop_frame(f, 4, LoopMode::PingPong).unwrap())
        .collect();
    assert_eq!(seq, vec![0, 1, 2, 3, 2, 1, 0, 1, 2]);
    assert_eq!(loop_frame(17, 1, LoopMode::PingPong).unwrap(), 0);
}

#[test]
fn loop_rejects_zero_period() {
    assert!(loop_frame(3, 0, LoopMode::Repeat).is_err());
}

#[test]
fn reverse_maps_frames() {
    assert_eq!(reverse_frame(0, 10).unwrap(), 9);
    assert_eq!(reverse_frame(9, 10).unwrap(), 0);
    assert_eq!(reverse_frame(-4, 10).unwrap(), 9);
    assert_eq!(reverse_frame(40, 10).unwrap(), 0);
    assert!(reverse_frame(0, 0).is_err());
}

#[test]
fn drift_wraps_into_span() {
    assert_eq!(drift(10.0, 2.0, 5.0, 100.0), 25.0);
    assert_eq!(drift(100.0, 2.0, 5.0, 100.0), 5.0);
    assert_eq!(drift(100.0, 2.0, 5.0, 0.0), 205.0);
}

#[test]
fn oscillate_is_bounded() {
    for f in 0..500 {
        let v = oscillate(f64::from(f), 0.03, 1.5, 20.0);
        assert!(v.abs() <= 20.0);
    }
    assert_eq!(oscillate(0.0, 1.0, 0.0, 5.0), 0.0);
}
