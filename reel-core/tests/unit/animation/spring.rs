use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn starts_at_zero_for_every_valid_config() {
    for ratio in [0.1, 0.5, 1.0, 1.5, 4.0] {
        for stiffness in [10.0, 100.0, 400.0] {
            let cfg = SpringConfig::with_ratio(ratio, stiffness);
            assert_eq!(spring_progress(0.0, fps30(), &cfg).unwrap(), 0.0);
        }
    }
}

#[test]
fn not_yet_triggered_is_zero() {
    let cfg = SpringConfig::default();
    assert_eq!(spring_progress(-12.0, fps30(), &cfg).unwrap(), 0.0);
    assert_eq!(spring_progress(f64::NAN, fps30(), &cfg).unwrap(), 0.0);
}

#[test]
fn critically_damped_settles_within_a_second() {
    let cfg = SpringConfig::critically_damped(100.0);
    let v = spring_progress(30.0, fps30(), &cfg).unwrap();
    assert!((v - 1.0).abs() < 0.02, "got {v}");
}

#[test]
fn damped_and_overdamped_converge_monotonically() {
    for ratio in [1.0, 1.5, 3.0] {
        let cfg = SpringConfig::with_ratio(ratio, 100.0);
        let mut prev = 0.0;
        for f in 0..=600 {
            let v = spring_progress(f64::from(f), fps30(), &cfg).unwrap();
            assert!(v >= prev, "ratio {ratio} decreased at frame {f}");
            assert!(v <= 1.0, "ratio {ratio} overshot at frame {f}");
            prev = v;
        }
        assert!((prev - 1.0).abs() < 1e-3, "ratio {ratio} ended at {prev}");
    }
}

#[test]
fn underdamped_overshoots_then_settles() {
    let cfg = SpringConfig::with_ratio(0.5, 100.0);
    let peak = (0..60)
        .map(|f| spring_progress(f64::from(f), fps30(), &cfg).unwrap())
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.1, "peak {peak}");
    let late = spring_progress(300.0, fps30(), &cfg).unwrap();
    assert!((late - 1.0).abs() < 1e-3);
}

#[test]
fn overshoot_clamping_caps_at_one() {
    let cfg = SpringConfig::with_ratio(0.3, 150.0).with_overshoot_clamping(true);
    for f in 0..120 {
        assert!(spring_progress(f64::from(f), fps30(), &cfg).unwrap() <= 1.0);
    }
}

#[test]
fn reevaluation_is_bit_identical() {
    let cfg = SpringConfig::from_damping(12.0, 80.0, 1.0);
    let forward: Vec<u64> = (0..90)
        .map(|f| spring_progress(f64::from(f), fps30(), &cfg).unwrap().to_bits())
        .collect();
    for f in (0..90).rev() {
        let v = spring_progress(f64::from(f), fps30(), &cfg).unwrap();
        assert_eq!(v.to_bits(), forward[f as usize]);
    }
}

#[test]
fn rejects_non_positive_parameters() {
    let bad = [
        SpringConfig::with_ratio(0.0, 100.0),
        SpringConfig::with_ratio(-1.0, 100.0),
        SpringConfig::with_ratio(1.0, 0.0),
        SpringConfig::with_ratio(1.0, 100.0).with_mass(0.0),
        SpringConfig::with_ratio(f64::NAN, 100.0),
        SpringConfig::with_ratio(1.0, f64::INFINITY),
        SpringConfig::with_ratio(1.0, 100.0).with_initial_velocity(f64::NAN),
    ];
    for cfg in bad {
        let err = spring_progress(10.0, fps30(), &cfg).unwrap_err();
        assert!(
            matches!(err, ReelError::InvalidSpringParameters(_)),
            "{cfg:?} -> {err}"
        );
    }
}

#[test]
fn rejects_parameters_whose_derived_terms_overflow() {
    let bad = [
        SpringConfig::with_ratio(1e155, 100.0),
        SpringConfig::with_ratio(0.5, 1e300).with_mass(1e-20),
        SpringConfig::with_ratio(1.0, 1e300).with_mass(1e300),
    ];
    for cfg in bad {
        let err = spring_progress(10.0, fps30(), &cfg).unwrap_err();
        assert!(
            matches!(err, ReelError::InvalidSpringParameters(_)),
            "{cfg:?} -> {err}"
        );
        assert!(measure_spring(fps30(), &cfg, DEFAULT_SETTLE_THRESHOLD).is_err());
    }
}

#[test]
fn extreme_but_valid_configs_stay_finite() {
    let configs = [
        SpringConfig::with_ratio(1e154, 100.0),
        SpringConfig::with_ratio(0.5, 1e300),
        SpringConfig::with_ratio(1.0, 1e300),
        SpringConfig::with_ratio(3.0, 1e-300),
    ];
    for cfg in configs {
        for frame in [1.0, 30.0, 108_000.0, 1e12] {
            let p = spring_progress(frame, fps30(), &cfg).unwrap();
            assert!(p.is_finite(), "{cfg:?} at {frame} -> {p}");
        }
    }
}

#[test]
fn heavy_damping_keeps_the_slow_root() {
    // One hour at 30 fps; the slow root is about -w0 / (2 * ratio).
    let cfg = SpringConfig::with_ratio(1e9, 100.0);
    let p = spring_progress(108_000.0, fps30(), &cfg).unwrap();
    let expected = 1.0 - (-10.0 / 2e9 * 3600.0_f64).exp();
    assert!(p > 0.0);
    assert!((p - expected).abs() < 1e-9 * expected.max(1e-12) + 1e-15, "{p} vs {expected}");
}

#[test]
fn from_damping_converts_coefficient_to_ratio() {
    let cfg = SpringConfig::default();
    assert!((cfg.damping_ratio - 0.5).abs() < 1e-12);
    assert!((cfg.damping() - 10.0).abs() < 1e-12);

    let cfg = SpringConfig::from_damping(20.0, 100.0, 1.0);
    assert!((cfg.damping_ratio - 1.0).abs() < 1e-12);
}

#[test]
fn mass_slows_the_response() {
    let light = SpringConfig::critically_damped(100.0);
    let heavy = light.with_mass(4.0);
    let a = spring_progress(5.0, fps30(), &light).unwrap();
    let b = spring_progress(5.0, fps30(), &heavy).unwrap();
    assert!(b < a);
}

#[test]
fn measure_spring_matches_settle_time() {
    let cfg = SpringConfig::critically_damped(100.0);
    let n = measure_spring(fps30(), &cfg, DEFAULT_SETTLE_THRESHOLD).unwrap();
    assert!((20..=26).contains(&n), "settled after {n}");
    for f in n..n + 200 {
        let v = spring_progress(f as f64, fps30(), &cfg).unwrap();
        assert!((1.0 - v).abs() < DEFAULT_SETTLE_THRESHOLD);
    }
    let before = spring_progress((n - 1) as f64, fps30(), &cfg).unwrap();
    assert!((1.0 - before).abs() >= DEFAULT_SETTLE_THRESHOLD);
}

#[test]
fn bouncier_springs_take_longer_to_settle() {
    let soft = measure_spring(fps30(), &SpringConfig::with_ratio(0.2, 100.0), 0.005).unwrap();
    let firm = measure_spring(fps30(), &SpringConfig::with_ratio(0.75, 100.0), 0.005).unwrap();
    assert!(soft > firm);
}

#[test]
fn measure_spring_rejects_bad_threshold_and_runaway_springs() {
    let cfg = SpringConfig::default();
    assert!(matches!(
        measure_spring(fps30(), &cfg, 0.0),
        Err(ReelError::Validation(_))
    ));
    let sluggish = SpringConfig::with_ratio(1.0e7, 1.0);
    assert!(matches!(
        measure_spring(fps30(), &sluggish, 0.005),
        Err(ReelError::InvalidSpringParameters(_))
    ));
}

#[test]
fn spring_maps_range_and_delay() {
    let s = Spring::new(SpringConfig::critically_damped(100.0))
        .range(100.0, 200.0)
        .delay(10.0);
    assert_eq!(s.sample(0.0, fps30()).unwrap(), 100.0);
    assert_eq!(s.sample(10.0, fps30()).unwrap(), 100.0);
    let late = s.sample(200.0, fps30()).unwrap();
    assert!((late - 200.0).abs() < 1e-3);
}

#[test]
fn spring_duration_stretches_time() {
    let s = Spring::new(SpringConfig::critically_damped(100.0)).duration(90);
    let at_end = s.sample(90.0, fps30()).unwrap();
    assert!((1.0 - at_end).abs() < DEFAULT_SETTLE_THRESHOLD);

    let natural = Spring::new(SpringConfig::critically_damped(100.0));
    assert!(s.sample(15.0, fps30()).unwrap() < natural.sample(15.0, fps30()).unwrap());
}

#[test]
fn spring_reverse_runs_from_to_back_to_from() {
    let s = Spring::new(SpringConfig::critically_damped(100.0))
        .duration(30)
        .reversed();
    assert!((s.sample(0.0, fps30()).unwrap() - 1.0).abs() < DEFAULT_SETTLE_THRESHOLD);
    assert_eq!(s.sample(30.0, fps30()).unwrap(), 0.0);
    assert_eq!(s.sample(45.0, fps30()).unwrap(), 0.0);
}

#[test]
fn zero_duration_jumps() {
    let s = Spring::default().duration(0).delay(5.0);
    assert_eq!(s.sample(4.0, fps30()).unwrap(), 0.0);
    assert_eq!(s.sample(5.0, fps30()).unwrap(), 1.0);
}

#[test]
fn config_deserializes_with_defaults() {
    let cfg: SpringConfig = serde_json::from_str(r#"{"stiffness": 150}"#).unwrap();
    assert_eq!(cfg.stiffness, 150.0);
    assert_eq!(cfg.mass, 1.0);
    assert!(serde_json::from_str::<SpringConfig>(r#"{"stifness": 1}"#).is_err());
}
