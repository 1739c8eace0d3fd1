use super::*;

const IN: [f64; 2] = [0.0, 10.0];
const OUT: [f64; 2] = [0.0, 100.0];

#[test]
fn clamp_holds_boundary_outputs() {
    let opts = InterpolateOpts::clamp();
    assert_eq!(interpolate(-5.0, &IN, &OUT, opts).unwrap(), 0.0);
    assert_eq!(interpolate(15.0, &IN, &OUT, opts).unwrap(), 100.0);
}

#[test]
fn extend_continues_boundary_slope() {
    let opts = InterpolateOpts::extend();
    assert_eq!(interpolate(15.0, &IN, &OUT, opts).unwrap(), 150.0);
    assert_eq!(interpolate(-5.0, &IN, &OUT, opts).unwrap(), -50.0);
}

#[test]
fn sides_are_independent() {
    let opts = InterpolateOpts::extend().with_right(Extrapolate::Clamp);
    assert_eq!(interpolate(-5.0, &IN, &OUT, opts).unwrap(), -50.0);
    assert_eq!(interpolate(15.0, &IN, &OUT, opts).unwrap(), 100.0);
}

#[test]
fn midpoint_of_unit_ramp() {
    let v = interpolate(10.0, &[0.0, 20.0], &[0.0, 1.0], InterpolateOpts::clamp()).unwrap();
    assert_eq!(v, 0.5);
}

#[test]
fn multi_segment_selects_enclosing_segment() {
    let input = [0.0, 10.0, 20.0, 40.0];
    let output = [0.0, 1.0, 1.0, 0.0];
    let opts = InterpolateOpts::clamp();
    assert_eq!(interpolate(5.0, &input, &output, opts).unwrap(), 0.5);
    assert_eq!(interpolate(10.0, &input, &output, opts).unwrap(), 1.0);
    assert_eq!(interpolate(15.0, &input, &output, opts).unwrap(), 1.0);
    assert_eq!(interpolate(30.0, &input, &output, opts).unwrap(), 0.5);
    assert_eq!(interpolate(40.0, &input, &output, opts).unwrap(), 0.0);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let input = [0.0, 7.0, 13.0];
    let output = [0.3, 91.7, -4.25];
    for i in -50..150 {
        let x = f64::from(i) * 0.37;
        let a = interpolate(x, &input, &output, InterpolateOpts::extend()).unwrap();
        let b = interpolate(x, &input, &output, InterpolateOpts::extend()).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn non_decreasing_outputs_give_monotone_curve() {
    let input = [0.0, 5.0, 12.0, 30.0];
    let output = [-3.0, 0.0, 0.0, 8.0];
    for opts in [InterpolateOpts::clamp(), InterpolateOpts::extend()] {
        let mut prev = f64::NEG_INFINITY;
        for i in -100..400 {
            let v = interpolate(f64::from(i) * 0.1, &input, &output, opts).unwrap();
            assert!(v >= prev, "not monotone at step {i}");
            prev = v;
        }
    }
}

#[test]
fn rejects_degenerate_domains() {
    let opts = InterpolateOpts::clamp();
    for (input, output) in [
        (vec![0.0], vec![1.0]),
        (vec![], vec![]),
        (vec![0.0, 0.0], vec![1.0, 2.0]),
        (vec![0.0, 10.0, 5.0], vec![1.0, 2.0, 3.0]),
        (vec![0.0, f64::NAN], vec![1.0, 2.0]),
        (vec![0.0, 1.0], vec![1.0]),
    ] {
        let err = interpolate(1.0, &input, &output, opts).unwrap_err();
        assert!(
            matches!(err, ReelError::InvalidDomain(_)),
            "{input:?} -> {err}"
        );
    }
}

#[test]
fn rejects_breakpoints_whose_span_overflows() {
    let wide = [-1e308, 1e308];
    for opts in [
        InterpolateOpts::clamp(),
        InterpolateOpts::default()
            .with_left(Extrapolate::Wrap)
            .with_right(Extrapolate::Wrap),
    ] {
        let err = interpolate(1e308, &wide, &OUT, opts).unwrap_err();
        assert!(matches!(err, ReelError::InvalidDomain(_)), "{err}");
    }
    assert!(Curve::new([(-1e308, 0.0), (0.0, 1.0), (1e308, 2.0)]).is_err());

    let v = interpolate(1e308, &[0.0, 1e308], &OUT, InterpolateOpts::clamp()).unwrap();
    assert_eq!(v, 100.0);
}

#[test]
fn out_of_domain_inputs_never_fail() {
    for x in [f64::MIN, -1e300, 1e300, f64::MAX, f64::INFINITY, f64::NEG_INFINITY] {
        for opts in [
            InterpolateOpts::clamp(),
            InterpolateOpts::extend(),
            InterpolateOpts::default()
                .with_left(Extrapolate::Wrap)
                .with_right(Extrapolate::Identity),
        ] {
            assert!(interpolate(x, &IN, &OUT, opts).is_ok());
        }
    }
}

#[test]
fn identity_returns_input() {
    let opts = InterpolateOpts::clamp()
        .with_left(Extrapolate::Identity)
        .with_right(Extrapolate::Identity);
    assert_eq!(interpolate(-3.0, &IN, &OUT, opts).unwrap(), -3.0);
    assert_eq!(interpolate(42.0, &IN, &OUT, opts).unwrap(), 42.0);
    assert_eq!(interpolate(5.0, &IN, &OUT, opts).unwrap(), 50.0);
}

#[test]
fn wrap_re_enters_domain() {
    let opts = InterpolateOpts::default()
        .with_left(Extrapolate::Wrap)
        .with_right(Extrapolate::Wrap);
    assert_eq!(interpolate(12.5, &IN, &OUT, opts).unwrap(), 25.0);
    assert_eq!(interpolate(-2.5, &IN, &OUT, opts).unwrap(), 75.0);
    assert_eq!(interpolate(25.0, &IN, &OUT, opts).unwrap(), 50.0);
}

#[test]
fn ease_shapes_inside_but_not_outside() {
    let opts = InterpolateOpts::extend().with_ease(Ease::InQuad);
    assert_eq!(interpolate(5.0, &IN, &OUT, opts).unwrap(), 25.0);
    assert_eq!(interpolate(15.0, &IN, &OUT, opts).unwrap(), 150.0);
    assert_eq!(interpolate(10.0, &IN, &OUT, opts).unwrap(), 100.0);
}

#[test]
fn colors_interpolate_per_channel() {
    let colors = [Rgba8::rgb(0, 0, 0), Rgba8::rgba(255, 100, 50, 0)];
    let opts = InterpolateOpts::clamp();
    let mid = interpolate_colors(5.0, &IN, &colors, opts).unwrap();
    assert_eq!(mid, Rgba8::rgba(128, 50, 25, 128));
    assert_eq!(interpolate_colors(-1.0, &IN, &colors, opts).unwrap(), colors[0]);
    assert_eq!(interpolate_colors(99.0, &IN, &colors, opts).unwrap(), colors[1]);
}

#[test]
fn colors_extend_saturates_and_identity_clamps() {
    let colors = [Rgba8::rgb(0, 0, 0), Rgba8::rgb(200, 200, 200)];
    let extended = interpolate_colors(20.0, &IN, &colors, InterpolateOpts::extend()).unwrap();
    assert_eq!(extended, Rgba8::rgb(255, 255, 255));

    let opts = InterpolateOpts::default()
        .with_left(Extrapolate::Identity)
        .with_right(Extrapolate::Identity);
    assert_eq!(interpolate_colors(-4.0, &IN, &colors, opts).unwrap(), colors[0]);
    assert_eq!(interpolate_colors(40.0, &IN, &colors, opts).unwrap(), colors[1]);
}

#[test]
fn vec2_values_interpolate() {
    let pts = [Vec2::new(0.0, 0.0), Vec2::new(10.0, -20.0)];
    let v = interpolate_values(2.5, &IN, &pts, InterpolateOpts::clamp()).unwrap();
    assert_eq!(v, Vec2::new(2.5, -5.0));
}

#[test]
fn curve_validates_once_and_samples() {
    let c = Curve::new([(0.0, 0.0), (20.0, 1.0)]).unwrap();
    assert_eq!(c.domain(), (0.0, 20.0));
    assert_eq!(c.sample(10.0, InterpolateOpts::clamp()), 0.5);
    assert_eq!(c.sample(40.0, InterpolateOpts::extend()), 2.0);
    assert!(Curve::new([(1.0, 0.0), (1.0, 1.0)]).is_err());
    assert!(Curve::from_slices(&[0.0, 1.0], &[0.0]).is_err());
}

#[test]
fn curve_serde_validates() {
    let c: Curve = serde_json::from_str("[[0, 0], [10, 100]]").unwrap();
    assert_eq!(c.sample(5.0, InterpolateOpts::clamp()), 50.0);
    assert_eq!(
        serde_json::to_string(&c).unwrap(),
        "[[0.0,0.0],[10.0,100.0]]"
    );
    assert!(serde_json::from_str::<Curve>("[[3, 0], [1, 100]]").is_err());
}

#[test]
fn opts_deserialize_with_defaults() {
    let o: InterpolateOpts = serde_json::from_str(r#"{"right": "clamp"}"#).unwrap();
    assert_eq!(o.left, Extrapolate::Extend);
    assert_eq!(o.right, Extrapolate::Clamp);
    assert_eq!(o.ease, Ease::Linear);
}
