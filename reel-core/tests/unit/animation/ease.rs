use super::*;

const ALL: [Ease; 10] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InSine,
    Ease::OutSine,
    Ease::InOutSine,
];

#[test]
fn endpoints_are_fixed() {
    for e in ALL {
        assert!(e.apply(0.0).abs() < 1e-12, "{e:?} at 0");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-12, "{e:?} at 1");
    }
}

#[test]
fn input_is_clamped() {
    for e in ALL {
        assert_eq!(e.apply(-3.0), e.apply(0.0));
        assert_eq!(e.apply(7.0), e.apply(1.0));
    }
}

#[test]
fn in_out_variants_are_symmetric_at_midpoint() {
    for e in [Ease::InOutQuad, Ease::InOutCubic, Ease::InOutSine] {
        assert!((e.apply(0.5) - 0.5).abs() < 1e-12);
    }
}

#[test]
fn deserializes_snake_case_names() {
    let e: Ease = serde_json::from_str("\"out_cubic\"").unwrap();
    assert_eq!(e, Ease::OutCubic);
}

#[test]
fn parts_rebuild_every_named_ease() {
    for e in ALL {
        assert_eq!(Ease::of(e.mode(), e.curve()), e);
    }
    assert_eq!(Ease::ease_out(EaseCurve::Quad), Ease::OutQuad);
    assert_eq!(Ease::in_out(EaseCurve::Sine), Ease::InOutSine);
    assert_eq!(Ease::ease_in(EaseCurve::Linear), Ease::Linear);
    assert_eq!(Ease::in_out(EaseCurve::Linear), Ease::Linear);
}

#[test]
fn out_mirrors_in() {
    for curve in [EaseCurve::Quad, EaseCurve::Cubic, EaseCurve::Sine] {
        let (i, o) = (Ease::ease_in(curve), Ease::ease_out(curve));
        for k in 0..=20 {
            let t = f64::from(k) / 20.0;
            assert!((o.apply(t) - (1.0 - i.apply(1.0 - t))).abs() < 1e-12);
        }
        assert!(i.apply(0.25) < 0.25 && o.apply(0.25) > 0.25, "{curve:?}");
    }
}

#[test]
fn closed_forms_match_the_textbook_curves() {
    let t = 0.3;
    assert!((Ease::OutQuad.apply(t) - (1.0 - (1.0 - t) * (1.0 - t))).abs() < 1e-12);
    assert!((Ease::InOutCubic.apply(t) - 4.0 * t * t * t).abs() < 1e-12);
    assert!((Ease::InOutCubic.apply(0.8) - (1.0 - 0.4_f64.powi(3) / 2.0)).abs() < 1e-12);
    let sine = -((std::f64::consts::PI * t).cos() - 1.0) / 2.0;
    assert!((Ease::InOutSine.apply(t) - sine).abs() < 1e-12);
}
