use std::f64::consts::FRAC_PI_2;

/// Base curve shape, always defined in its accelerating ("in") form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EaseCurve {
    Linear,
    Quad,
    Cubic,
    Sine,
}

impl EaseCurve {
    fn ease_in(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Quad => t * t,
            Self::Cubic => t * t * t,
            Self::Sine => 1.0 - (t * FRAC_PI_2).cos(),
        }
    }
}

/// How a curve is laid over `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EaseMode {
    /// Slow start.
    In,
    /// Slow end: the curve mirrored through `(0.5, 0.5)`.
    Out,
    /// `In` over the first half, `Out` over the second.
    InOut,
}

impl EaseMode {
    fn apply(self, curve: EaseCurve, t: f64) -> f64 {
        match self {
            Self::In => curve.ease_in(t),
            Self::Out => 1.0 - curve.ease_in(1.0 - t),
            Self::InOut if t < 0.5 => curve.ease_in(2.0 * t) / 2.0,
            Self::InOut => 1.0 - curve.ease_in(2.0 - 2.0 * t) / 2.0,
        }
    }
}

/// Easing applied to a normalized segment position.
///
/// Serialized by name (`"out_cubic"`); build from parts with [`Ease::of`] or the
/// [`Ease::ease_in`]/[`Ease::ease_out`]/[`Ease::in_out`] shorthands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InSine,
    OutSine,
    InOutSine,
}

impl Ease {
    /// Combine a curve with a mode. Linear ignores the mode.
    pub const fn of(mode: EaseMode, curve: EaseCurve) -> Self {
        use EaseCurve as C;
        use EaseMode as M;
        match (mode, curve) {
            (_, C::Linear) => Self::Linear,
            (M::In, C::Quad) => Self::InQuad,
            (M::Out, C::Quad) => Self::OutQuad,
            (M::InOut, C::Quad) => Self::InOutQuad,
            (M::In, C::Cubic) => Self::InCubic,
            (M::Out, C::Cubic) => Self::OutCubic,
            (M::InOut, C::Cubic) => Self::InOutCubic,
            (M::In, C::Sine) => Self::InSine,
            (M::Out, C::Sine) => Self::OutSine,
            (M::InOut, C::Sine) => Self::InOutSine,
        }
    }

    pub const fn ease_in(curve: EaseCurve) -> Self {
        Self::of(EaseMode::In, curve)
    }

    pub const fn ease_out(curve: EaseCurve) -> Self {
        Self::of(EaseMode::Out, curve)
    }

    pub const fn in_out(curve: EaseCurve) -> Self {
        Self::of(EaseMode::InOut, curve)
    }

    pub const fn curve(self) -> EaseCurve {
        match self {
            Self::Linear => EaseCurve::Linear,
            Self::InQuad | Self::OutQuad | Self::InOutQuad => EaseCurve::Quad,
            Self::InCubic | Self::OutCubic | Self::InOutCubic => EaseCurve::Cubic,
            Self::InSine | Self::OutSine | Self::InOutSine => EaseCurve::Sine,
        }
    }

    pub const fn mode(self) -> EaseMode {
        match self {
            Self::Linear | Self::InQuad | Self::InCubic | Self::InSine => EaseMode::In,
            Self::OutQuad | Self::OutCubic | Self::OutSine => EaseMode::Out,
            Self::InOutQuad | Self::InOutCubic | Self::InOutSine => EaseMode::InOut,
        }
    }

    /// Eased position for `t`, clamped into `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        self.mode().apply(self.curve(), t.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
