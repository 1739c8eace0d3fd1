use crate::{
    animation::ease::Ease,
    foundation::core::{Rgba8, Transform2D, Vec2},
    foundation::error::{ReelError, ReelResult},
};

/// Interpolation contract for values carried by a curve.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with factor `t` (`t` may leave `[0, 1]` when extending).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Transform2D {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            rotation_rad: a.rotation_rad + (b.rotation_rad - a.rotation_rad) * t,
            scale: <Vec2 as Lerp>::lerp(&a.scale, &b.scale, t),
            anchor: <Vec2 as Lerp>::lerp(&a.anchor, &b.anchor, t),
        }
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// What to do with an input that falls outside the breakpoint domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the boundary output.
    Clamp,
    /// Continue the boundary segment's slope.
    #[default]
    Extend,
    /// Return the input unchanged (scalar curves only; other values clamp).
    Identity,
    /// Re-enter the domain periodically.
    Wrap,
}

/// Per-call interpolation options.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InterpolateOpts {
    /// Policy below the first breakpoint.
    pub left: Extrapolate,
    /// Policy above the last breakpoint.
    pub right: Extrapolate,
    /// Easing applied inside each segment (never while extrapolating).
    pub ease: Ease,
}

impl InterpolateOpts {
    pub fn clamp() -> Self {
        Self {
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
            ease: Ease::Linear,
        }
    }

    pub fn extend() -> Self {
        Self::default()
    }

    pub fn with_left(self, left: Extrapolate) -> Self {
        Self { left, ..self }
    }

    pub fn with_right(self, right: Extrapolate) -> Self {
        Self { right, ..self }
    }

    pub fn with_ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }
}

enum Position {
    Passthrough(f64),
    Segment { seg: usize, t: f64 },
}

/// Map `x` through the piecewise-linear curve `input -> output`.
///
/// `input` must hold at least two finite, strictly increasing breakpoints and `output` must have
/// the same length; anything else is [`ReelError::InvalidDomain`]. Every `x` is valid.
pub fn interpolate(
    x: f64,
    input: &[f64],
    output: &[f64],
    opts: InterpolateOpts,
) -> ReelResult<f64> {
    validate_domain(input, output.len())?;
    Ok(sample_scalar(x, input, output, opts))
}

/// [`interpolate`] for any [`Lerp`] value; [`Extrapolate::Identity`] behaves like `Clamp`.
pub fn interpolate_values<T>(
    x: f64,
    input: &[f64],
    output: &[T],
    opts: InterpolateOpts,
) -> ReelResult<T>
where
    T: Lerp + Clone,
{
    validate_domain(input, output.len())?;
    Ok(sample_values(x, input, output, opts))
}

/// Interpolate colours channel by channel, rounding to the nearest byte.
pub fn interpolate_colors(
    x: f64,
    input: &[f64],
    colors: &[Rgba8],
    opts: InterpolateOpts,
) -> ReelResult<Rgba8> {
    interpolate_values(x, input, colors, opts)
}

pub(crate) fn validate_domain(input: &[f64], output_len: usize) -> ReelResult<()> {
    if input.len() < 2 {
        return Err(ReelError::invalid_domain(format!(
            "need at least 2 breakpoints, got {}",
            input.len()
        )));
    }
    if input.len() != output_len {
        return Err(ReelError::invalid_domain(format!(
            "input has {} breakpoints but output has {}",
            input.len(),
            output_len
        )));
    }
    if let Some(i) = input.iter().position(|v| !v.is_finite()) {
        return Err(ReelError::invalid_domain(format!(
            "breakpoint {i} is not finite ({})",
            input[i]
        )));
    }
    if let Some(i) = input.windows(2).position(|w| w[0] >= w[1]) {
        return Err(ReelError::invalid_domain(format!(
            "breakpoints must be strictly increasing: input[{i}]={} >= input[{}]={}",
            input[i],
            i + 1,
            input[i + 1]
        )));
    }
    let span = input[input.len() - 1] - input[0];
    if !span.is_finite() {
        return Err(ReelError::invalid_domain(format!(
            "breakpoint span {} .. {} overflows",
            input[0],
            input[input.len() - 1]
        )));
    }
    Ok(())
}

fn locate(x: f64, input: &[f64], opts: InterpolateOpts) -> Position {
    let last = input.len() - 1;
    let lo = input[0];
    let hi = input[last];

    let (policy, boundary_seg) = if x < lo {
        (opts.left, 0)
    } else if x > hi {
        (opts.right, last - 1)
    } else {
        return locate_inside(x, input, opts.ease);
    };

    match policy {
        Extrapolate::Clamp => Position::Segment {
            seg: boundary_seg,
            t: if x < lo { 0.0 } else { 1.0 },
        },
        Extrapolate::Identity => Position::Passthrough(x),
        Extrapolate::Extend => {
            let (x0, x1) = (input[boundary_seg], input[boundary_seg + 1]);
            Position::Segment {
                seg: boundary_seg,
                t: (x - x0) / (x1 - x0),
            }
        }
        Extrapolate::Wrap => {
            let wrapped = lo + (x - lo).rem_euclid(hi - lo);
            locate_inside(wrapped, input, opts.ease)
        }
    }
}

fn locate_inside(x: f64, input: &[f64], ease: Ease) -> Position {
    // First breakpoint strictly greater than x, so x == input[i] starts segment i.
    let idx = input.partition_point(|&v| v <= x);
    let seg = idx.clamp(1, input.len() - 1) - 1;
    let (x0, x1) = (input[seg], input[seg + 1]);
    let t = (x - x0) / (x1 - x0);
    Position::Segment {
        seg,
        t: ease.apply(t),
    }
}

pub(crate) fn sample_scalar(x: f64, input: &[f64], output: &[f64], opts: InterpolateOpts) -> f64 {
    match locate(x, input, opts) {
        Position::Passthrough(v) => v,
        Position::Segment { seg, t } => f64::lerp(&output[seg], &output[seg + 1], t),
    }
}

fn sample_values<T>(x: f64, input: &[f64], output: &[T], opts: InterpolateOpts) -> T
where
    T: Lerp + Clone,
{
    match locate(x, input, opts) {
        // Only a scalar can pass its input through; anything else holds the boundary.
        Position::Passthrough(_) if x < input[0] => output[0].clone(),
        Position::Passthrough(_) => output[output.len() - 1].clone(),
        Position::Segment { seg, t } => T::lerp(&output[seg], &output[seg + 1], t),
    }
}

/// A validated breakpoint sequence.
///
/// Construction checks the domain once; sampling is then infallible, which suits curves that
/// are built at scene setup and sampled every frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct Curve {
    input: Vec<f64>,
    output: Vec<f64>,
}

impl Curve {
    pub fn new(points: impl IntoIterator<Item = (f64, f64)>) -> ReelResult<Self> {
        let (input, output): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();
        validate_domain(&input, output.len())?;
        Ok(Self { input, output })
    }

    pub fn from_slices(input: &[f64], output: &[f64]) -> ReelResult<Self> {
        validate_domain(input, output.len())?;
        Ok(Self {
            input: input.to_vec(),
            output: output.to_vec(),
        })
    }

    pub fn sample(&self, x: f64, opts: InterpolateOpts) -> f64 {
        sample_scalar(x, &self.input, &self.output, opts)
    }

    /// `(first input, last input)`.
    pub fn domain(&self) -> (f64, f64) {
        (self.input[0], self.input[self.input.len() - 1])
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.input.iter().copied().zip(self.output.iter().copied())
    }
}

impl TryFrom<Vec<[f64; 2]>> for Curve {
    type Error = ReelError;

    fn try_from(points: Vec<[f64; 2]>) -> Result<Self, Self::Error> {
        Self::new(points.into_iter().map(|[x, y]| (x, y)))
    }
}

impl From<Curve> for Vec<[f64; 2]> {
    fn from(c: Curve) -> Self {
        c.points().map(|(x, y)| [x, y]).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
