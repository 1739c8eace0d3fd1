use crate::foundation::error::{ReelError, ReelResult};

/// How a looped frame re-enters its period.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    /// Wrap at the period boundary.
    #[default]
    Repeat,
    /// Bounce forward/backward across the period.
    PingPong,
}

/// Frames elapsed since `trigger`; negative before it.
pub fn elapsed(frame: i64, trigger: i64) -> i64 {
    frame.saturating_sub(trigger)
}

/// Scene-local frame for a sequence starting at `from`, or `None` outside
/// `[from, from + duration)`.
pub fn local_frame(frame: i64, from: i64, duration: u64) -> Option<i64> {
    in_window(frame, from, duration).then(|| frame - from)
}

/// `true` while `start <= frame < start + duration`.
pub fn in_window(frame: i64, start: i64, duration: u64) -> bool {
    let end = start.saturating_add(i64::try_from(duration).unwrap_or(i64::MAX));
    start <= frame && frame < end
}

/// Trigger frame of the `index`-th element in a staggered reveal.
pub fn stagger_start(base: i64, index: u64, step: i64) -> i64 {
    let index = i64::try_from(index).unwrap_or(i64::MAX);
    base.saturating_add(index.saturating_mul(step))
}

pub fn loop_frame(frame: i64, period: u64, mode: LoopMode) -> ReelResult<u64> {
    if period == 0 {
        return Err(ReelError::validation("loop period must be > 0"));
    }
    let period_i = i128::from(period);
    let f = i128::from(frame);
    let mapped = match mode {
        LoopMode::Repeat => f.rem_euclid(period_i),
        LoopMode::PingPong => {
            if period == 1 {
                0
            } else {
                let cycle = 2 * (period_i - 1);
                let pos = f.rem_euclid(cycle);
                if pos < period_i { pos } else { cycle - pos }
            }
        }
    };
    Ok(mapped as u64)
}

/// Mirror `frame` inside `[0, duration)`; frames outside clamp to the ends first.
pub fn reverse_frame(frame: i64, duration: u64) -> ReelResult<u64> {
    if duration == 0 {
        return Err(ReelError::validation("reverse duration must be > 0"));
    }
    let max = duration - 1;
    let f = u64::try_from(frame.max(0)).unwrap_or(0).min(max);
    Ok(max - f)
}

/// Sinusoidal float: `amplitude * sin(frame * rate + phase)`.
pub fn oscillate(frame: f64, rate: f64, phase: f64, amplitude: f64) -> f64 {
    amplitude * (frame * rate + phase).sin()
}

/// Position of something drifting at `speed` units per frame from `offset`, wrapped into
/// `[0, span)`; non-positive spans disable wrapping.
pub fn drift(frame: f64, speed: f64, offset: f64, span: f64) -> f64 {
    let p = frame * speed + offset;
    if span > 0.0 { p.rem_euclid(span) } else { p }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
