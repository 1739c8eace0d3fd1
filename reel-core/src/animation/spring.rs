use crate::{
    foundation::core::Fps,
    foundation::error::{ReelError, ReelResult},
};

/// Hard cap for [`measure_spring`]; springs that take longer are treated as misconfigured.
pub const MAX_SPRING_FRAMES: u64 = 100_000;

/// Distance from the target at which a spring counts as settled.
pub const DEFAULT_SETTLE_THRESHOLD: f64 = 0.005;

/// Physical parameters of a damped spring driving a value from 0 to 1.
///
/// The system solved is `m*x'' + c*x' + k*x = k` with `c = 2 * damping_ratio * sqrt(k * m)`.
/// `damping_ratio < 1` bounces past 1, `== 1` is critically damped, `> 1` creeps in.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpringConfig {
    pub damping_ratio: f64,
    pub stiffness: f64,
    pub mass: f64,
    /// Initial velocity in progress units per second.
    pub initial_velocity: f64,
    /// Never report progress above 1.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    /// Damping 10, stiffness 100, mass 1.
    fn default() -> Self {
        Self::from_damping(10.0, 100.0, 1.0)
    }
}

impl SpringConfig {
    /// Build from a damping *coefficient* `c`, the form most motion presets are written in.
    pub fn from_damping(damping: f64, stiffness: f64, mass: f64) -> Self {
        Self {
            damping_ratio: damping / (2.0 * (stiffness * mass).sqrt()),
            stiffness,
            mass,
            initial_velocity: 0.0,
            overshoot_clamping: false,
        }
    }

    pub fn with_ratio(damping_ratio: f64, stiffness: f64) -> Self {
        Self {
            damping_ratio,
            stiffness,
            ..Self::default()
        }
    }

    pub fn critically_damped(stiffness: f64) -> Self {
        Self::with_ratio(1.0, stiffness)
    }

    pub fn with_mass(self, mass: f64) -> Self {
        Self { mass, ..self }
    }

    pub fn with_initial_velocity(self, initial_velocity: f64) -> Self {
        Self {
            initial_velocity,
            ..self
        }
    }

    pub fn with_overshoot_clamping(self, overshoot_clamping: bool) -> Self {
        Self {
            overshoot_clamping,
            ..self
        }
    }

    /// Damping coefficient `c` equivalent to this ratio.
    pub fn damping(&self) -> f64 {
        2.0 * self.damping_ratio * (self.stiffness * self.mass).sqrt()
    }

    pub fn validate(&self) -> ReelResult<()> {
        for (name, v) in [
            ("damping_ratio", self.damping_ratio),
            ("stiffness", self.stiffness),
            ("mass", self.mass),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ReelError::invalid_spring(format!(
                    "{name} must be finite and > 0, got {v}"
                )));
            }
        }
        if !self.initial_velocity.is_finite() {
            return Err(ReelError::invalid_spring(format!(
                "initial_velocity must be finite, got {}",
                self.initial_velocity
            )));
        }
        let derived = [
            ("natural frequency", (self.stiffness / self.mass).sqrt()),
            ("damping_ratio squared", self.damping_ratio * self.damping_ratio),
            ("critical damping", (self.stiffness * self.mass).sqrt()),
        ];
        if let Some((name, v)) = derived.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ReelError::invalid_spring(format!(
                "{name} overflows ({v}) for damping_ratio={}, stiffness={}, mass={}",
                self.damping_ratio, self.stiffness, self.mass
            )));
        }
        Ok(())
    }
}

/// Spring progress `elapsed_frames` after the trigger.
///
/// Returns exactly `0.0` for `elapsed_frames <= 0` (not yet triggered) and approaches `1.0` as
/// time grows. The solution is closed-form, so any frame can be evaluated in any order.
pub fn spring_progress(elapsed_frames: f64, fps: Fps, cfg: &SpringConfig) -> ReelResult<f64> {
    cfg.validate()?;
    fps.validate()?;
    Ok(progress_unchecked(elapsed_frames / fps.as_f64(), cfg))
}

struct Solution {
    w0: f64,
    zeta: f64,
    x0: f64,
    v0: f64,
}

impl Solution {
    fn new(cfg: &SpringConfig) -> Self {
        Self {
            w0: (cfg.stiffness / cfg.mass).sqrt(),
            zeta: cfg.damping_ratio,
            // Displacement from the target: the spring starts at 0 and rests at 1.
            x0: -1.0,
            v0: cfg.initial_velocity,
        }
    }

    fn displacement(&self, t: f64) -> f64 {
        let Self { w0, zeta, x0, v0 } = *self;
        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * w0 * t).exp();
            if envelope == 0.0 {
                return 0.0;
            }
            envelope * (x0 * (wd * t).cos() + (v0 + zeta * w0 * x0) / wd * (wd * t).sin())
        } else if zeta == 1.0 {
            let decay = (-w0 * t).exp();
            if decay == 0.0 {
                return 0.0;
            }
            decay * (x0 + (v0 + w0 * x0) * t)
        } else {
            let (r1, r2, c1, c2) = self.overdamped_terms();
            c1 * (r1 * t).exp() + c2 * (r2 * t).exp()
        }
    }

    /// Upper bound on `|displacement(t)|`, non-increasing once it drops below 1.
    fn envelope(&self, t: f64) -> f64 {
        let Self { w0, zeta, x0, v0 } = *self;
        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let b = (v0 + zeta * w0 * x0) / wd;
            let decay = (-zeta * w0 * t).exp();
            if decay == 0.0 {
                return 0.0;
            }
            (x0 * x0 + b * b).sqrt() * decay
        } else if zeta == 1.0 {
            let decay = (-w0 * t).exp();
            if decay == 0.0 {
                return 0.0;
            }
            decay * (x0.abs() + (v0 + w0 * x0).abs() * t)
        } else {
            let (r1, r2, c1, c2) = self.overdamped_terms();
            c1.abs() * (r1 * t).exp() + c2.abs() * (r2 * t).exp()
        }
    }

    fn overdamped_terms(&self) -> (f64, f64, f64, f64) {
        let s = (self.zeta * self.zeta - 1.0).sqrt();
        // zeta - s cancels for heavy damping; the conjugate form keeps the slow root exact.
        let r1 = -self.w0 / (self.zeta + s);
        let r2 = -self.w0 * (self.zeta + s);
        let c2 = (self.v0 - r1 * self.x0) / (r2 - r1);
        let c1 = self.x0 - c2;
        (r1, r2, c1, c2)
    }
}

pub(crate) fn progress_unchecked(t_secs: f64, cfg: &SpringConfig) -> f64 {
    // Also catches NaN.
    if !(t_secs > 0.0) {
        return 0.0;
    }
    if t_secs.is_infinite() {
        return 1.0;
    }
    let v = 1.0 + Solution::new(cfg).displacement(t_secs);
    if cfg.overshoot_clamping { v.min(1.0) } else { v }
}

/// Number of frames until the spring stays within `threshold` of its target for good.
///
/// Fails with [`ReelError::InvalidSpringParameters`] if that takes more than
/// [`MAX_SPRING_FRAMES`].
pub fn measure_spring(fps: Fps, cfg: &SpringConfig, threshold: f64) -> ReelResult<u64> {
    cfg.validate()?;
    fps.validate()?;
    if !(threshold > 0.0 && threshold < 1.0) {
        return Err(ReelError::validation(format!(
            "settle threshold must be in (0, 1), got {threshold}"
        )));
    }

    let sol = Solution::new(cfg);
    let mut last_outside = 0u64;
    for f in 0..=MAX_SPRING_FRAMES {
        let t = fps.frames_to_secs(f);
        let progress = if f == 0 {
            0.0
        } else {
            1.0 + sol.displacement(t)
        };
        let progress = if cfg.overshoot_clamping {
            progress.min(1.0)
        } else {
            progress
        };
        if (1.0 - progress).abs() >= threshold {
            last_outside = f;
        }
        if sol.envelope(t) < threshold {
            return Ok(last_outside + 1);
        }
    }
    Err(ReelError::invalid_spring(format!(
        "spring does not settle within {MAX_SPRING_FRAMES} frames"
    )))
}

/// A spring mapped onto an output range and placed on a timeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Spring {
    pub config: SpringConfig,
    /// Output at progress 0.
    pub from: f64,
    /// Output at progress 1.
    pub to: f64,
    /// Frames to wait before triggering.
    pub delay_frames: f64,
    /// Stretch or squeeze time so the spring settles after exactly this many frames.
    pub duration_frames: Option<u64>,
    /// Play the settle curve backwards, from `to` back to `from`.
    pub reverse: bool,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            config: SpringConfig::default(),
            from: 0.0,
            to: 1.0,
            delay_frames: 0.0,
            duration_frames: None,
            reverse: false,
        }
    }
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn range(self, from: f64, to: f64) -> Self {
        Self { from, to, ..self }
    }

    pub fn delay(self, delay_frames: f64) -> Self {
        Self {
            delay_frames,
            ..self
        }
    }

    pub fn duration(self, frames: u64) -> Self {
        Self {
            duration_frames: Some(frames),
            ..self
        }
    }

    pub fn reversed(self) -> Self {
        Self {
            reverse: true,
            ..self
        }
    }

    /// Sample the output at `frame` (relative to the scene's own start).
    pub fn sample(&self, frame: f64, fps: Fps) -> ReelResult<f64> {
        self.config.validate()?;
        fps.validate()?;

        let mut local = frame - self.delay_frames;
        if self.reverse || self.duration_frames.is_some() {
            let natural = measure_spring(fps, &self.config, DEFAULT_SETTLE_THRESHOLD)? as f64;
            let span = match self.duration_frames {
                Some(0) => {
                    let triggered = local >= 0.0;
                    return Ok(if triggered != self.reverse {
                        self.to
                    } else {
                        self.from
                    });
                }
                Some(d) => d as f64,
                None => natural,
            };
            if self.reverse {
                local = span - local;
            }
            local = local * natural / span;
        }

        let p = progress_unchecked(local / fps.as_f64(), &self.config);
        Ok(self.from + (self.to - self.from) * p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
