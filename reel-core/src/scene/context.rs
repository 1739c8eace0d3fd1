use crate::{
    animation::interpolate::{InterpolateOpts, interpolate, sample_scalar},
    animation::ops::{elapsed, stagger_start},
    animation::random::Field,
    animation::spring::{Spring, SpringConfig, spring_progress},
    foundation::core::{Canvas, Fps, Vec2},
    foundation::error::{ReelError, ReelResult},
};

/// Everything a scene may read while producing one frame.
///
/// `frame` is local to the scene's sequence (0 at the sequence start). Scenes receive the context
/// explicitly and must not consult any other clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneCtx {
    /// Frame relative to the owning sequence's start.
    pub frame: i64,
    /// Frame on the whole timeline.
    pub global_frame: u64,
    pub fps: Fps,
    pub canvas: Canvas,
    /// Length of the owning sequence.
    pub duration_frames: u64,
}

impl SceneCtx {
    /// Context for a standalone scene at `frame` (local and global frames coincide).
    pub fn new(frame: u64, fps: Fps, canvas: Canvas, duration_frames: u64) -> ReelResult<Self> {
        fps.validate()?;
        let local = i64::try_from(frame)
            .map_err(|_| ReelError::validation(format!("frame {frame} exceeds i64 range")))?;
        Ok(Self {
            frame: local,
            global_frame: frame,
            fps,
            canvas,
            duration_frames,
        })
    }

    /// Same context seen from a nested sub-sequence starting `from` frames into this one.
    pub fn offset(&self, from: i64, duration_frames: u64) -> Self {
        Self {
            frame: elapsed(self.frame, from),
            duration_frames,
            ..*self
        }
    }

    pub fn at_frame(&self, frame: i64) -> Self {
        Self { frame, ..*self }
    }

    pub fn frame_f64(&self) -> f64 {
        self.frame as f64
    }

    /// Local time in seconds.
    pub fn secs(&self) -> f64 {
        self.frame_f64() / self.fps.as_f64()
    }

    pub fn width(&self) -> f64 {
        f64::from(self.canvas.width)
    }

    pub fn height(&self) -> f64 {
        f64::from(self.canvas.height)
    }

    pub fn center(&self) -> Vec2 {
        self.canvas.center()
    }

    /// Fraction of the sequence played, clamped to `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration_frames == 0 {
            return 1.0;
        }
        (self.frame_f64() / self.duration_frames as f64).clamp(0.0, 1.0)
    }

    /// Frames since local frame `trigger`; negative before it.
    pub fn elapsed(&self, trigger: i64) -> i64 {
        elapsed(self.frame, trigger)
    }

    /// Spring progress for a spring triggered at local frame `trigger`.
    pub fn spring(&self, trigger: i64, cfg: &SpringConfig) -> ReelResult<f64> {
        spring_progress(self.elapsed(trigger) as f64, self.fps, cfg)
    }

    /// Spring triggered at `base + index * step`, the usual staggered reveal.
    pub fn staggered_spring(
        &self,
        base: i64,
        index: u64,
        step: i64,
        cfg: &SpringConfig,
    ) -> ReelResult<f64> {
        self.spring(stagger_start(base, index, step), cfg)
    }

    /// Sample a ranged [`Spring`] at the local frame.
    pub fn spring_value(&self, spring: &Spring) -> ReelResult<f64> {
        spring.sample(self.frame_f64(), self.fps)
    }

    /// Interpolate the local frame through `input -> output`.
    pub fn interpolate(
        &self,
        input: &[f64],
        output: &[f64],
        opts: InterpolateOpts,
    ) -> ReelResult<f64> {
        interpolate(self.frame_f64(), input, output, opts)
    }

    /// Opacity ramp from 0 at `start` to 1 at `start + len`, clamped on both sides.
    pub fn fade_in(&self, start: i64, len: u64) -> f64 {
        ramp(self.frame_f64(), start as f64, len as f64, 0.0, 1.0)
    }

    /// Opacity ramp from 1 to 0 over the last `len` frames of the sequence.
    pub fn fade_out(&self, len: u64) -> f64 {
        let start = self.duration_frames.saturating_sub(len) as f64;
        ramp(self.frame_f64(), start, len as f64, 1.0, 0.0)
    }

    /// Product of [`Self::fade_in`] from frame 0 and [`Self::fade_out`], both over `len` frames.
    pub fn fade_in_out(&self, len: u64) -> f64 {
        self.fade_in(0, len) * self.fade_out(len)
    }

    /// Keyed random field namespaced to a scene.
    pub fn field(&self, namespace: &str) -> Field {
        Field::new(namespace)
    }
}

fn ramp(x: f64, start: f64, len: f64, from: f64, to: f64) -> f64 {
    if len <= 0.0 {
        return if x < start { from } else { to };
    }
    sample_scalar(
        x,
        &[start, start + len],
        &[from, to],
        InterpolateOpts::clamp(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/scene/context.rs"]
mod tests;
