use crate::{
    foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Rgba8},
    foundation::error::{ReelError, ReelResult},
    scene::context::SceneCtx,
    scene::tree::{Props, VisualNode},
};
use std::fmt;
use std::sync::Arc;

/// A pure view function from frame context to visual tree.
///
/// Implementations must be stateless: rendering the same context twice, in any order and on any
/// thread, has to produce identical trees.
pub trait Scene: Send + Sync {
    fn render(&self, ctx: &SceneCtx) -> ReelResult<VisualNode>;
}

impl<F> Scene for F
where
    F: Fn(&SceneCtx) -> ReelResult<VisualNode> + Send + Sync,
{
    fn render(&self, ctx: &SceneCtx) -> ReelResult<VisualNode> {
        self(ctx)
    }
}

/// A scene placed on the timeline at `[from, from + duration)`.
#[derive(Clone)]
pub struct Sequence {
    pub name: String,
    pub from: u64,
    pub duration: u64,
    pub scene: Arc<dyn Scene>,
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("name", &self.name)
            .field("from", &self.from)
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

impl Sequence {
    pub fn new(
        name: impl Into<String>,
        from: u64,
        duration: u64,
        scene: impl Scene + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            from,
            duration,
            scene: Arc::new(scene),
        }
    }

    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(self.from),
            end: FrameIndex(self.from.saturating_add(self.duration)),
        }
    }

    pub fn is_active(&self, frame: FrameIndex) -> bool {
        self.range().contains(frame)
    }
}

/// Ordered list of sequences sharing one clock and canvas.
#[derive(Clone, Debug)]
pub struct Timeline {
    pub fps: Fps,
    pub canvas: Canvas,
    pub duration: u64,
    /// Full-canvas fill drawn beneath every sequence.
    pub background: Option<Rgba8>,
    sequences: Vec<Sequence>,
}

impl Timeline {
    pub fn new(fps: Fps, canvas: Canvas, duration: u64) -> ReelResult<Self> {
        fps.validate()?;
        if duration == 0 {
            return Err(ReelError::validation("timeline duration must be > 0"));
        }
        check_canvas(canvas)?;
        Ok(Self {
            fps,
            canvas,
            duration,
            background: None,
            sequences: Vec::new(),
        })
    }

    pub fn with_background(self, color: Rgba8) -> Self {
        Self {
            background: Some(color),
            ..self
        }
    }

    /// Append a sequence; it must be non-empty and end within the timeline.
    pub fn push(&mut self, seq: Sequence) -> ReelResult<&mut Self> {
        check_fits(&seq, self.duration)?;
        self.sequences.push(seq);
        Ok(self)
    }

    pub fn with_sequence(mut self, seq: Sequence) -> ReelResult<Self> {
        self.push(seq)?;
        Ok(self)
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    /// `[0, duration)`.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration),
        }
    }

    pub fn validate(&self) -> ReelResult<()> {
        self.fps.validate()?;
        if self.duration == 0 {
            return Err(ReelError::validation("timeline duration must be > 0"));
        }
        check_canvas(self.canvas)?;
        for seq in &self.sequences {
            check_fits(seq, self.duration)?;
        }
        Ok(())
    }

    /// Sequences covering `frame`, in declaration order.
    pub fn active_sequences(&self, frame: FrameIndex) -> impl Iterator<Item = &Sequence> + '_ {
        self.sequences.iter().filter(move |s| s.is_active(frame))
    }

    /// Build the visual tree for one frame.
    ///
    /// The root is a group named `timeline` holding the optional background, then one group per
    /// active sequence (named after it) in declaration order.
    #[tracing::instrument(skip(self), fields(sequences = self.sequences.len()))]
    pub fn eval_frame(&self, frame: FrameIndex) -> ReelResult<VisualNode> {
        if frame.0 >= self.duration {
            return Err(ReelError::validation(format!(
                "frame {} is out of bounds for timeline of {} frames",
                frame.0, self.duration
            )));
        }

        let mut children = Vec::with_capacity(self.sequences.len() + 1);
        if let Some(color) = self.background {
            children.push(VisualNode::rect(
                Props::rect(
                    0.0,
                    0.0,
                    f64::from(self.canvas.width),
                    f64::from(self.canvas.height),
                ),
                color,
            ));
        }

        for seq in self.active_sequences(frame) {
            let ctx = SceneCtx {
                frame: i64::try_from(frame.0 - seq.from).map_err(|_| {
                    ReelError::validation(format!("frame {} exceeds i64 range", frame.0))
                })?,
                global_frame: frame.0,
                fps: self.fps,
                canvas: self.canvas,
                duration_frames: seq.duration,
            };
            let node = seq.scene.render(&ctx)?;
            children.push(VisualNode::named_group(
                seq.name.clone(),
                Props::default(),
                vec![node],
            ));
        }

        let root = VisualNode::named_group("timeline", Props::default(), children);
        root.validate()?;
        Ok(root)
    }
}

fn check_canvas(canvas: Canvas) -> ReelResult<()> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(ReelError::validation(format!(
            "canvas width/height must be > 0, got {}x{}",
            canvas.width, canvas.height
        )));
    }
    Ok(())
}

fn check_fits(seq: &Sequence, duration: u64) -> ReelResult<()> {
    if seq.duration == 0 {
        return Err(ReelError::validation(format!(
            "sequence '{}' has zero duration",
            seq.name
        )));
    }
    match seq.from.checked_add(seq.duration) {
        Some(end) if end <= duration => Ok(()),
        _ => Err(ReelError::validation(format!(
            "sequence '{}' [{}, {}+{}) exceeds timeline duration {duration}",
            seq.name, seq.from, seq.from, seq.duration
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/timeline.rs"]
mod tests;
