use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::tree::VisualNode;
use std::io::Write;

/// Configuration provided to a [`FrameSink`] at the start of a range evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    pub canvas: Canvas,
    pub fps: Fps,
    pub range: FrameRange,
}

/// Consumer of evaluated trees.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order within the
/// requested range, regardless of how the trees were evaluated.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()>;
    fn push_frame(&mut self, idx: FrameIndex, tree: &VisualNode) -> ReelResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> ReelResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, VisualNode)>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub fn frames(&self) -> &[(FrameIndex, VisualNode)] {
        &self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn into_frames(self) -> Vec<(FrameIndex, VisualNode)> {
        self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, tree: &VisualNode) -> ReelResult<()> {
        self.frames.push((idx, tree.clone()));
        Ok(())
    }

    fn end(&mut self) -> ReelResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct FrameLine<'a> {
    frame: u64,
    tree: &'a VisualNode,
}

/// Writes one compact JSON object per frame: `{"frame":N,"tree":{...}}\n`.
pub struct JsonLinesSink<W: Write + Send> {
    out: W,
    frames_written: u64,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            frames_written: 0,
        }
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, _cfg: SinkConfig) -> ReelResult<()> {
        self.frames_written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, tree: &VisualNode) -> ReelResult<()> {
        let line = FrameLine {
            frame: idx.0,
            tree,
        };
        serde_json::to_writer(&mut self.out, &line)
            .map_err(|e| ReelError::serde(format!("frame {}: {e}", idx.0)))?;
        self.out
            .write_all(b"\n")
            .map_err(|e| anyhow::Error::new(e).context("write JSON lines output"))?;
        self.frames_written += 1;
        Ok(())
    }

    fn end(&mut self) -> ReelResult<()> {
        self.out
            .flush()
            .map_err(|e| anyhow::Error::new(e).context("flush JSON lines output"))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
