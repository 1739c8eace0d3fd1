use rayon::prelude::*;

use crate::{
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    render::fingerprint::{TreeFingerprint, fingerprint_tree},
    render::sink::{FrameSink, SinkConfig},
    scene::timeline::Timeline,
    scene::tree::VisualNode,
};

/// Threading and chunking controls for multi-frame evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalThreading {
    /// Evaluate each chunk on a rayon pool when `true`.
    pub parallel: bool,
    /// Chunk size in frames; `0` is treated as `1`.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
    /// Fingerprint every tree and count frames identical to their predecessor.
    pub detect_static_frames: bool,
}

impl Default for EvalThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            detect_static_frames: false,
        }
    }
}

impl EvalThreading {
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Self::default()
        }
    }
}

/// Aggregated evaluation counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalStats {
    pub frames_total: u64,
    pub chunks: u64,
    /// Frames whose tree equals the previous frame's (only with `detect_static_frames`).
    pub frames_static: u64,
}

/// Evaluate one frame of `timeline`.
pub fn eval_frame(timeline: &Timeline, frame: FrameIndex) -> ReelResult<VisualNode> {
    timeline.validate()?;
    timeline.eval_frame(frame)
}

/// Evaluate a frame range (inclusive start, exclusive end), returning trees in frame order.
#[tracing::instrument(skip(timeline, threading), fields(parallel = threading.parallel))]
pub fn eval_frames(
    timeline: &Timeline,
    range: FrameRange,
    threading: &EvalThreading,
) -> ReelResult<(Vec<VisualNode>, EvalStats)> {
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let stats = drive(timeline, range, threading, |_, tree| {
        out.push(tree);
        Ok(())
    })?;
    Ok((out, stats))
}

/// Evaluate a frame range and stream the trees into `sink` in strictly increasing frame order.
#[tracing::instrument(skip(timeline, threading, sink), fields(parallel = threading.parallel))]
pub fn eval_range_into(
    timeline: &Timeline,
    range: FrameRange,
    threading: &EvalThreading,
    sink: &mut dyn FrameSink,
) -> ReelResult<EvalStats> {
    check_range(timeline, range)?;
    sink.begin(SinkConfig {
        canvas: timeline.canvas,
        fps: timeline.fps,
        range,
    })?;
    let stats = drive(timeline, range, threading, |idx, tree| {
        sink.push_frame(idx, &tree)
    })?;
    sink.end()?;
    Ok(stats)
}

/// Per-frame fingerprints for a range, in frame order.
pub fn fingerprint_range(
    timeline: &Timeline,
    range: FrameRange,
    threading: &EvalThreading,
) -> ReelResult<Vec<TreeFingerprint>> {
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    drive(timeline, range, threading, |_, tree| {
        out.push(fingerprint_tree(&tree));
        Ok(())
    })?;
    Ok(out)
}

fn check_range(timeline: &Timeline, range: FrameRange) -> ReelResult<()> {
    if range.is_empty() {
        return Err(ReelError::validation("eval range must be non-empty"));
    }
    if range.end.0 > timeline.duration {
        return Err(ReelError::validation(format!(
            "eval range end {} exceeds timeline duration {}",
            range.end.0, timeline.duration
        )));
    }
    Ok(())
}

fn drive(
    timeline: &Timeline,
    range: FrameRange,
    threading: &EvalThreading,
    mut emit: impl FnMut(FrameIndex, VisualNode) -> ReelResult<()>,
) -> ReelResult<EvalStats> {
    check_range(timeline, range)?;
    timeline.validate()?;

    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };
    tracing::debug!(
        frames = range.len_frames(),
        chunk_size,
        threads = ?pool.as_ref().map(|p| p.current_num_threads()),
        "evaluating range"
    );

    let mut stats = EvalStats::default();
    let mut prev: Option<TreeFingerprint> = None;
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = chunk_start.saturating_add(chunk_size).min(range.end.0);
        let trees = match &pool {
            Some(pool) => eval_chunk_parallel(timeline, chunk_start..chunk_end, pool)?,
            None => eval_chunk_sequential(timeline, chunk_start..chunk_end)?,
        };

        for (f, tree) in (chunk_start..chunk_end).zip(trees) {
            if threading.detect_static_frames {
                let fp = fingerprint_tree(&tree);
                if prev == Some(fp) {
                    stats.frames_static += 1;
                }
                prev = Some(fp);
            }
            emit(FrameIndex(f), tree)?;
            stats.frames_total += 1;
        }
        stats.chunks += 1;
        chunk_start = chunk_end;
    }
    Ok(stats)
}

fn eval_chunk_sequential(
    timeline: &Timeline,
    frames: std::ops::Range<u64>,
) -> ReelResult<Vec<VisualNode>> {
    frames.map(|f| timeline.eval_frame(FrameIndex(f))).collect()
}

fn eval_chunk_parallel(
    timeline: &Timeline,
    frames: std::ops::Range<u64>,
    pool: &rayon::ThreadPool,
) -> ReelResult<Vec<VisualNode>> {
    let start = frames.start;
    let len = (frames.end - frames.start) as usize;
    // Indexed parallel collect keeps frame order.
    pool.install(|| {
        (0..len)
            .into_par_iter()
            .map(|i| timeline.eval_frame(FrameIndex(start + i as u64)))
            .collect::<Vec<_>>()
    })
    .into_iter()
    .collect()
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "eval threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
