//! Reel is a deterministic animation core for programmatic trailers.
//!
//! Every visual property of a frame is derived from the frame number and static parameters. No
//! state survives between frames, so any frame can be evaluated in any order, repeatedly, or on
//! any thread, and always produces the same tree.
//!
//! # Layers
//!
//! 1. **Animation math**: [`interpolate`] over breakpoint curves, closed-form damped springs
//!    ([`spring_progress`], [`Spring`]), key-addressed randomness ([`random`], [`Field`]) and
//!    frame arithmetic ([`ops`]).
//! 2. **Scenes**: a [`Scene`] is a pure function from an explicit [`SceneCtx`] to a
//!    [`VisualNode`] tree of rects, text, images and groups.
//! 3. **Timeline**: a [`Timeline`] places scenes as [`Sequence`]s on one clock; it can be built
//!    from JSON through [`TimelineDef`] and a [`SceneRegistry`].
//! 4. **Pipeline**: [`eval_frames`] and [`eval_range_into`] evaluate ranges sequentially or on a
//!    rayon pool, delivering trees in frame order to a [`FrameSink`].
//!
//! Pixel rendering, asset loading and encoding belong to the host consuming the trees.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod render;
mod scene;

pub use animation::ease::{Ease, EaseCurve, EaseMode};
pub use animation::interpolate::{
    Curve, Extrapolate, InterpolateOpts, Lerp, interpolate, interpolate_colors, interpolate_values,
};
pub use animation::ops::{self, LoopMode};
pub use animation::random::{Field, random, random_indexed, random_range, random_seeded};
pub use animation::spring::{
    DEFAULT_SETTLE_THRESHOLD, MAX_SPRING_FRAMES, Spring, SpringConfig, measure_spring,
    spring_progress,
};
pub use foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Rgba8, Transform2D, Vec2,
};
pub use foundation::error::{ReelError, ReelResult};
pub use render::fingerprint::{TreeFingerprint, fingerprint_tree, fingerprint_trees};
pub use render::pipeline::{
    EvalStats, EvalThreading, eval_frame, eval_frames, eval_range_into, fingerprint_range,
};
pub use render::sink::{FrameSink, InMemorySink, JsonLinesSink, SinkConfig};
pub use scene::context::SceneCtx;
pub use scene::model::{SceneFactory, SceneRegistry, SequenceDef, TIMELINE_VERSION, TimelineDef};
pub use scene::timeline::{Scene, Sequence, Timeline};
pub use scene::tree::{
    Border, GroupNode, ImageNode, Props, RectNode, TextNode, VisualNode,
};
