//! `reel-std` layers ready-made content on top of the `reel` core: named spring presets, the glass
//! palette, a set of trailer scenes and a registry that exposes them to JSON timelines.
//!
//! ```no_run
//! let timeline = reel_std::glass_trailer()?;
//! let tree = reel::eval_frame(&timeline, reel::FrameIndex(200))?;
//! # Ok::<(), reel::ReelError>(())
//! ```

#![forbid(unsafe_code)]

pub mod presets;
pub mod scenes;

mod registry;
mod trailer;

pub use presets::{SpringPreset, SpringSpec, accent, palette};
pub use registry::{
    CALL_TO_ACTION, CURRICULUM_LIST, GLASS_HOOK, STATS_COUNTER, register_builtins, registry,
};
pub use trailer::{glass_trailer, glass_trailer_def};
