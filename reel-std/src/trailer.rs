use reel::{Canvas, Fps, ReelResult, SequenceDef, TIMELINE_VERSION, Timeline, TimelineDef};

use crate::presets::palette;
use crate::registry::{CALL_TO_ACTION, CURRICULUM_LIST, GLASS_HOOK, STATS_COUNTER, registry};

/// `(sequence name, scene, from, duration)` for the stock trailer at 30 fps.
const GLASS_TRAILER: [(&str, &str, u64, u64); 4] = [
    ("hook", GLASS_HOOK, 0, 120),
    ("learn", CURRICULUM_LIST, 120, 120),
    ("stats", STATS_COUNTER, 240, 150),
    ("cta", CALL_TO_ACTION, 390, 150),
];

/// The stock 18-second glass trailer as a JSON-serializable definition.
pub fn glass_trailer_def() -> TimelineDef {
    let sequences: Vec<SequenceDef> = GLASS_TRAILER
        .iter()
        .map(|&(name, scene, from, duration)| SequenceDef {
            name: name.to_owned(),
            from,
            duration,
            scene: scene.to_owned(),
            params: serde_json::json!({}),
        })
        .collect();
    let duration = sequences.iter().map(|s| s.from + s.duration).max().unwrap_or(0);
    TimelineDef {
        version: TIMELINE_VERSION.to_owned(),
        fps: Fps { num: 30, den: 1 },
        canvas: Canvas {
            width: 1920,
            height: 1080,
        },
        duration,
        background: Some(palette::NIGHT),
        sequences,
    }
}

/// [`glass_trailer_def`] resolved against the built-in [`registry`].
#[tracing::instrument]
pub fn glass_trailer() -> ReelResult<Timeline> {
    glass_trailer_def().build(&registry())
}
