//! Building blocks shared by the glass scenes: drifting particles, floating blobs, frosted panels.

use reel::{Field, Props, Rgba8, SceneCtx, Transform2D, VisualNode, ops};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use crate::presets::palette;

/// Vertical band particles drift through, past the canvas edges, before wrapping.
const PARTICLE_OVERSCAN: f64 = 60.0;

/// Keyed particle field. Every attribute of particle `i` is drawn from `Field::new(namespace)`
/// under its own name (`x`, `y`, `size`, `speed`, `alpha`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticleField {
    pub namespace: String,
    pub count: u64,
    pub min_size: f64,
    pub max_size: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    /// Multiplier applied to speed, in pixels per frame.
    pub drift: f64,
    pub min_alpha: f64,
    pub max_alpha: f64,
    pub color: Rgba8,
}

impl Default for ParticleField {
    fn default() -> Self {
        Self {
            namespace: "particle".to_owned(),
            count: 25,
            min_size: 3.0,
            max_size: 11.0,
            min_speed: 0.3,
            max_speed: 1.0,
            drift: 0.5,
            min_alpha: 0.2,
            max_alpha: 0.6,
            color: Rgba8::WHITE,
        }
    }
}

impl ParticleField {
    pub fn render(&self, ctx: &SceneCtx) -> VisualNode {
        let field = Field::new(self.namespace.as_str());
        let span = ctx.height() + 2.0 * PARTICLE_OVERSCAN;
        let children = (0..self.count)
            .map(|i| {
                let x = field.value("x", i) * ctx.width();
                let y0 = field.value("y", i) * ctx.height();
                let size = field.range("size", i, self.min_size, self.max_size);
                let speed = field.range("speed", i, self.min_speed, self.max_speed);
                let alpha = field.range("alpha", i, self.min_alpha, self.max_alpha);
                let y = ops::drift(ctx.frame_f64(), speed * self.drift, y0, span);
                let y = y - PARTICLE_OVERSCAN;
                VisualNode::circle(x, y, size, self.color.with_opacity(alpha)).with_blur(1.0)
            })
            .collect();
        VisualNode::named_group("particles", Props::default(), children)
    }
}

/// Large blurred colour blob floating on sine/cosine paths.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Blob {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: Rgba8,
    /// Phase offset in seconds-ish units; scaled by 10 for position, 5 for pulse.
    pub delay: f64,
}

impl Blob {
    pub fn render(&self, ctx: &SceneCtx, opacity: f64) -> VisualNode {
        let f = ctx.frame_f64();
        let dy = ops::oscillate(f, 0.02, self.delay * 10.0, 20.0);
        let dx = ops::oscillate(f, 0.015, self.delay * 10.0 + FRAC_PI_2, 15.0);
        let scale = 1.0 + ops::oscillate(f, 0.03, self.delay * 5.0, 0.1);
        let half = self.size / 2.0;
        VisualNode::rect(
            Props::rect(self.x + dx, self.y + dy, self.size, self.size).transform(
                Transform2D::default()
                    .with_uniform_scale(scale)
                    .with_anchor(half, half),
            ),
            self.color,
        )
        .with_corner_radius(half)
        .with_blur(80.0)
        .fade(opacity)
    }
}

/// Default four-blob backdrop.
pub fn default_blobs() -> Vec<Blob> {
    vec![
        Blob {
            x: 200.0,
            y: 300.0,
            size: 400.0,
            color: palette::VIOLET.with_opacity(0.3),
            delay: 0.0,
        },
        Blob {
            x: 1500.0,
            y: 200.0,
            size: 350.0,
            color: palette::PINK.with_opacity(0.25),
            delay: 0.3,
        },
        Blob {
            x: 900.0,
            y: 700.0,
            size: 450.0,
            color: palette::BLUE.with_opacity(0.2),
            delay: 0.6,
        },
        Blob {
            x: 1600.0,
            y: 800.0,
            size: 300.0,
            color: palette::VIOLET.with_opacity(0.2),
            delay: 0.9,
        },
    ]
}

/// Frosted rounded panel with a hairline border.
pub fn panel(props: Props, radius: f64, blur: f64) -> VisualNode {
    VisualNode::rect(props, palette::FROST)
        .with_corner_radius(radius)
        .with_blur(blur)
        .with_border(1.0, palette::FROST_EDGE)
}

/// Full-width header bar: brand on the left, caption on the right.
pub fn header(ctx: &SceneCtx, brand: &str, caption: &str, opacity: f64) -> VisualNode {
    let w = ctx.width() - 80.0;
    VisualNode::named_group(
        "header",
        Props::rect(40.0, 30.0, w, 80.0).opacity(opacity),
        vec![
            panel(Props::rect(0.0, 0.0, w, 80.0), 20.0, 20.0),
            VisualNode::text(
                Props::rect(40.0, 28.0, w / 2.0, 24.0),
                brand,
                20.0,
                palette::VIOLET,
            )
            .with_font_weight(500)
            .with_letter_spacing(3.0),
            VisualNode::text(
                Props::rect(w / 2.0, 26.0, w / 2.0 - 40.0, 28.0),
                caption,
                22.0,
                Rgba8::WHITE.with_opacity(0.7),
            )
            .with_font_weight(300),
        ],
    )
}
