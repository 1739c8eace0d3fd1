//! Opening hook: three spring-revealed lines over a blob backdrop, then an accent bar.

use reel::{Props, ReelResult, Rgba8, Scene, SceneCtx, SpringConfig, Transform2D, VisualNode};
use serde::{Deserialize, Serialize};

use super::glass::{ParticleField, default_blobs, header, panel};
use crate::presets::{SpringPreset, SpringSpec, palette};

/// One revealed line of the hook.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HookLine {
    pub text: String,
    /// Local frame the line starts springing in.
    pub trigger: i64,
    pub font_size: f64,
    #[serde(default = "default_weight")]
    pub font_weight: u16,
    #[serde(default = "default_line_spring")]
    pub spring: SpringSpec,
    #[serde(default = "default_line_color")]
    pub color: Rgba8,
}

fn default_weight() -> u16 {
    400
}

fn default_line_spring() -> SpringSpec {
    SpringPreset::Crisp.into()
}

fn default_line_color() -> Rgba8 {
    Rgba8::WHITE
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HookParams {
    pub brand: String,
    pub caption: String,
    pub lines: Vec<HookLine>,
    /// Pixels a line rises while its spring plays.
    pub rise: f64,
    pub accent: String,
    pub accent_start: i64,
    pub accent_fade: u64,
    pub header_fade: u64,
    pub particles: ParticleField,
}

impl Default for HookParams {
    fn default() -> Self {
        Self {
            brand: "SPEAKCODE".to_owned(),
            caption: "A new way to build".to_owned(),
            lines: vec![
                HookLine {
                    text: "What if you could".to_owned(),
                    trigger: 8,
                    font_size: 100.0,
                    font_weight: 200,
                    spring: SpringPreset::Crisp.into(),
                    color: Rgba8::WHITE,
                },
                HookLine {
                    text: "build software".to_owned(),
                    trigger: 22,
                    font_size: 100.0,
                    font_weight: 200,
                    spring: SpringPreset::Crisp.into(),
                    color: Rgba8::WHITE,
                },
                HookLine {
                    text: "just by describing it?".to_owned(),
                    trigger: 40,
                    font_size: 120.0,
                    font_weight: 600,
                    spring: SpringSpec::Custom(SpringConfig::from_damping(16.0, 140.0, 1.0)),
                    color: palette::VIOLET,
                },
            ],
            rise: 30.0,
            accent: "No syntax. No debugging. No years of practice.".to_owned(),
            accent_start: 60,
            accent_fade: 15,
            header_fade: 20,
            particles: ParticleField::default(),
        }
    }
}

/// Hook scene.
#[derive(Clone, Debug, Default)]
pub struct GlassHook {
    params: HookParams,
}

impl GlassHook {
    pub fn new(params: HookParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &HookParams {
        &self.params
    }

    fn lines(&self, ctx: &SceneCtx) -> ReelResult<VisualNode> {
        let p = &self.params;
        let total: f64 = p.lines.iter().map(|l| l.font_size * 1.2).sum();
        let mut y = ctx.center().y - total / 2.0 - 60.0;
        let mut out = Vec::with_capacity(p.lines.len());
        for line in &p.lines {
            let s = ctx.spring(line.trigger, &line.spring.config())?;
            let h = line.font_size * 1.2;
            out.push(
                VisualNode::text(
                    Props::rect(80.0, y, ctx.width() - 160.0, h)
                        .opacity(s)
                        .transform(Transform2D::translate(0.0, (1.0 - s) * p.rise)),
                    line.text.as_str(),
                    line.font_size,
                    line.color,
                )
                .with_font_weight(line.font_weight),
            );
            y += h;
        }
        Ok(VisualNode::named_group("lines", Props::default(), out))
    }

    fn accent_bar(&self, ctx: &SceneCtx) -> VisualNode {
        let p = &self.params;
        let (w, h) = (1100.0, 90.0);
        let x = ctx.center().x - w / 2.0;
        let y = ctx.height() - 260.0;
        VisualNode::named_group(
            "accent",
            Props::rect(x, y, w, h).opacity(ctx.fade_in(p.accent_start, p.accent_fade)),
            vec![
                panel(Props::rect(0.0, 0.0, w, h), 45.0, 20.0),
                VisualNode::text(
                    Props::rect(40.0, 26.0, w - 80.0, 40.0),
                    p.accent.as_str(),
                    32.0,
                    Rgba8::WHITE.with_opacity(0.85),
                )
                .with_font_weight(300),
            ],
        )
    }
}

impl Scene for GlassHook {
    fn render(&self, ctx: &SceneCtx) -> ReelResult<VisualNode> {
        let p = &self.params;
        let blobs = default_blobs().iter().map(|b| b.render(ctx, 1.0)).collect();
        Ok(VisualNode::named_group(
            "hook",
            Props::default(),
            vec![
                VisualNode::named_group("blobs", Props::default(), blobs),
                p.particles.render(ctx),
                header(ctx, &p.brand, &p.caption, ctx.fade_in(0, p.header_fade)),
                self.lines(ctx)?,
                self.accent_bar(ctx),
            ],
        ))
    }
}
