//! Curriculum list: a title followed by staggered module cards sliding in from the left.

use reel::{Props, ReelResult, Rgba8, Scene, SceneCtx, SpringConfig, Transform2D, VisualNode, ops};
use serde::{Deserialize, Serialize};

use super::glass::{ParticleField, panel};
use crate::presets::{SpringSpec, accent};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleItem {
    pub title: String,
    pub subtitle: String,
    /// Card accent; defaults to the palette entry for the card's position.
    #[serde(default)]
    pub color: Option<Rgba8>,
}

impl ModuleItem {
    fn new(title: &str, subtitle: &str) -> Self {
        Self {
            title: title.to_owned(),
            subtitle: subtitle.to_owned(),
            color: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurriculumParams {
    pub title: String,
    pub modules: Vec<ModuleItem>,
    pub title_trigger: i64,
    pub title_spring: SpringSpec,
    /// First card's trigger frame; later cards follow every `card_step` frames.
    pub card_start: i64,
    pub card_step: i64,
    pub card_spring: SpringSpec,
    pub card_fade: u64,
    /// Horizontal distance a card slides while its spring plays.
    pub slide: f64,
    pub particles: ParticleField,
}

impl Default for CurriculumParams {
    fn default() -> Self {
        Self {
            title: "What you'll learn".to_owned(),
            modules: vec![
                ModuleItem::new("The AI Mental Model", "Think AI as a collaborator"),
                ModuleItem::new("Prompt Engineering", "Get what you want, every time"),
                ModuleItem::new("Context is Everything", "CLAUDE.md, skills, project setup"),
                ModuleItem::new("Agentic Patterns", "Sub-agents, tools, workflows"),
                ModuleItem::new("Real Projects", "Build and ship actual apps"),
            ],
            title_trigger: 8,
            title_spring: SpringSpec::Custom(SpringConfig::from_damping(18.0, 100.0, 1.0)),
            card_start: 25,
            card_step: 12,
            card_spring: SpringSpec::Custom(SpringConfig::from_damping(16.0, 100.0, 1.0)),
            card_fade: 12,
            slide: 40.0,
            particles: ParticleField {
                namespace: "learn".to_owned(),
                min_speed: 0.2,
                max_speed: 0.6,
                drift: 0.25,
                ..ParticleField::default()
            },
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CurriculumList {
    params: CurriculumParams,
}

impl CurriculumList {
    pub fn new(params: CurriculumParams) -> Self {
        Self { params }
    }

    fn card(&self, ctx: &SceneCtx, index: usize, item: &ModuleItem) -> ReelResult<VisualNode> {
        let p = &self.params;
        let i = index as u64;
        let start = ops::stagger_start(p.card_start, i, p.card_step);
        let s = ctx.spring(start, &p.card_spring.config())?;
        let opacity = ctx.fade_in(start, p.card_fade);
        let float = ops::oscillate(ctx.frame_f64(), 0.03, index as f64 * 0.5, 3.0);
        let color = item.color.unwrap_or_else(|| accent(index));

        let (w, h) = (1100.0, 120.0);
        let x = ctx.center().x - w / 2.0;
        let y = 260.0 + index as f64 * 140.0;
        Ok(VisualNode::named_group(
            format!("module-{}", index + 1),
            Props::rect(x, y, w, h)
                .opacity(opacity)
                .transform(Transform2D::translate((1.0 - s) * p.slide, float)),
            vec![
                panel(Props::rect(0.0, 0.0, w, h), 24.0, 16.0),
                VisualNode::circle(70.0, h / 2.0, 64.0, color.with_opacity(0.25)),
                VisualNode::text(
                    Props::rect(46.0, 40.0, 48.0, 40.0),
                    format!("{:02}", index + 1),
                    28.0,
                    color,
                )
                .with_font_weight(600),
                VisualNode::text(
                    Props::rect(140.0, 22.0, w - 180.0, 44.0),
                    item.title.as_str(),
                    36.0,
                    Rgba8::WHITE,
                )
                .with_font_weight(500),
                VisualNode::text(
                    Props::rect(140.0, 70.0, w - 180.0, 30.0),
                    item.subtitle.as_str(),
                    22.0,
                    Rgba8::WHITE.with_opacity(0.6),
                )
                .with_font_weight(300),
            ],
        ))
    }
}

impl Scene for CurriculumList {
    fn render(&self, ctx: &SceneCtx) -> ReelResult<VisualNode> {
        let p = &self.params;
        let t = ctx.spring(p.title_trigger, &p.title_spring.config())?;
        let title = VisualNode::text(
            Props::rect(0.0, 110.0, ctx.width(), 90.0)
                .opacity(t)
                .transform(Transform2D::translate(0.0, (1.0 - t) * -20.0)),
            p.title.as_str(),
            72.0,
            Rgba8::WHITE,
        )
        .with_font_weight(700);

        let cards = p
            .modules
            .iter()
            .enumerate()
            .map(|(i, m)| self.card(ctx, i, m))
            .collect::<ReelResult<Vec<_>>>()?;

        Ok(VisualNode::named_group(
            "curriculum",
            Props::default(),
            vec![
                p.particles.render(ctx),
                title,
                VisualNode::named_group("modules", Props::default(), cards),
            ],
        ))
    }
}
