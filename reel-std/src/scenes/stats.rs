//! Achievement stats: a headline over a grid of glass cards whose figures count up on a spring.

use reel::{
    Props, ReelResult, Rgba8, Scene, SceneCtx, Spring, SpringConfig, Transform2D, VisualNode, ops,
};
use serde::{Deserialize, Serialize};

use super::glass::{ParticleField, panel};
use crate::presets::{SpringSpec, accent};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatItem {
    /// Figure the counter settles on.
    pub value: f64,
    #[serde(default)]
    pub decimals: usize,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
    #[serde(default)]
    pub sublabel: String,
    #[serde(default)]
    pub color: Option<Rgba8>,
}

impl StatItem {
    fn new(value: f64, suffix: &str, label: &str, sublabel: &str) -> Self {
        Self {
            value,
            decimals: 0,
            suffix: suffix.to_owned(),
            label: label.to_owned(),
            sublabel: sublabel.to_owned(),
            color: None,
        }
    }

    /// Text shown when the counter has reached `progress` of the way to `value`.
    pub fn display(&self, progress: f64) -> String {
        let v = self.value * progress.clamp(0.0, 1.0);
        format!("{:.*}{}", self.decimals, v, self.suffix)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatsParams {
    pub headline: String,
    pub headline_fade: u64,
    pub items: Vec<StatItem>,
    pub columns: usize,
    pub item_start: i64,
    pub item_step: i64,
    pub item_fade: u64,
    /// Drives the card pop (scale 0.9 to 1).
    pub pop_spring: SpringSpec,
    /// Drives the count-up; overshoot is always clamped so figures never pass their target.
    pub count_spring: SpringSpec,
    pub particles: ParticleField,
}

impl Default for StatsParams {
    fn default() -> Self {
        Self {
            headline: "Became App Lead on an Enterprise AI Platform".to_owned(),
            headline_fade: 25,
            items: vec![
                StatItem::new(100.0, "K+", "Lines of Code", "Enterprise AI Platform"),
                StatItem::new(30.0, "K+", "Users Served", "Across the organization"),
                StatItem::new(4.0, "", "Production Agents", "Weeks to Days deployment"),
                StatItem::new(2.0, " Weeks", "Ahead of Schedule", "Fastest UAT approval"),
            ],
            columns: 4,
            item_start: 25,
            item_step: 15,
            item_fade: 15,
            pop_spring: SpringSpec::Custom(SpringConfig::from_damping(14.0, 100.0, 1.0)),
            count_spring: SpringSpec::Custom(SpringConfig::from_damping(26.0, 60.0, 1.0)),
            particles: ParticleField {
                namespace: "stats".to_owned(),
                count: 20,
                ..ParticleField::default()
            },
        }
    }
}

/// Stats grid scene.
#[derive(Clone, Debug, Default)]
pub struct StatsCounter {
    params: StatsParams,
}

impl StatsCounter {
    pub fn new(params: StatsParams) -> Self {
        Self { params }
    }

    fn card(&self, ctx: &SceneCtx, index: usize, item: &StatItem) -> ReelResult<VisualNode> {
        let p = &self.params;
        let columns = p.columns.max(1);
        let (gap, grid_w) = (24.0, 1400.0_f64.min(ctx.width() - 120.0));
        let w = (grid_w - gap * (columns - 1) as f64) / columns as f64;
        let h = 220.0;
        let (col, row) = (index % columns, index / columns);
        let x = ctx.center().x - grid_w / 2.0 + col as f64 * (w + gap);
        let y = ctx.center().y - 40.0 + row as f64 * (h + gap);

        let start = ops::stagger_start(p.item_start, index as u64, p.item_step);
        let pop = ctx.spring(start, &p.pop_spring.config())?;
        let counted = ctx.spring_value(
            &Spring::new(p.count_spring.config().with_overshoot_clamping(true))
                .delay(start as f64),
        )?;
        let float = ops::oscillate(ctx.frame_f64(), 0.03, index as f64 * 0.7, 4.0);
        let color = item.color.unwrap_or_else(|| accent(index));

        Ok(VisualNode::named_group(
            format!("stat-{}", index + 1),
            Props::rect(x, y, w, h)
                .opacity(ctx.fade_in(start, p.item_fade))
                .transform(
                    Transform2D::translate(0.0, float)
                        .with_uniform_scale(0.9 + 0.1 * pop)
                        .with_anchor(w / 2.0, h / 2.0),
                ),
            vec![
                panel(Props::rect(0.0, 0.0, w, h), 24.0, 20.0),
                VisualNode::text(
                    Props::rect(24.0, 36.0, w - 48.0, 70.0),
                    item.display(counted),
                    56.0,
                    color,
                )
                .with_font_weight(700),
                VisualNode::text(
                    Props::rect(24.0, 120.0, w - 48.0, 30.0),
                    item.label.as_str(),
                    24.0,
                    Rgba8::WHITE.with_opacity(0.9),
                )
                .with_font_weight(500),
                VisualNode::text(
                    Props::rect(24.0, 160.0, w - 48.0, 24.0),
                    item.sublabel.as_str(),
                    18.0,
                    Rgba8::WHITE.with_opacity(0.5),
                ),
            ],
        ))
    }
}

impl Scene for StatsCounter {
    fn render(&self, ctx: &SceneCtx) -> ReelResult<VisualNode> {
        let p = &self.params;
        let headline = VisualNode::text(
            Props::rect(60.0, ctx.center().y - 200.0, ctx.width() - 120.0, 60.0)
                .opacity(ctx.fade_in(0, p.headline_fade)),
            p.headline.as_str(),
            48.0,
            Rgba8::WHITE.with_opacity(0.95),
        )
        .with_font_weight(300);

        let cards = p
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| self.card(ctx, i, item))
            .collect::<ReelResult<Vec<_>>>()?;

        Ok(VisualNode::named_group(
            "stats",
            Props::default(),
            vec![
                p.particles.render(ctx),
                headline,
                VisualNode::named_group("grid", Props::default(), cards),
            ],
        ))
    }
}
