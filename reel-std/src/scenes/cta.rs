//! Closing call to action: logo pop, tagline, pulsing button and rising confetti.

use reel::{
    Extrapolate, Field, InterpolateOpts, Props, ReelResult, Rgba8, Scene, SceneCtx, SpringConfig,
    Transform2D, VisualNode, interpolate, ops,
};
use serde::{Deserialize, Serialize};

use super::glass::{ParticleField, default_blobs, header, panel};
use crate::presets::{SpringSpec, palette};

/// Confetti hues in degrees; each piece picks one by key.
const CONFETTI_HUES: [f64; 5] = [280.0, 320.0, 220.0, 160.0, 30.0];

/// Confetti opacity against its height: invisible below the canvas, brightest low on screen.
const CONFETTI_FADE_Y: [f64; 4] = [-50.0, 200.0, 800.0, 1100.0];
const CONFETTI_FADE_ALPHA: [f64; 4] = [0.0, 0.6, 0.8, 0.0];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CtaParams {
    pub brand: String,
    pub tagline: String,
    pub button: String,
    pub subtext: String,
    pub url: String,
    pub header_title: String,
    pub header_caption: String,
    /// Backdrop image asset; faded to 35% behind the panel.
    pub image: Option<String>,
    pub logo_trigger: i64,
    pub logo_spring: SpringSpec,
    pub tagline_trigger: i64,
    pub tagline_spring: SpringSpec,
    pub button_trigger: i64,
    pub button_spring: SpringSpec,
    pub subtext_trigger: i64,
    pub confetti_count: u64,
    pub particles: ParticleField,
}

impl Default for CtaParams {
    fn default() -> Self {
        Self {
            brand: "SpeakCode".to_owned(),
            tagline: "Master agentic coding.".to_owned(),
            button: "Enroll Now ->".to_owned(),
            subtext: "The skill of the decade".to_owned(),
            url: "speakcode.com".to_owned(),
            header_title: "Ready to Start?".to_owned(),
            header_caption: "Join now".to_owned(),
            image: Some("course-celebration.png".to_owned()),
            logo_trigger: 20,
            logo_spring: SpringSpec::Custom(SpringConfig::from_damping(14.0, 120.0, 1.0)),
            tagline_trigger: 45,
            tagline_spring: SpringSpec::Custom(SpringConfig::from_damping(16.0, 100.0, 1.0)),
            button_trigger: 65,
            button_spring: SpringSpec::Custom(SpringConfig::from_damping(12.0, 140.0, 1.0)),
            subtext_trigger: 90,
            confetti_count: 25,
            particles: ParticleField {
                namespace: "cta".to_owned(),
                count: 40,
                min_size: 3.0,
                max_size: 13.0,
                min_speed: 0.3,
                max_speed: 1.1,
                ..ParticleField::default()
            },
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CallToAction {
    params: CtaParams,
}

impl CallToAction {
    pub fn new(params: CtaParams) -> Self {
        Self { params }
    }

    /// Confetti rising from below the canvas once the button has appeared. Empty before that.
    fn confetti(&self, ctx: &SceneCtx) -> ReelResult<VisualNode> {
        let p = &self.params;
        let since = ctx.elapsed(p.button_trigger);
        if since < 0 {
            return Ok(VisualNode::named_group("confetti", Props::default(), Vec::new()));
        }
        let t = since as f64;
        let field = Field::new("conf");
        let mut pieces = Vec::with_capacity(p.confetti_count as usize);
        for i in 0..p.confetti_count {
            let x = field.value("x", i) * ctx.width();
            let start_y = field.range("y", i, 1100.0, 1300.0);
            let size = field.range("size", i, 4.0, 12.0);
            let speed = field.range("speed", i, 1.5, 3.5);
            let wobble = field.value("wobble", i) * 4.0;
            let hue_index = (field.value("hue", i) * CONFETTI_HUES.len() as f64) as usize;
            let hue = CONFETTI_HUES[hue_index.min(CONFETTI_HUES.len() - 1)];

            let y = start_y - t * speed * 1.5;
            let dx = ops::oscillate(t, 0.1, i as f64, wobble * 10.0);
            let opacity = interpolate(
                y,
                &CONFETTI_FADE_Y,
                &CONFETTI_FADE_ALPHA,
                InterpolateOpts::default().with_right(Extrapolate::Clamp),
            )?;
            let opacity = opacity.clamp(0.0, 1.0);
            pieces.push(
                VisualNode::rect(
                    Props::rect(x + dx, y, size, size * 0.6)
                        .opacity(opacity)
                        .transform(
                            Transform2D::default()
                                .with_rotation_deg(t * 3.0 + i as f64 * 45.0)
                                .with_anchor(size / 2.0, size * 0.3),
                        ),
                    Rgba8::from_hsla(hue, 0.8, 0.6, 1.0),
                )
                .with_corner_radius(2.0),
            );
        }
        Ok(VisualNode::named_group("confetti", Props::default(), pieces))
    }

    fn card(&self, ctx: &SceneCtx) -> ReelResult<VisualNode> {
        let p = &self.params;
        let logo = ctx.spring(p.logo_trigger, &p.logo_spring.config())?;
        let tagline = ctx.spring(p.tagline_trigger, &p.tagline_spring.config())?;
        let button = ctx.spring(p.button_trigger, &p.button_spring.config())?;
        let since_button = ctx.elapsed(p.button_trigger);
        let pulse = if since_button >= 0 {
            1.0 + ops::oscillate(since_button as f64, 0.12, 0.0, 0.02)
        } else {
            1.0
        };

        let (w, h) = (900.0, 560.0);
        let c = ctx.center();
        Ok(VisualNode::named_group(
            "card",
            Props::rect(c.x - w / 2.0, c.y - h / 2.0, w, h),
            vec![
                panel(Props::rect(0.0, 0.0, w, h), 40.0, 30.0),
                VisualNode::named_group(
                    "logo",
                    Props::rect(0.0, 60.0, w, 120.0).opacity(logo.min(1.0)).transform(
                        Transform2D::default()
                            .with_uniform_scale(logo)
                            .with_anchor(w / 2.0, 60.0),
                    ),
                    vec![
                        VisualNode::rect(
                            Props::rect(w / 2.0 - 220.0, 20.0, 80.0, 80.0),
                            palette::VIOLET,
                        )
                        .with_corner_radius(20.0),
                        VisualNode::text(
                            Props::rect(w / 2.0 - 120.0, 24.0, 360.0, 72.0),
                            p.brand.as_str(),
                            64.0,
                            Rgba8::WHITE,
                        )
                        .with_font_weight(700),
                    ],
                ),
                VisualNode::text(
                    Props::rect(0.0, 210.0, w, 50.0)
                        .opacity(tagline)
                        .transform(Transform2D::translate(0.0, (1.0 - tagline) * 30.0)),
                    p.tagline.as_str(),
                    40.0,
                    Rgba8::WHITE.with_opacity(0.9),
                )
                .with_font_weight(300),
                VisualNode::named_group(
                    "button",
                    Props::rect(w / 2.0 - 180.0, 310.0, 360.0, 90.0)
                        .opacity(button.min(1.0))
                        .transform(
                            Transform2D::default()
                                .with_uniform_scale(button * pulse)
                                .with_anchor(180.0, 45.0),
                        ),
                    vec![
                        VisualNode::rect(Props::rect(0.0, 0.0, 360.0, 90.0), palette::VIOLET)
                            .with_corner_radius(45.0),
                        VisualNode::text(
                            Props::rect(40.0, 24.0, 280.0, 42.0),
                            p.button.as_str(),
                            32.0,
                            Rgba8::WHITE,
                        )
                        .with_font_weight(600),
                    ],
                ),
                VisualNode::text(
                    Props::rect(0.0, 440.0, w, 36.0).opacity(ctx.fade_in(p.subtext_trigger, 15)),
                    p.subtext.as_str(),
                    24.0,
                    Rgba8::WHITE.with_opacity(0.6),
                )
                .with_letter_spacing(2.0),
            ],
        ))
    }
}

impl Scene for CallToAction {
    fn render(&self, ctx: &SceneCtx) -> ReelResult<VisualNode> {
        let p = &self.params;
        let mut layers = Vec::with_capacity(7);
        layers.push(VisualNode::named_group(
            "blobs",
            Props::default(),
            default_blobs().iter().map(|b| b.render(ctx, 1.0)).collect(),
        ));
        if let Some(asset) = &p.image {
            let opacity = ctx.fade_in(5, 25) * 0.35;
            layers.push(VisualNode::image(
                Props::rect(0.0, 0.0, ctx.width(), ctx.height()).opacity(opacity),
                asset.as_str(),
            ));
        }
        layers.push(p.particles.render(ctx));
        layers.push(self.confetti(ctx)?);
        layers.push(header(ctx, &p.header_title, &p.header_caption, ctx.fade_in(0, 20)));
        layers.push(self.card(ctx)?);
        layers.push(
            VisualNode::text(
                Props::rect(0.0, ctx.height() - 80.0, ctx.width(), 30.0)
                    .opacity(ctx.fade_in(p.subtext_trigger, 20)),
                p.url.as_str(),
                22.0,
                palette::VIOLET,
            )
            .with_letter_spacing(4.0),
        );
        Ok(VisualNode::named_group("cta", Props::default(), layers))
    }
}
