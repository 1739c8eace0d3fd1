use crate::{
    foundation::core::{Affine, Rgba8, Transform2D, Vec2},
    foundation::error::{ReelError, ReelResult},
};
use serde::{Deserialize, Serialize};

/// Placement and compositing properties shared by every node.
///
/// `x`/`y` are the node's top-left corner in its parent's space; `transform` applies on top of
/// that placement around `transform.anchor`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Props {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
    pub transform: Transform2D,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            opacity: 1.0,
            transform: Transform2D::default(),
        }
    }
}

impl Props {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            ..Self::default()
        }
    }

    pub fn size(self, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    /// Opacity is clamped into `[0, 1]`.
    pub fn opacity(self, opacity: f64) -> Self {
        Self {
            opacity: opacity.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn transform(self, transform: Transform2D) -> Self {
        Self { transform, ..self }
    }

    /// Placement followed by `transform`, mapping this node's space into its parent's.
    pub fn local_affine(&self) -> Affine {
        let place = Affine::translate(Vec2::new(self.x, self.y));
        if self.transform.is_identity() {
            place
        } else {
            place * self.transform.to_affine()
        }
    }

    fn validate(&self, path: &str) -> ReelResult<()> {
        let t = &self.transform;
        let fields = [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
            ("opacity", self.opacity),
            ("transform.translate.x", t.translate.x),
            ("transform.translate.y", t.translate.y),
            ("transform.rotation_rad", t.rotation_rad),
            ("transform.scale.x", t.scale.x),
            ("transform.scale.y", t.scale.y),
            ("transform.anchor.x", t.anchor.x),
            ("transform.anchor.y", t.anchor.y),
        ];
        if let Some((name, v)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ReelError::evaluation(format!("{path}: {name} is {v}")));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ReelError::evaluation(format!(
                "{path}: opacity {} outside [0, 1]",
                self.opacity
            )));
        }
        Ok(())
    }
}

/// Filled, optionally rounded and blurred rectangle (panels, blobs, particles).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectNode {
    #[serde(flatten)]
    pub props: Props,
    pub color: Rgba8,
    #[serde(default)]
    pub corner_radius: f64,
    #[serde(default)]
    pub blur: f64,
    #[serde(default)]
    pub border: Option<Border>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub width: f64,
    pub color: Rgba8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    #[serde(flatten)]
    pub props: Props,
    pub content: String,
    pub color: Rgba8,
    pub font_size: f64,
    #[serde(default = "default_weight")]
    pub font_weight: u16,
    #[serde(default)]
    pub letter_spacing: f64,
}

fn default_weight() -> u16 {
    400
}

/// Static asset referenced by logical name; the host resolves and loads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageNode {
    #[serde(flatten)]
    pub props: Props,
    pub asset: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupNode {
    #[serde(flatten)]
    pub props: Props,
    #[serde(default)]
    pub name: Option<String>,
    pub children: Vec<VisualNode>,
}

/// One node of the declarative tree a scene produces for a single frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisualNode {
    Rect(RectNode),
    Text(TextNode),
    Image(ImageNode),
    Group(GroupNode),
}

impl VisualNode {
    pub fn rect(props: Props, color: Rgba8) -> Self {
        Self::Rect(RectNode {
            props,
            color,
            corner_radius: 0.0,
            blur: 0.0,
            border: None,
        })
    }

    /// Rect with `corner_radius = min(w, h) / 2`.
    pub fn circle(cx: f64, cy: f64, diameter: f64, color: Rgba8) -> Self {
        Self::Rect(RectNode {
            props: Props::rect(
                cx - diameter / 2.0,
                cy - diameter / 2.0,
                diameter,
                diameter,
            ),
            color,
            corner_radius: diameter / 2.0,
            blur: 0.0,
            border: None,
        })
    }

    pub fn text(props: Props, content: impl Into<String>, font_size: f64, color: Rgba8) -> Self {
        Self::Text(TextNode {
            props,
            content: content.into(),
            color,
            font_size,
            font_weight: default_weight(),
            letter_spacing: 0.0,
        })
    }

    pub fn image(props: Props, asset: impl Into<String>) -> Self {
        Self::Image(ImageNode {
            props,
            asset: asset.into(),
        })
    }

    pub fn group(children: Vec<VisualNode>) -> Self {
        Self::Group(GroupNode {
            props: Props::default(),
            name: None,
            children,
        })
    }

    pub fn named_group(name: impl Into<String>, props: Props, children: Vec<VisualNode>) -> Self {
        Self::Group(GroupNode {
            props,
            name: Some(name.into()),
            children,
        })
    }

    pub fn props(&self) -> &Props {
        match self {
            Self::Rect(n) => &n.props,
            Self::Text(n) => &n.props,
            Self::Image(n) => &n.props,
            Self::Group(n) => &n.props,
        }
    }

    pub fn props_mut(&mut self) -> &mut Props {
        match self {
            Self::Rect(n) => &mut n.props,
            Self::Text(n) => &mut n.props,
            Self::Image(n) => &mut n.props,
            Self::Group(n) => &mut n.props,
        }
    }

    /// Multiply this node's opacity by `opacity` (clamped).
    pub fn fade(mut self, opacity: f64) -> Self {
        let p = self.props_mut();
        p.opacity = (p.opacity * opacity).clamp(0.0, 1.0);
        self
    }

    pub fn with_transform(mut self, transform: Transform2D) -> Self {
        self.props_mut().transform = transform;
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        if let Self::Rect(n) = &mut self {
            n.corner_radius = radius;
        }
        self
    }

    pub fn with_blur(mut self, blur: f64) -> Self {
        if let Self::Rect(n) = &mut self {
            n.blur = blur;
        }
        self
    }

    pub fn with_border(mut self, width: f64, color: Rgba8) -> Self {
        if let Self::Rect(n) = &mut self {
            n.border = Some(Border { width, color });
        }
        self
    }

    pub fn with_font_weight(mut self, weight: u16) -> Self {
        if let Self::Text(n) = &mut self {
            n.font_weight = weight;
        }
        self
    }

    pub fn with_letter_spacing(mut self, spacing: f64) -> Self {
        if let Self::Text(n) = &mut self {
            n.letter_spacing = spacing;
        }
        self
    }

    pub fn children(&self) -> &[VisualNode] {
        match self {
            Self::Group(g) => &g.children,
            _ => &[],
        }
    }

    /// Number of non-group nodes in the subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Group(g) => g.children.iter().map(Self::leaf_count).sum(),
            _ => 1,
        }
    }

    /// Depth-first pre-order traversal.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a VisualNode)) {
        f(self);
        for c in self.children() {
            c.walk(f);
        }
    }

    /// Reject non-finite numbers and out-of-range opacity anywhere in the tree.
    ///
    /// Transforms are also composed down the tree; a node whose world transform overflows is
    /// rejected even when each local value is finite.
    pub fn validate(&self) -> ReelResult<()> {
        self.validate_at("root", Affine::IDENTITY)
    }

    fn validate_at(&self, path: &str, parent: Affine) -> ReelResult<()> {
        let props = self.props();
        props.validate(path)?;
        let world = parent * props.local_affine();
        if !world.is_finite() {
            return Err(ReelError::evaluation(format!(
                "{path}: world transform is not finite ({:?})",
                world.as_coeffs()
            )));
        }
        match self {
            Self::Rect(n) => {
                check_finite(path, "corner_radius", n.corner_radius)?;
                check_finite(path, "blur", n.blur)?;
                if let Some(b) = &n.border {
                    check_finite(path, "border.width", b.width)?;
                }
            }
            Self::Text(n) => {
                check_finite(path, "font_size", n.font_size)?;
                check_finite(path, "letter_spacing", n.letter_spacing)?;
            }
            Self::Image(_) => {}
            Self::Group(g) => {
                for (i, c) in g.children.iter().enumerate() {
                    let child_path = match &g.name {
                        Some(name) => format!("{path}/{name}[{i}]"),
                        None => format!("{path}[{i}]"),
                    };
                    c.validate_at(&child_path, world)?;
                }
            }
        }
        Ok(())
    }
}

fn check_finite(path: &str, name: &str, v: f64) -> ReelResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(ReelError::evaluation(format!("{path}: {name} is {v}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/tree.rs"]
mod tests;
