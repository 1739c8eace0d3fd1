//! Named spring tunings and the glass palette used by the built-in scenes.

use reel::{Rgba8, SpringConfig};
use serde::{Deserialize, Serialize};

/// Spring tunings that recur across trailer scenes, written as damping coefficients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpringPreset {
    /// `{damping: 15}`: soft settle with a hint of overshoot.
    Gentle,
    /// `{damping: 12, stiffness: 100}`: quick with a visible bounce.
    Snappy,
    /// `{damping: 8, stiffness: 150}`: lively, several oscillations.
    Bouncy,
    /// `{damping: 20, stiffness: 80}`: slow and weighty, overdamped feel.
    Heavy,
    /// `{damping: 200}`: no overshoot at all.
    Smooth,
    /// `{damping: 18, stiffness: 150}`: fast text reveals.
    Crisp,
}

impl SpringPreset {
    pub const ALL: [SpringPreset; 6] = [
        Self::Gentle,
        Self::Snappy,
        Self::Bouncy,
        Self::Heavy,
        Self::Smooth,
        Self::Crisp,
    ];

    pub fn config(self) -> SpringConfig {
        let (damping, stiffness) = match self {
            Self::Gentle => (15.0, 100.0),
            Self::Snappy => (12.0, 100.0),
            Self::Bouncy => (8.0, 150.0),
            Self::Heavy => (20.0, 80.0),
            Self::Smooth => (200.0, 100.0),
            Self::Crisp => (18.0, 150.0),
        };
        SpringConfig::from_damping(damping, stiffness, 1.0)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Gentle => "gentle",
            Self::Snappy => "snappy",
            Self::Bouncy => "bouncy",
            Self::Heavy => "heavy",
            Self::Smooth => "smooth",
            Self::Crisp => "crisp",
        }
    }
}

/// A spring in scene parameters: either a preset name or a full configuration object.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpringSpec {
    Preset(SpringPreset),
    Custom(SpringConfig),
}

impl SpringSpec {
    pub fn config(&self) -> SpringConfig {
        match self {
            Self::Preset(p) => p.config(),
            Self::Custom(c) => *c,
        }
    }
}

impl From<SpringPreset> for SpringSpec {
    fn from(p: SpringPreset) -> Self {
        Self::Preset(p)
    }
}

/// Gradient-glass palette.
pub mod palette {
    use reel::Rgba8;

    pub const VIOLET: Rgba8 = Rgba8::rgb(0x8b, 0x5c, 0xf6);
    pub const PINK: Rgba8 = Rgba8::rgb(0xec, 0x48, 0x99);
    pub const BLUE: Rgba8 = Rgba8::rgb(0x3b, 0x82, 0xf6);
    pub const EMERALD: Rgba8 = Rgba8::rgb(0x10, 0xb9, 0x81);
    pub const AMBER: Rgba8 = Rgba8::rgb(0xf5, 0x9e, 0x0b);

    /// Deep backgrounds.
    pub const NIGHT: Rgba8 = Rgba8::rgb(0x0a, 0x08, 0x15);
    pub const DUSK: Rgba8 = Rgba8::rgb(0x0f, 0x0a, 0x1a);
    pub const PLUM: Rgba8 = Rgba8::rgb(0x12, 0x0a, 0x20);

    /// Frosted panel fill and edge.
    pub const FROST: Rgba8 = Rgba8::rgba(255, 255, 255, 20);
    pub const FROST_EDGE: Rgba8 = Rgba8::rgba(255, 255, 255, 38);

    pub const ACCENTS: [Rgba8; 5] = [VIOLET, PINK, BLUE, EMERALD, AMBER];
}

/// Accent colour for element `index`, cycling through [`palette::ACCENTS`].
pub fn accent(index: usize) -> Rgba8 {
    palette::ACCENTS[index % palette::ACCENTS.len()]
}
