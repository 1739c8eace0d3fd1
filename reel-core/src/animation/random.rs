//! Key-addressed pseudo-randomness for reproducible scattering.
//!
//! The mapping from key to value is fixed and portable:
//!
//! 1. `h = FNV-1a-64(key bytes)` (offset basis `0xcbf29ce484222325`, prime `0x100000001b3`)
//! 2. one SplitMix64 step seeded with `h`
//! 3. the top 53 bits scaled by `2^-53`, giving a value in `[0, 1)`
//!
//! Any implementation following those steps reproduces the same bits, on any platform and in
//! any process.

use crate::foundation::core::{Canvas, Vec2};
use crate::foundation::math::{FNV_OFFSET_BASIS, SplitMix64, fnv1a64};

/// Stable value in `[0, 1)` for `key`.
pub fn random(key: &str) -> f64 {
    random_seeded(fnv1a64(FNV_OFFSET_BASIS, key.as_bytes()))
}

/// Stable value in `[0, 1)` for a numeric seed (skips the string hash).
pub fn random_seeded(seed: u64) -> f64 {
    SplitMix64::new(seed).next_unit()
}

/// `random("{name}-{index}")`, the conventional key shape for per-element values.
pub fn random_indexed(name: &str, index: u64) -> f64 {
    random(&format!("{name}-{index}"))
}

/// Stable value in `[lo, hi)` for `key`.
pub fn random_range(key: &str, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * random(key)
}

/// Namespaced view over [`random`] so two scenes scattering "particle" 7 do not collide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    namespace: String,
}

impl Field {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Key used for `(name, index)`: `"{namespace}-{name}-{index}"`, or `"{name}-{index}"`
    /// for the empty namespace.
    pub fn key(&self, name: &str, index: u64) -> String {
        if self.namespace.is_empty() {
            format!("{name}-{index}")
        } else {
            format!("{}-{name}-{index}", self.namespace)
        }
    }

    pub fn value(&self, name: &str, index: u64) -> f64 {
        random(&self.key(name, index))
    }

    pub fn range(&self, name: &str, index: u64, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.value(name, index)
    }

    /// Uniform point on the canvas for element `index`.
    pub fn scatter(&self, index: u64, canvas: Canvas) -> Vec2 {
        Vec2::new(
            self.value("x", index) * f64::from(canvas.width),
            self.value("y", index) * f64::from(canvas.height),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/random.rs"]
mod tests;
