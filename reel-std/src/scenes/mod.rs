//! Built-in trailer scenes. Each takes a serde parameter struct whose defaults reproduce the
//! stock glass trailer, so `{}` is always a valid parameter object.

pub mod glass;

mod cta;
mod curriculum;
mod hook;
mod stats;

pub use cta::{CallToAction, CtaParams};
pub use curriculum::{CurriculumList, CurriculumParams, ModuleItem};
pub use hook::{GlassHook, HookLine, HookParams};
pub use stats::{StatItem, StatsCounter, StatsParams};
