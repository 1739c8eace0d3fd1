use reel::SceneRegistry;

use crate::scenes::{CallToAction, CurriculumList, GlassHook, StatsCounter};

pub const GLASS_HOOK: &str = "glass-hook";
pub const CURRICULUM_LIST: &str = "curriculum-list";
pub const STATS_COUNTER: &str = "stats-counter";
pub const CALL_TO_ACTION: &str = "call-to-action";

/// Registry holding every built-in scene under its kebab-case name.
pub fn registry() -> SceneRegistry {
    let mut r = SceneRegistry::new();
    register_builtins(&mut r);
    r
}

/// Add the built-in scenes to an existing registry, replacing same-named entries.
pub fn register_builtins(r: &mut SceneRegistry) -> &mut SceneRegistry {
    r.register_params(GLASS_HOOK, GlassHook::new)
        .register_params(CURRICULUM_LIST, CurriculumList::new)
        .register_params(STATS_COUNTER, StatsCounter::new)
        .register_params(CALL_TO_ACTION, CallToAction::new)
}
