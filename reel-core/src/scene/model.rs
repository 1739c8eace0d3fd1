use crate::{
    foundation::core::{Canvas, Fps, Rgba8},
    foundation::error::{ReelError, ReelResult},
    scene::timeline::{Scene, Sequence, Timeline},
};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

pub const TIMELINE_VERSION: &str = "1";

/// JSON-facing description of a timeline.
///
/// Scenes are referenced by registry name and configured through free-form `params` objects,
/// which each scene factory deserializes into its own parameter struct.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineDef {
    pub version: String,
    pub fps: Fps,
    pub canvas: Canvas,
    pub duration: u64,
    #[serde(default)]
    pub background: Option<Rgba8>,
    pub sequences: Vec<SequenceDef>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SequenceDef {
    pub name: String,
    pub from: u64,
    pub duration: u64,
    pub scene: String,
    #[serde(default = "empty_params")]
    pub params: serde_json::Value,
}

fn empty_params() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl TimelineDef {
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ReelError::validation(format!("parse timeline JSON: {e}")))
    }

    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| ReelError::validation(format!("parse timeline JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open timeline JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn to_json_pretty(&self) -> ReelResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ReelError::serde(e.to_string()))
    }

    /// Structural checks that need no registry.
    pub fn validate(&self) -> ReelResult<()> {
        if self.version != TIMELINE_VERSION {
            return Err(ReelError::validation(format!(
                "unsupported timeline version '{}', expected '{TIMELINE_VERSION}'",
                self.version
            )));
        }
        self.fps.validate()?;
        if self.duration == 0 {
            return Err(ReelError::validation("timeline duration must be > 0"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        let mut seen = std::collections::BTreeSet::new();
        for s in &self.sequences {
            if s.name.trim().is_empty() {
                return Err(ReelError::validation("sequence name must be non-empty"));
            }
            if !seen.insert(s.name.as_str()) {
                return Err(ReelError::validation(format!(
                    "duplicate sequence name '{}'",
                    s.name
                )));
            }
            if s.duration == 0 {
                return Err(ReelError::validation(format!(
                    "sequence '{}' has zero duration",
                    s.name
                )));
            }
            if s.from.checked_add(s.duration).is_none_or(|end| end > self.duration) {
                return Err(ReelError::validation(format!(
                    "sequence '{}' ends after timeline duration {}",
                    s.name, self.duration
                )));
            }
            if !s.params.is_object() {
                return Err(ReelError::validation(format!(
                    "sequence '{}' params must be a JSON object",
                    s.name
                )));
            }
        }
        Ok(())
    }

    /// Validate and resolve every scene through `registry`.
    pub fn build(&self, registry: &SceneRegistry) -> ReelResult<Timeline> {
        self.validate()?;
        let mut timeline = Timeline::new(self.fps, self.canvas, self.duration)?;
        timeline.background = self.background;
        for s in &self.sequences {
            let scene = registry.instantiate(&s.scene, &s.params).map_err(|e| {
                ReelError::validation(format!("sequence '{}' (scene '{}'): {e}", s.name, s.scene))
            })?;
            timeline.push(Sequence {
                name: s.name.clone(),
                from: s.from,
                duration: s.duration,
                scene,
            })?;
        }
        Ok(timeline)
    }
}

pub type SceneFactory =
    Arc<dyn Fn(&serde_json::Value) -> ReelResult<Arc<dyn Scene>> + Send + Sync>;

/// Named scene constructors used to resolve [`TimelineDef`] sequences.
#[derive(Clone, Default)]
pub struct SceneRegistry {
    factories: BTreeMap<String, SceneFactory>,
}

impl fmt::Debug for SceneRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&serde_json::Value) -> ReelResult<Arc<dyn Scene>> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
        self
    }

    /// Register a scene whose parameters deserialize into `P` (missing fields take defaults).
    pub fn register_params<P, S, F>(&mut self, name: impl Into<String>, build: F) -> &mut Self
    where
        P: serde::de::DeserializeOwned,
        S: Scene + 'static,
        F: Fn(P) -> S + Send + Sync + 'static,
    {
        self.register(name, move |params: &serde_json::Value| {
            let p: P = serde_json::from_value(params.clone())
                .map_err(|e| ReelError::validation(format!("invalid params: {e}")))?;
            Ok(Arc::new(build(p)) as Arc<dyn Scene>)
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.factories.keys().map(String::as_str)
    }

    pub fn instantiate(
        &self,
        name: &str,
        params: &serde_json::Value,
    ) -> ReelResult<Arc<dyn Scene>> {
        let factory = self.factories.get(name).ok_or_else(|| {
            let known: Vec<&str> = self.names().collect();
            ReelError::validation(format!(
                "unknown scene '{name}' (known: {})",
                known.join(", ")
            ))
        })?;
        factory(params)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
