use std::{collections::BTreeSet, path::Path};

use crate::{
    foundation::error::{TypeloopError, TypeloopResult},
    typewriter::{Preset, TypewriterOpts},
};

fn default_frame_interval_ms() -> u64 {
    16
}

fn default_enabled() -> bool {
    true
}

/// A set of independent typewriter lines sharing one host, like the call sites of a page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Seed for glitch draws; each line derives its own stream from it.
    #[serde(default)]
    pub seed: u64,
    /// Redraw interval of the simulated display.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    pub lines: Vec<LineSpec>,
}

/// One typewriter in a [`Scene`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineSpec {
    pub name: String,
    pub text: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,
    /// Explicit options; take precedence over `preset`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opts: Option<TypewriterOpts>,
}

impl LineSpec {
    /// Options this line runs with: explicit opts, else the preset, else defaults.
    pub fn resolved_opts(&self) -> TypewriterOpts {
        match (&self.opts, self.preset) {
            (Some(opts), _) => opts.clone(),
            (None, Some(preset)) => preset.opts(),
            (None, None) => TypewriterOpts::default(),
        }
    }
}

impl Scene {
    pub fn validate(&self) -> TypeloopResult<()> {
        if self.frame_interval_ms == 0 {
            return Err(TypeloopError::validation("frame_interval_ms must be > 0"));
        }
        if self.lines.is_empty() {
            return Err(TypeloopError::validation("scene must have at least one line"));
        }
        let mut names = BTreeSet::new();
        for line in &self.lines {
            if line.name.trim().is_empty() {
                return Err(TypeloopError::validation("line name must be non-empty"));
            }
            if !names.insert(line.name.as_str()) {
                return Err(TypeloopError::validation(format!(
                    "duplicate line name '{}'",
                    line.name
                )));
            }
            line.resolved_opts().validate().map_err(|e| {
                TypeloopError::validation(format!("line '{}': {e}", line.name))
            })?;
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> TypeloopResult<Self> {
        let scene: Self =
            serde_json::from_str(s).map_err(|e| TypeloopError::serde(e.to_string()))?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn from_path(path: impl AsRef<Path>) -> TypeloopResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| TypeloopError::io(format!("read '{}': {e}", path.display())))?;
        Self::from_json_str(&s)
    }

    pub fn line(&self, name: &str) -> Option<&LineSpec> {
        self.lines.iter().find(|l| l.name == name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
