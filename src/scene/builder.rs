use crate::{
    foundation::error::{TypeloopError, TypeloopResult},
    typewriter::{Preset, TypewriterOpts},
};

use super::model::{LineSpec, Scene};

/// Fluent construction of a [`Scene`], validated on [`SceneBuilder::build`].
pub struct SceneBuilder {
    seed: u64,
    frame_interval_ms: u64,
    lines: Vec<LineSpec>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            seed: 0,
            frame_interval_ms: 16,
            lines: Vec::new(),
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn frame_interval_ms(mut self, ms: u64) -> Self {
        self.frame_interval_ms = ms;
        self
    }

    fn push(mut self, line: LineSpec) -> TypeloopResult<Self> {
        if self.lines.iter().any(|l| l.name == line.name) {
            return Err(TypeloopError::validation(format!(
                "duplicate line name '{}'",
                line.name
            )));
        }
        self.lines.push(line);
        Ok(self)
    }

    pub fn line(
        self,
        name: impl Into<String>,
        text: impl Into<String>,
        opts: TypewriterOpts,
    ) -> TypeloopResult<Self> {
        self.push(LineSpec {
            name: name.into(),
            text: text.into(),
            enabled: true,
            preset: None,
            opts: Some(opts),
        })
    }

    pub fn preset_line(
        self,
        name: impl Into<String>,
        text: impl Into<String>,
        preset: Preset,
    ) -> TypeloopResult<Self> {
        self.push(LineSpec {
            name: name.into(),
            text: text.into(),
            enabled: true,
            preset: Some(preset),
            opts: None,
        })
    }

    /// Add a line that starts disabled (shown as plain text until enabled).
    pub fn disabled_line(
        self,
        name: impl Into<String>,
        text: impl Into<String>,
        preset: Preset,
    ) -> TypeloopResult<Self> {
        self.push(LineSpec {
            name: name.into(),
            text: text.into(),
            enabled: false,
            preset: Some(preset),
            opts: None,
        })
    }

    pub fn build(self) -> TypeloopResult<Scene> {
        let scene = Scene {
            seed: self.seed,
            frame_interval_ms: self.frame_interval_ms,
            lines: self.lines,
        };
        scene.validate()?;
        Ok(scene)
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/builder.rs"]
mod tests;
