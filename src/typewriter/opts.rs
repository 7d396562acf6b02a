use std::path::Path;

use crate::foundation::{
    core::Millis,
    error::{TypeloopError, TypeloopResult},
};

/// Glitch characters used when none are configured.
pub const DEFAULT_GLITCH_CHARS: &str = "01<>/\\[]{}—_+*#@!?";

/// Timing and randomization parameters of a typewriter.
///
/// Missing JSON fields fall back to [`TypewriterOpts::default`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TypewriterOpts {
    /// Minimum time between two revealed characters.
    pub type_speed_ms: u64,
    /// How long the full text stays up after the reveal.
    pub end_hold_ms: u64,
    /// Gap after the hold before the next cycle starts.
    pub repeat_delay_ms: u64,
    /// Probability in `[0, 1]` that a revealed character is shown glitched.
    pub glitch_chance: f64,
    /// Pool of glitch characters, drawn uniformly.
    pub glitch_chars: String,
}

impl Default for TypewriterOpts {
    fn default() -> Self {
        Self {
            type_speed_ms: 40,
            end_hold_ms: 1400,
            repeat_delay_ms: 2500,
            glitch_chance: 0.1,
            glitch_chars: DEFAULT_GLITCH_CHARS.to_string(),
        }
    }
}

impl TypewriterOpts {
    pub fn validate(&self) -> TypeloopResult<()> {
        if !self.glitch_chance.is_finite() || !(0.0..=1.0).contains(&self.glitch_chance) {
            return Err(TypeloopError::validation(
                "glitchChance must be finite and within [0, 1]",
            ));
        }
        if self.glitch_chance > 0.0 && self.glitch_chars.is_empty() {
            return Err(TypeloopError::validation(
                "glitchChars must be non-empty when glitchChance > 0",
            ));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> TypeloopResult<Self> {
        let opts: Self = serde_json::from_str(s).map_err(|e| TypeloopError::serde(e.to_string()))?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn from_path(path: impl AsRef<Path>) -> TypeloopResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| TypeloopError::io(format!("read '{}': {e}", path.display())))?;
        Self::from_json_str(&s)
    }

    pub fn type_speed(&self) -> Millis {
        Millis(self.type_speed_ms)
    }

    pub fn end_hold(&self) -> Millis {
        Millis(self.end_hold_ms)
    }

    pub fn repeat_delay(&self) -> Millis {
        Millis(self.repeat_delay_ms)
    }

    /// Length of one full cycle for `text_len` characters, ignoring frame quantization.
    pub fn nominal_cycle(&self, text_len: usize) -> Millis {
        Millis(
            self.type_speed_ms
                .saturating_mul(text_len as u64)
                .saturating_add(self.end_hold_ms)
                .saturating_add(self.repeat_delay_ms),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/typewriter/opts.rs"]
mod tests;
