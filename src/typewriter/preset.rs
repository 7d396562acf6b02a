use super::opts::{DEFAULT_GLITCH_CHARS, TypewriterOpts};

/// Named option sets for the places a typewriter is typically used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// The plain defaults.
    Standard,
    /// A slower, less noisy loop for a closing line.
    Footer,
    /// Page headings: no glitching, readability first.
    Heading,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Self::Standard, Self::Footer, Self::Heading];

    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Footer => "footer",
            Self::Heading => "heading",
        }
    }

    pub fn opts(self) -> TypewriterOpts {
        match self {
            Self::Standard => TypewriterOpts::default(),
            Self::Footer => TypewriterOpts {
                type_speed_ms: 42,
                end_hold_ms: 1600,
                repeat_delay_ms: 3200,
                glitch_chance: 0.08,
                glitch_chars: DEFAULT_GLITCH_CHARS.to_string(),
            },
            Self::Heading => TypewriterOpts {
                type_speed_ms: 46,
                end_hold_ms: 1200,
                repeat_delay_ms: 2600,
                glitch_chance: 0.0,
                ..TypewriterOpts::default()
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/typewriter/preset.rs"]
mod tests;
