//! The looping typewriter: options, presets and the engine itself.

pub mod engine;
pub mod opts;
pub mod preset;

pub use engine::{RunState, Typewriter};
pub use opts::{DEFAULT_GLITCH_CHARS, TypewriterOpts};
pub use preset::Preset;
