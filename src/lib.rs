//! typeloop is a looping typewriter text-reveal engine.
//!
//! A [`Typewriter`] reveals a target string one character at a time, occasionally shows a
//! random glitch character in place of the one being typed, holds the finished text,
//! waits, and starts over for as long as it is enabled. Disabling it restores the plain
//! text immediately.
//!
//! # Driving model
//!
//! The engine never sleeps. It asks a host [`Scheduler`] for redraws and delayed
//! callbacks and is handed the resulting [`Wake`]s:
//!
//! 1. **Schedule**: the engine requests a redraw (while typing) or a timer (hold, gap).
//! 2. **Fire**: the host pops the due wake ([`VirtualClock::pop_due`] or
//!    [`RealtimeClock::wait_until`]).
//! 3. **Deliver**: the caller passes it to [`Typewriter::on_wake`] (or [`Stage::dispatch`]).
//!
//! Each engine holds at most one redraw handle and one timer handle. Wakes for handles it
//! no longer holds are ignored, so nothing fires into a disabled engine.
//!
//! # Beyond a single engine
//!
//! - [`Scene`] / [`Stage`]: several named lines on one host, each with its own state.
//! - [`record`]: a deterministic [`Trace`] of what a scene shows over simulated time.
#![forbid(unsafe_code)]

mod foundation;
pub mod scene;
pub mod schedule;
pub mod trace;
pub mod typewriter;

pub use foundation::core::Millis;
pub use foundation::error::{TypeloopError, TypeloopResult};
pub use foundation::rng::{RandomSource, Rng64};
pub use scene::{LineSpec, Scene, SceneBuilder, Stage};
pub use schedule::{FrameHandle, RealtimeClock, Scheduler, TimerHandle, VirtualClock, Wake};
pub use trace::{Trace, TraceFrame, record};
pub use typewriter::{DEFAULT_GLITCH_CHARS, Preset, RunState, Typewriter, TypewriterOpts};
