//! Deterministic recordings of what a scene displays over simulated time.

pub mod record;

pub use record::{Trace, TraceFrame, record};
