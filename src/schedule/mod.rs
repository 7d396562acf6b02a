//! Host scheduling facility.
//!
//! Engines never sleep or spawn. They ask a [`Scheduler`] for a redraw or a delayed
//! callback, keep the returned handle, and later receive a [`Wake`] carrying that handle.
//! A wake whose handle the engine no longer holds is stale and must be ignored.
//!
//! Two hosts are provided:
//!
//! - [`VirtualClock`]: simulated time, fully deterministic, driven by the caller.
//! - [`RealtimeClock`]: wall-clock time, blocks the calling thread until the next wake.

use crate::foundation::core::Millis;

mod queue;
pub mod realtime;
pub mod virtual_clock;

pub use realtime::RealtimeClock;
pub use virtual_clock::VirtualClock;

/// Handle to a pending redraw request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub(crate) u64);

/// Handle to a pending delayed callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub(crate) u64);

/// A fired request, delivered back to whoever holds the handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wake {
    /// A redraw fired at `now`.
    Frame { handle: FrameHandle, now: Millis },
    /// A delayed callback fired at `now`.
    Timer { handle: TimerHandle, now: Millis },
}

impl Wake {
    pub fn now(&self) -> Millis {
        match *self {
            Self::Frame { now, .. } | Self::Timer { now, .. } => now,
        }
    }
}

/// Redraw and delayed-callback facility an engine schedules itself on.
///
/// Contract: every handle is unique for the lifetime of the scheduler, each request
/// fires at most once, and a cancelled request never fires.
pub trait Scheduler {
    /// Current host time.
    fn now(&self) -> Millis;

    /// Request one redraw callback.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a pending redraw. Cancelling a fired or unknown handle is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Request one callback after `delay`.
    fn set_timeout(&mut self, delay: Millis) -> TimerHandle;

    /// Cancel a pending delayed callback. Cancelling a fired or unknown handle is a no-op.
    fn clear_timeout(&mut self, handle: TimerHandle);
}
