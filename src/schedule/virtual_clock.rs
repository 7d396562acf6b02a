use crate::foundation::{
    core::Millis,
    error::{TypeloopError, TypeloopResult},
};

use super::{FrameHandle, Scheduler, TimerHandle, Wake, queue::WakeQueue};

/// Deterministic simulated host.
///
/// Redraws fire on the next multiple of `frame_interval` strictly after the request,
/// which models a display refreshing at a fixed rate. Timers fire exactly `delay` after
/// the request. Time only moves when the caller pops a wake or calls
/// [`VirtualClock::advance_to`].
#[derive(Debug)]
pub struct VirtualClock {
    now: Millis,
    frame_interval: Millis,
    queue: WakeQueue,
}

impl VirtualClock {
    pub const DEFAULT_FRAME_INTERVAL: Millis = Millis(16);

    pub fn new(frame_interval: Millis) -> TypeloopResult<Self> {
        if frame_interval == Millis::ZERO {
            return Err(TypeloopError::validation(
                "virtual clock frame_interval must be > 0",
            ));
        }
        Ok(Self {
            now: Millis::ZERO,
            frame_interval,
            queue: WakeQueue::default(),
        })
    }

    pub fn frame_interval(&self) -> Millis {
        self.frame_interval
    }

    /// Due time of the earliest pending wake.
    pub fn next_due(&self) -> Option<Millis> {
        self.queue.peek_due()
    }

    /// Number of pending requests.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Fire the earliest wake due at or before `until`, moving time forward to it.
    pub fn pop_due(&mut self, until: Millis) -> Option<Wake> {
        let wake = self.queue.pop_due(until, |due| due)?;
        self.now = self.now.max(wake.now());
        Some(wake)
    }

    /// Move time forward without firing anything. Time never moves backwards.
    pub fn advance_to(&mut self, t: Millis) {
        self.now = self.now.max(t);
    }
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self {
            now: Millis::ZERO,
            frame_interval: Self::DEFAULT_FRAME_INTERVAL,
            queue: WakeQueue::default(),
        }
    }
}

impl Scheduler for VirtualClock {
    fn now(&self) -> Millis {
        self.now
    }

    fn request_frame(&mut self) -> FrameHandle {
        let due = self.now.next_multiple_of(self.frame_interval);
        self.queue.push_frame(due)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.queue.cancel_frame(handle);
    }

    fn set_timeout(&mut self, delay: Millis) -> TimerHandle {
        self.queue.push_timer(self.now.saturating_add(delay))
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.queue.cancel_timer(handle);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/virtual_clock.rs"]
mod tests;
