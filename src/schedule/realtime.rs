use std::time::Instant;

use crate::foundation::core::Millis;

use super::{FrameHandle, Scheduler, TimerHandle, Wake, queue::WakeQueue};

/// Wall-clock host for driving engines from a plain thread (e.g. a terminal).
///
/// Time is measured from construction. Redraws fire `frame_interval` after the request.
#[derive(Debug)]
pub struct RealtimeClock {
    origin: Instant,
    frame_interval: Millis,
    queue: WakeQueue,
}

impl RealtimeClock {
    pub fn new(frame_interval: Millis) -> Self {
        Self {
            origin: Instant::now(),
            frame_interval: frame_interval.max(Millis(1)),
            queue: WakeQueue::default(),
        }
    }

    /// Block until the earliest pending wake fires, or until `deadline` passes.
    ///
    /// Returns `None` when nothing is pending or the next wake is due after `deadline`.
    pub fn wait_until(&mut self, deadline: Millis) -> Option<Wake> {
        let due = self.queue.peek_due()?;
        let target = due.min(deadline);
        let now = self.now();
        if target > now {
            std::thread::sleep(target.since(now).as_duration());
        }
        if due > deadline {
            return None;
        }
        let origin = self.origin;
        self.queue.pop_due(due, |due| {
            Millis::from_duration_floor(origin.elapsed()).max(due)
        })
    }
}

impl Default for RealtimeClock {
    fn default() -> Self {
        Self::new(Millis(16))
    }
}

impl Scheduler for RealtimeClock {
    fn now(&self) -> Millis {
        Millis::from_duration_floor(self.origin.elapsed())
    }

    fn request_frame(&mut self) -> FrameHandle {
        let due = self.now().saturating_add(self.frame_interval);
        self.queue.push_frame(due)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.queue.cancel_frame(handle);
    }

    fn set_timeout(&mut self, delay: Millis) -> TimerHandle {
        let due = self.now().saturating_add(delay);
        self.queue.push_timer(due)
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.queue.cancel_timer(handle);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/realtime.rs"]
mod tests;
