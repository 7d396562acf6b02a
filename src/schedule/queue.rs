use std::collections::{BTreeMap, HashMap};

use crate::foundation::core::Millis;

use super::{FrameHandle, TimerHandle, Wake};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Frame,
    Timer,
}

/// Pending requests ordered by due time, then by request order.
///
/// Frame and timer ids come from one counter, so ids also order same-time wakes.
#[derive(Debug, Default)]
pub(crate) struct WakeQueue {
    next_id: u64,
    pending: BTreeMap<(Millis, u64), Kind>,
    due_by_id: HashMap<u64, Millis>,
}

impl WakeQueue {
    fn push(&mut self, due: Millis, kind: Kind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.insert((due, id), kind);
        self.due_by_id.insert(id, due);
        id
    }

    fn cancel(&mut self, id: u64, kind: Kind) {
        let Some(&due) = self.due_by_id.get(&id) else {
            return;
        };
        if self.pending.get(&(due, id)) == Some(&kind) {
            self.pending.remove(&(due, id));
            self.due_by_id.remove(&id);
        }
    }

    pub(crate) fn push_frame(&mut self, due: Millis) -> FrameHandle {
        FrameHandle(self.push(due, Kind::Frame))
    }

    pub(crate) fn push_timer(&mut self, due: Millis) -> TimerHandle {
        TimerHandle(self.push(due, Kind::Timer))
    }

    pub(crate) fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancel(handle.0, Kind::Frame);
    }

    pub(crate) fn cancel_timer(&mut self, handle: TimerHandle) {
        self.cancel(handle.0, Kind::Timer);
    }

    pub(crate) fn peek_due(&self) -> Option<Millis> {
        self.pending.keys().next().map(|&(due, _)| due)
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    /// Remove the earliest request if it is due at or before `until`.
    ///
    /// The wake is stamped with `fire_at(due)`, letting realtime hosts report the actual
    /// firing time.
    pub(crate) fn pop_due(
        &mut self,
        until: Millis,
        fire_at: impl FnOnce(Millis) -> Millis,
    ) -> Option<Wake> {
        let (&(due, id), _) = self.pending.first_key_value()?;
        if due > until {
            return None;
        }
        let kind = self.pending.remove(&(due, id))?;
        self.due_by_id.remove(&id);
        let now = fire_at(due);
        Some(match kind {
            Kind::Frame => Wake::Frame {
                handle: FrameHandle(id),
                now,
            },
            Kind::Timer => Wake::Timer {
                handle: TimerHandle(id),
                now,
            },
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/queue.rs"]
mod tests;
