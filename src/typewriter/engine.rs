use crate::{
    foundation::{
        core::Millis,
        error::TypeloopResult,
        rng::{RandomSource, Rng64},
    },
    schedule::{FrameHandle, Scheduler, TimerHandle, Wake},
};

use super::opts::TypewriterOpts;

/// Where a typewriter is in its cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Disabled or torn down; the display is the full text.
    Idle,
    /// Revealing one character per `type_speed_ms`.
    Typing,
    /// Full text shown, waiting `end_hold_ms`.
    Holding,
    /// Full text shown, waiting `repeat_delay_ms` before the next cycle.
    WaitingToRestart,
}

/// Looping typewriter engine.
///
/// The engine owns at most one pending redraw and at most one pending timer. Every
/// transition cancels both before scheduling anything new, and any wake carrying a
/// handle the engine no longer holds is ignored. Disabling restores the display to the
/// exact target text.
#[derive(Debug)]
pub struct Typewriter<R: RandomSource = Rng64> {
    text: String,
    chars: Vec<char>,
    opts: TypewriterOpts,
    glitch_pool: Vec<char>,
    enabled: bool,
    state: RunState,
    cursor: usize,
    last_commit: Millis,
    display: String,
    glitched: bool,
    frame: Option<FrameHandle>,
    timer: Option<TimerHandle>,
    cycles: u64,
    rng: R,
}

impl Typewriter<Rng64> {
    /// Build a disabled engine with a zero-seeded generator.
    pub fn new(text: impl Into<String>, opts: TypewriterOpts) -> TypeloopResult<Self> {
        Self::with_rng(text, opts, Rng64::new(0))
    }
}

impl<R: RandomSource> Typewriter<R> {
    pub fn with_rng(text: impl Into<String>, opts: TypewriterOpts, rng: R) -> TypeloopResult<Self> {
        opts.validate()?;
        let text = text.into();
        Ok(Self {
            chars: text.chars().collect(),
            glitch_pool: opts.glitch_chars.chars().collect(),
            display: text.clone(),
            cursor: text.chars().count(),
            text,
            opts,
            enabled: false,
            state: RunState::Idle,
            last_commit: Millis::ZERO,
            glitched: false,
            frame: None,
            timer: None,
            cycles: 0,
            rng,
        })
    }

    /// What should be on screen right now.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn opts(&self) -> &TypewriterOpts {
        &self.opts
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Number of characters committed in the current cycle.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the last revealed character is currently a glitch substitute.
    pub fn is_glitched(&self) -> bool {
        self.glitched
    }

    /// Cycles started since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn set_enabled(&mut self, enabled: bool, sched: &mut impl Scheduler) {
        if enabled == self.enabled {
            return;
        }
        self.enabled = enabled;
        if enabled {
            self.start_cycle(sched);
        } else {
            self.stop(sched);
        }
    }

    /// Replace the target text. While enabled this abandons the current cycle.
    pub fn set_text(&mut self, text: impl Into<String>, sched: &mut impl Scheduler) {
        let text = text.into();
        if text == self.text {
            return;
        }
        self.replace_text(text);
        self.restart_or_reset(sched);
    }

    /// Replace the options. While enabled this abandons the current cycle.
    pub fn set_opts(
        &mut self,
        opts: TypewriterOpts,
        sched: &mut impl Scheduler,
    ) -> TypeloopResult<()> {
        opts.validate()?;
        if opts == self.opts {
            return Ok(());
        }
        self.replace_opts(opts);
        self.restart_or_reset(sched);
        Ok(())
    }

    /// Apply a caller's current inputs in one step.
    ///
    /// Meant to be called every time the owning component re-renders. Unchanged inputs
    /// leave a running cycle alone; any change while enabled restarts from an empty
    /// display. Invalid options are rejected before anything changes.
    pub fn update(
        &mut self,
        enabled: bool,
        text: &str,
        opts: &TypewriterOpts,
        sched: &mut impl Scheduler,
    ) -> TypeloopResult<()> {
        opts.validate()?;
        let mut changed = false;
        if text != self.text {
            self.replace_text(text.to_string());
            changed = true;
        }
        if *opts != self.opts {
            self.replace_opts(opts.clone());
            changed = true;
        }

        if !enabled {
            self.enabled = false;
            self.stop(sched);
        } else if !self.enabled || changed {
            self.enabled = true;
            self.start_cycle(sched);
        }
        Ok(())
    }

    /// Stop for good: cancel everything and show the full text.
    pub fn teardown(&mut self, sched: &mut impl Scheduler) {
        self.enabled = false;
        self.stop(sched);
    }

    /// Deliver a fired redraw or timer. Returns `true` if the display changed.
    ///
    /// Wakes for handles this engine does not currently hold are ignored.
    pub fn on_wake(&mut self, wake: Wake, sched: &mut impl Scheduler) -> bool {
        if !self.enabled {
            return false;
        }
        match wake {
            Wake::Frame { handle, now } => {
                if self.frame != Some(handle) || self.state != RunState::Typing {
                    return false;
                }
                self.frame = None;
                self.tick(now, sched)
            }
            Wake::Timer { handle, .. } => {
                if self.timer != Some(handle) {
                    return false;
                }
                self.timer = None;
                match self.state {
                    RunState::Holding => {
                        self.state = RunState::WaitingToRestart;
                        self.timer = Some(sched.set_timeout(self.opts.repeat_delay()));
                        tracing::debug!(cycle = self.cycles, "typewriter waiting to restart");
                        false
                    }
                    RunState::WaitingToRestart => {
                        self.start_cycle(sched);
                        true
                    }
                    RunState::Idle | RunState::Typing => false,
                }
            }
        }
    }

    fn replace_text(&mut self, text: String) {
        self.chars = text.chars().collect();
        self.text = text;
    }

    fn replace_opts(&mut self, opts: TypewriterOpts) {
        self.glitch_pool = opts.glitch_chars.chars().collect();
        self.opts = opts;
    }

    fn restart_or_reset(&mut self, sched: &mut impl Scheduler) {
        if self.enabled {
            self.start_cycle(sched);
        } else {
            self.stop(sched);
        }
    }

    fn cancel_pending(&mut self, sched: &mut impl Scheduler) {
        if let Some(h) = self.frame.take() {
            sched.cancel_frame(h);
        }
        if let Some(h) = self.timer.take() {
            sched.clear_timeout(h);
        }
    }

    fn stop(&mut self, sched: &mut impl Scheduler) {
        self.cancel_pending(sched);
        if self.state != RunState::Idle {
            tracing::debug!(cycle = self.cycles, "typewriter stopped");
        }
        self.state = RunState::Idle;
        self.cursor = self.chars.len();
        self.glitched = false;
        self.display.clone_from(&self.text);
    }

    fn start_cycle(&mut self, sched: &mut impl Scheduler) {
        self.cancel_pending(sched);
        self.cycles += 1;
        self.cursor = 0;
        self.glitched = false;
        self.display.clear();
        self.last_commit = sched.now();
        tracing::debug!(
            cycle = self.cycles,
            len = self.chars.len(),
            at = self.last_commit.0,
            "typewriter cycle started"
        );

        if self.chars.is_empty() {
            self.enter_hold(sched);
            return;
        }
        self.state = RunState::Typing;
        self.frame = Some(sched.request_frame());
    }

    fn enter_hold(&mut self, sched: &mut impl Scheduler) {
        self.cancel_pending(sched);
        self.cursor = self.chars.len();
        self.glitched = false;
        self.display.clone_from(&self.text);
        self.state = RunState::Holding;
        self.timer = Some(sched.set_timeout(self.opts.end_hold()));
        tracing::debug!(cycle = self.cycles, "typewriter holding");
    }

    fn tick(&mut self, now: Millis, sched: &mut impl Scheduler) -> bool {
        if now.since(self.last_commit) < self.opts.type_speed() {
            self.frame = Some(sched.request_frame());
            return false;
        }
        self.last_commit = now;
        self.cursor = (self.cursor + 1).min(self.chars.len());

        if self.cursor == self.chars.len() {
            self.enter_hold(sched);
            return true;
        }

        self.display.clear();
        self.display.extend(&self.chars[..self.cursor]);
        self.glitched = false;
        if self.opts.glitch_chance > 0.0
            && !self.glitch_pool.is_empty()
            && self.rng.next_f64_01() < self.opts.glitch_chance
        {
            let sub = self.glitch_pool[self.rng.next_index(self.glitch_pool.len())];
            self.display.pop();
            self.display.push(sub);
            self.glitched = true;
        }
        tracing::trace!(
            cursor = self.cursor,
            glitched = self.glitched,
            at = now.0,
            "typewriter commit"
        );

        self.frame = Some(sched.request_frame());
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/typewriter/engine.rs"]
mod tests;
