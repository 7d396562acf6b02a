use crate::{
    foundation::{core::Millis, error::TypeloopResult},
    scene::{Scene, Stage},
    schedule::VirtualClock,
    typewriter::RunState,
};

/// One observed change of a line.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TraceFrame {
    pub at: Millis,
    pub line: String,
    pub display: String,
    pub state: RunState,
}

/// Every display/state change of every line, in time order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Trace {
    pub duration: Millis,
    pub frames: Vec<TraceFrame>,
}

impl Trace {
    pub fn frames_for<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a TraceFrame> + 'a {
        self.frames.iter().filter(move |f| f.line == line)
    }

    /// How many times `line` finished a reveal (entered the hold).
    pub fn cycles_completed(&self, line: &str) -> usize {
        self.frames_for(line)
            .filter(|f| f.state == RunState::Holding)
            .count()
    }
}

/// Run `scene` on a [`VirtualClock`] for `duration` and record every change.
///
/// The first frame of each line is its state right after start, at time zero. The same
/// scene (including its seed) always yields the same trace.
#[tracing::instrument(skip(scene), fields(lines = scene.lines.len()))]
pub fn record(scene: &Scene, duration: Millis) -> TypeloopResult<Trace> {
    let clock = VirtualClock::new(Millis(scene.frame_interval_ms))?;
    let mut stage = Stage::from_scene(scene, clock)?;
    stage.start();

    let mut last: Vec<(String, RunState)> = Vec::with_capacity(scene.lines.len());
    let mut frames = Vec::new();
    for (name, engine) in stage.lines() {
        last.push((engine.display().to_string(), engine.state()));
        frames.push(TraceFrame {
            at: Millis::ZERO,
            line: name.to_string(),
            display: engine.display().to_string(),
            state: engine.state(),
        });
    }

    let mut wakes = 0u64;
    while let Some(wake) = stage.scheduler_mut().pop_due(duration) {
        wakes += 1;
        stage.dispatch(wake);
        for ((name, engine), prev) in stage.lines().zip(last.iter_mut()) {
            if engine.state() == prev.1 && engine.display() == prev.0 {
                continue;
            }
            prev.0.clear();
            prev.0.push_str(engine.display());
            prev.1 = engine.state();
            frames.push(TraceFrame {
                at: wake.now(),
                line: name.to_string(),
                display: engine.display().to_string(),
                state: engine.state(),
            });
        }
    }
    stage.teardown();
    tracing::debug!(wakes, frames = frames.len(), "trace recorded");

    Ok(Trace { duration, frames })
}

#[cfg(test)]
#[path = "../../tests/unit/trace/record.rs"]
mod tests;
