use crate::{
    foundation::{
        error::{TypeloopError, TypeloopResult},
        rng::Rng64,
    },
    schedule::{Scheduler, Wake},
    typewriter::Typewriter,
};

use super::model::Scene;

struct StageLine {
    name: String,
    wanted: bool,
    engine: Typewriter<Rng64>,
}

/// Independent typewriters driven by one host scheduler.
///
/// Each line owns its engine, handles and random stream; nothing is shared except the
/// host. Wakes are offered to every engine and only the handle's owner reacts.
pub struct Stage<S: Scheduler> {
    sched: S,
    lines: Vec<StageLine>,
    reduced_motion: bool,
}

impl<S: Scheduler> Stage<S> {
    /// Build engines for every line. Nothing runs until [`Stage::start`].
    #[tracing::instrument(skip(scene, sched), fields(lines = scene.lines.len()))]
    pub fn from_scene(scene: &Scene, sched: S) -> TypeloopResult<Self> {
        scene.validate()?;
        let lines = scene
            .lines
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let rng = Rng64::for_stream(scene.seed, i as u64);
                Ok(StageLine {
                    name: spec.name.clone(),
                    wanted: spec.enabled,
                    engine: Typewriter::with_rng(spec.text.clone(), spec.resolved_opts(), rng)?,
                })
            })
            .collect::<TypeloopResult<Vec<_>>>()?;
        Ok(Self {
            sched,
            lines,
            reduced_motion: false,
        })
    }

    /// Enable every line the scene wants running.
    pub fn start(&mut self) {
        self.apply_enabled();
    }

    /// Offer a fired wake to every engine. Returns `true` if any display changed.
    pub fn dispatch(&mut self, wake: Wake) -> bool {
        let Self { sched, lines, .. } = self;
        let mut changed = false;
        for line in lines.iter_mut() {
            changed |= line.engine.on_wake(wake, &mut *sched);
        }
        changed
    }

    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> TypeloopResult<()> {
        let reduced = self.reduced_motion;
        let Self { sched, lines, .. } = self;
        let line = lines
            .iter_mut()
            .find(|l| l.name == name)
            .ok_or_else(|| TypeloopError::validation(format!("unknown line '{name}'")))?;
        line.wanted = enabled;
        line.engine.set_enabled(enabled && !reduced, sched);
        Ok(())
    }

    /// While set, every line shows its plain text. Clearing it restores each line's own flag.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if reduced == self.reduced_motion {
            return;
        }
        tracing::info!(reduced, "reduced motion changed");
        self.reduced_motion = reduced;
        self.apply_enabled();
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Current `(name, display)` of every line, in scene order.
    pub fn displays(&self) -> Vec<(&str, &str)> {
        self.lines
            .iter()
            .map(|l| (l.name.as_str(), l.engine.display()))
            .collect()
    }

    pub fn line(&self, name: &str) -> Option<&Typewriter<Rng64>> {
        self.lines
            .iter()
            .find(|l| l.name == name)
            .map(|l| &l.engine)
    }

    pub fn lines(&self) -> impl Iterator<Item = (&str, &Typewriter<Rng64>)> {
        self.lines.iter().map(|l| (l.name.as_str(), &l.engine))
    }

    pub fn scheduler(&self) -> &S {
        &self.sched
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.sched
    }

    /// Tear every engine down; nothing stays scheduled afterwards.
    pub fn teardown(&mut self) {
        let Self { sched, lines, .. } = self;
        for line in lines.iter_mut() {
            line.engine.teardown(&mut *sched);
        }
    }

    fn apply_enabled(&mut self) {
        let reduced = self.reduced_motion;
        let Self { sched, lines, .. } = self;
        for line in lines.iter_mut() {
            line.engine.set_enabled(line.wanted && !reduced, &mut *sched);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/stage.rs"]
mod tests;
