use super::*;
use crate::{
    foundation::core::Millis,
    scene::SceneBuilder,
    schedule::VirtualClock,
    typewriter::{Preset, RunState, TypewriterOpts},
};

fn fast(glitch: f64) -> TypewriterOpts {
    TypewriterOpts {
        type_speed_ms: 10,
        end_hold_ms: 50,
        repeat_delay_ms: 50,
        glitch_chance: glitch,
        ..TypewriterOpts::default()
    }
}

fn stage() -> Stage<VirtualClock> {
    let scene = SceneBuilder::new()
        .seed(11)
        .line("hero", "Initiate Contact", fast(0.0))
        .unwrap()
        .line("footer", "Send a signal", fast(0.5))
        .unwrap()
        .disabled_line("about", "About me", Preset::Heading)
        .unwrap()
        .build()
        .unwrap();
    Stage::from_scene(&scene, VirtualClock::new(Millis(1)).unwrap()).unwrap()
}

fn drain(stage: &mut Stage<VirtualClock>, until: Millis) {
    while let Some(wake) = stage.scheduler_mut().pop_due(until) {
        stage.dispatch(wake);
    }
}

#[test]
fn nothing_runs_before_start() {
    let stage = stage();
    assert_eq!(
        stage.displays(),
        vec![
            ("hero", "Initiate Contact"),
            ("footer", "Send a signal"),
            ("about", "About me")
        ]
    );
    assert_eq!(stage.scheduler().pending(), 0);
}

#[test]
fn start_only_enables_wanted_lines() {
    let mut stage = stage();
    stage.start();
    assert_eq!(stage.line("hero").unwrap().state(), RunState::Typing);
    assert_eq!(stage.line("footer").unwrap().state(), RunState::Typing);
    assert_eq!(stage.line("about").unwrap().state(), RunState::Idle);
    assert_eq!(stage.line("about").unwrap().display(), "About me");
}

#[test]
fn lines_progress_independently() {
    let mut stage = stage();
    stage.start();
    drain(&mut stage, Millis(30));
    assert_eq!(stage.line("hero").unwrap().display(), "Ini");
    assert_eq!(stage.line("footer").unwrap().cursor(), 3);

    stage.set_enabled("footer", false).unwrap();
    assert_eq!(stage.line("footer").unwrap().display(), "Send a signal");
    drain(&mut stage, Millis(40));
    assert_eq!(stage.line("hero").unwrap().display(), "Init");
}

#[test]
fn reduced_motion_disables_everything_and_restores_flags() {
    let mut stage = stage();
    stage.start();
    drain(&mut stage, Millis(25));

    stage.set_reduced_motion(true);
    assert!(stage.reduced_motion());
    for (name, engine) in stage.lines() {
        assert_eq!(engine.state(), RunState::Idle, "{name}");
        assert_eq!(engine.display(), engine.text());
    }
    assert_eq!(stage.scheduler().pending(), 0);

    // Enabling a line while reduced motion is on only records the wish.
    stage.set_enabled("about", true).unwrap();
    assert_eq!(stage.line("about").unwrap().state(), RunState::Idle);

    stage.set_reduced_motion(false);
    assert_eq!(stage.line("hero").unwrap().display(), "");
    assert_eq!(stage.line("about").unwrap().state(), RunState::Typing);
}

#[test]
fn unknown_line_is_an_error() {
    let mut stage = stage();
    assert!(stage.set_enabled("nope", true).is_err());
}

#[test]
fn teardown_leaves_nothing_scheduled() {
    let mut stage = stage();
    stage.start();
    drain(&mut stage, Millis(100));
    stage.teardown();
    assert_eq!(stage.scheduler().pending(), 0);
    for (_, engine) in stage.lines() {
        assert_eq!(engine.display(), engine.text());
        assert!(!engine.is_enabled());
    }
}

#[test]
fn same_seed_gives_same_glitches() {
    let mut a = stage();
    let mut b = stage();
    a.start();
    b.start();
    for t in 1..120 {
        drain(&mut a, Millis(t));
        drain(&mut b, Millis(t));
        assert_eq!(a.displays(), b.displays());
    }
}
