use super::*;

fn line(name: &str) -> LineSpec {
    LineSpec {
        name: name.to_string(),
        text: "text".to_string(),
        enabled: true,
        preset: None,
        opts: None,
    }
}

#[test]
fn json_defaults_are_applied() {
    let scene = Scene::from_json_str(
        r#"{ "lines": [ { "name": "hero", "text": "Initiate Contact", "preset": "heading" } ] }"#,
    )
    .unwrap();
    assert_eq!(scene.seed, 0);
    assert_eq!(scene.frame_interval_ms, 16);
    let hero = scene.line("hero").unwrap();
    assert!(hero.enabled);
    assert_eq!(hero.resolved_opts(), Preset::Heading.opts());
}

#[test]
fn explicit_opts_override_preset() {
    let mut l = line("a");
    l.preset = Some(Preset::Footer);
    l.opts = Some(TypewriterOpts {
        type_speed_ms: 1,
        ..TypewriterOpts::default()
    });
    assert_eq!(l.resolved_opts().type_speed_ms, 1);

    l.opts = None;
    assert_eq!(l.resolved_opts(), Preset::Footer.opts());
    l.preset = None;
    assert_eq!(l.resolved_opts(), TypewriterOpts::default());
}

#[test]
fn rejects_empty_scene() {
    let scene = Scene {
        seed: 0,
        frame_interval_ms: 16,
        lines: vec![],
    };
    assert!(scene.validate().is_err());
}

#[test]
fn rejects_duplicate_and_blank_names() {
    let dup = Scene {
        seed: 0,
        frame_interval_ms: 16,
        lines: vec![line("a"), line("a")],
    };
    assert!(dup.validate().unwrap_err().to_string().contains("duplicate"));

    let blank = Scene {
        seed: 0,
        frame_interval_ms: 16,
        lines: vec![line("  ")],
    };
    assert!(blank.validate().is_err());
}

#[test]
fn rejects_zero_frame_interval() {
    let scene = Scene {
        seed: 0,
        frame_interval_ms: 0,
        lines: vec![line("a")],
    };
    assert!(scene.validate().is_err());
}

#[test]
fn invalid_line_opts_name_the_line() {
    let mut l = line("footer");
    l.opts = Some(TypewriterOpts {
        glitch_chance: 3.0,
        ..TypewriterOpts::default()
    });
    let scene = Scene {
        seed: 0,
        frame_interval_ms: 16,
        lines: vec![l],
    };
    let err = scene.validate().unwrap_err();
    assert!(err.to_string().contains("line 'footer'"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Scene::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, TypeloopError::Serde(_)));
}
