use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use typeloop::{Millis, Preset, RealtimeClock, Scene, SceneBuilder, Stage};

#[derive(Parser, Debug)]
#[command(name = "typeloop", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a scene and print every display change as JSON.
    Trace(TraceArgs),
    /// Animate a scene in the terminal in real time.
    Play(PlayArgs),
    /// Validate a scene JSON file.
    Validate(ValidateArgs),
    /// Print the built-in presets as JSON.
    Presets,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Input scene JSON.
    #[arg(long = "in", conflicts_with_all = ["text", "preset"])]
    in_path: Option<PathBuf>,

    /// Single line of text to type (instead of a scene file).
    #[arg(long)]
    text: Option<String>,

    /// Preset for `--text`.
    #[arg(long, value_enum, default_value_t = PresetChoice::Standard)]
    preset: PresetChoice,

    /// Override the scene seed.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Simulated duration in milliseconds.
    #[arg(long, default_value_t = 6000)]
    duration_ms: u64,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Wall-clock duration in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    duration_ms: u64,

    /// Show the plain text without animating.
    #[arg(long)]
    reduced_motion: bool,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetChoice {
    Standard,
    Footer,
    Heading,
}

impl From<PresetChoice> for Preset {
    fn from(p: PresetChoice) -> Self {
        match p {
            PresetChoice::Standard => Preset::Standard,
            PresetChoice::Footer => Preset::Footer,
            PresetChoice::Heading => Preset::Heading,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Trace(args) => cmd_trace(args),
        Command::Play(args) => cmd_play(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Presets => cmd_presets(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_scene(source: &SourceArgs) -> anyhow::Result<Scene> {
    let mut scene = match (&source.in_path, &source.text) {
        (Some(path), _) => {
            Scene::from_path(path).with_context(|| format!("load scene '{}'", path.display()))?
        }
        (None, Some(text)) => SceneBuilder::new()
            .preset_line("text", text.as_str(), source.preset.into())?
            .build()?,
        (None, None) => anyhow::bail!("either --in or --text is required"),
    };
    if let Some(seed) = source.seed {
        scene.seed = seed;
    }
    Ok(scene)
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.source)?;
    let trace = typeloop::record(&scene, Millis(args.duration_ms))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, &trace)?;
    } else {
        serde_json::to_writer(&mut out, &trace)?;
    }
    writeln!(out)?;
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.source)?;
    let clock = RealtimeClock::new(Millis(scene.frame_interval_ms));
    let mut stage = Stage::from_scene(&scene, clock)?;
    stage.set_reduced_motion(args.reduced_motion);
    stage.start();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.reduced_motion {
        writeln!(out, "{}", render_line(&stage))?;
        return Ok(());
    }

    let deadline = Millis(args.duration_ms);
    write!(out, "\r\x1b[2K{}", render_line(&stage))?;
    out.flush()?;
    while let Some(wake) = stage.scheduler_mut().wait_until(deadline) {
        if stage.dispatch(wake) {
            write!(out, "\r\x1b[2K{}", render_line(&stage))?;
            out.flush()?;
        }
    }

    stage.teardown();
    writeln!(out, "\r\x1b[2K{}", render_line(&stage))?;
    Ok(())
}

fn render_line<S: typeloop::Scheduler>(stage: &Stage<S>) -> String {
    let displays = stage.displays();
    if let [(_, only)] = displays.as_slice() {
        return (*only).to_string();
    }
    displays
        .iter()
        .map(|(name, display)| format!("{name}: {display}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let scene = Scene::from_path(&args.in_path)
        .with_context(|| format!("validate scene '{}'", args.in_path.display()))?;
    println!("ok: {} line(s)", scene.lines.len());
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    let presets: serde_json::Map<String, serde_json::Value> = Preset::ALL
        .iter()
        .map(|p| Ok((p.name().to_string(), serde_json::to_value(p.opts())?)))
        .collect::<anyhow::Result<_>>()?;
    println!("{}", serde_json::to_string_pretty(&presets)?);
    Ok(())
}
