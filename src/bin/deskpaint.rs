use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use deskpaint::{
    BlockText, ButtonFace, Canvas, ClockTime, Desktop, DesktopSettings, HeadlessHost,
    IndexedFramebuffer, PointerState, ProgramHost, ScriptedInput,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "deskpaint", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the headless desktop for some frames and write the display as a PNG.
    Frame(FrameArgs),
    /// Parse and validate a settings file, then print it normalized.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Desktop settings JSON. Defaults apply when omitted.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Loop iterations to run before capturing.
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Add a taskbar button for this action and start it (repeatable).
    #[arg(long = "launch")]
    launch: Vec<String>,

    /// Pointer position as `X,Y`.
    #[arg(long, value_parser = parse_point, default_value = "320,240")]
    pointer: (i32, i32),

    /// Clock reading as `HH:MM`.
    #[arg(long, value_parser = parse_clock, default_value = "12:00")]
    clock: (u8, u8),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Desktop settings JSON.
    #[arg(long)]
    settings: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let settings = match &args.settings {
        Some(path) => DesktopSettings::from_path(path)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None => DesktopSettings::default(),
    };

    let mut desktop = Desktop::new(settings);
    let mut host = HeadlessHost::new();
    for action in &args.launch {
        desktop
            .add_program_button(ButtonFace::Label(action.clone()), action.clone())
            .with_context(|| format!("add taskbar button '{action}'"))?;
        host.launch(action)
            .with_context(|| format!("launch '{action}'"))?;
    }

    let mut input = ScriptedInput::new();
    input
        .push_pointer(PointerState::new(args.pointer.0, args.pointer.1, 0))
        .push_clock(ClockTime::new(args.clock.0, args.clock.1));

    let mut fb = IndexedFramebuffer::new(Canvas::SCREEN);
    let text = BlockText::default();
    for _ in 0..args.frames.max(1) {
        if desktop.step(&mut fb, &text, &mut input, &mut host).shutdown {
            break;
        }
    }

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let img = fb.to_rgb_image();
    image::save_buffer_with_format(
        &args.out,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let settings = DesktopSettings::from_path(&args.settings)
        .with_context(|| format!("load settings '{}'", args.settings.display()))?;
    let json = serde_json::to_string_pretty(&settings).context("serialize settings")?;
    println!("{json}");
    Ok(())
}

fn parse_point(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok((x, y))
}

fn parse_clock(s: &str) -> Result<(u8, u8), String> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| format!("expected HH:MM, got '{s}'"))?;
    let h: u8 = h.parse().map_err(|e| format!("bad hour: {e}"))?;
    let m: u8 = m.parse().map_err(|e| format!("bad minute: {e}"))?;
    if h > 23 || m > 59 {
        return Err(format!("clock out of range: '{s}'"));
    }
    Ok((h, m))
}
