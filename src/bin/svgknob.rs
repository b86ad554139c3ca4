use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use svgknob::{KnobConfig, SvgGraphic, SvgKnob, Vec2, math};

#[derive(Parser, Debug)]
#[command(name = "svgknob", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the knob at one value as a PNG.
    Frame(FrameArgs),
    /// Render a sweep across the value range as numbered PNGs.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct KnobArgs {
    /// Knob face SVG.
    #[arg(long)]
    svg: PathBuf,

    /// Knob config JSON. Defaults to a unit range over a ±0.83π sweep.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Display box as WIDTHxHEIGHT. Defaults to the SVG's natural size.
    #[arg(long, value_parser = parse_size)]
    size: Option<Vec2>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    knob: KnobArgs,

    /// Knob value.
    #[arg(long, allow_negative_numbers = true)]
    value: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    #[command(flatten)]
    knob: KnobArgs,

    /// Number of frames, evenly spaced from min_value to max_value.
    #[arg(long, default_value_t = 16)]
    frames: u32,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,
}

fn parse_size(s: &str) -> Result<Vec2, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("width: {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("height: {e}"))?;
    Ok(Vec2::new(w, h))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn build_knob(args: &KnobArgs) -> anyhow::Result<SvgKnob<SvgGraphic>> {
    let config = match &args.config {
        Some(path) => KnobConfig::from_path(path)?,
        None => KnobConfig::rack_default(),
    }
    .with_env_overrides();

    let graphic = SvgGraphic::from_path(&args.svg)?;
    let mut knob = SvgKnob::new(config, graphic)?;
    if let Some(size) = args.size {
        knob.set_box_size(size);
    }
    Ok(knob)
}

fn write_png(knob: &SvgKnob<SvgGraphic>, out: &Path) -> anyhow::Result<()> {
    let frame = knob
        .snapshot()
        .context("knob has no cached raster (empty display box?)")?
        .into_straight();

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut knob = build_knob(&args.knob)?;
    knob.set_value(args.value)?;
    knob.step()?;
    write_png(&knob, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.frames == 0 {
        anyhow::bail!("--frames must be at least 1");
    }

    let mut knob = build_knob(&args.knob)?;
    let (lo, hi) = (knob.param().min_value(), knob.param().max_value());
    let last = args.frames.saturating_sub(1).max(1);

    for i in 0..args.frames {
        let t = f64::from(i) / f64::from(last);
        knob.set_value(math::cross(lo, hi, t))?;
        let outcome = knob.step()?;

        let out = args.out_dir.join(format!("frame_{i:04}.png"));
        write_png(&knob, &out)?;
        tracing::info!(frame = i, angle = knob.angle(), ?outcome, "rendered");
    }

    let stats = knob.stats();
    eprintln!(
        "wrote {} frames to {} (renders={}, reuses={}, reallocations={})",
        args.frames,
        args.out_dir.display(),
        stats.renders,
        stats.reuses,
        stats.reallocations
    );
    Ok(())
}
