use anyhow::Context;
use arm_ik::{BeamState, RigConfig};
use clap::Parser;
use glam::DVec2;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Drive an arm rig frame by frame and print each frame as JSON.
#[derive(Parser, Debug)]
#[command(name = "arm-ik", version)]
struct Args {
    /// Rig description (JSON). Defaults to the letter-writing arm.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of `[x, y]` targets, one per frame.
    #[arg(long)]
    targets: Option<PathBuf>,

    /// Frames to generate for the built-in sweep when no targets are given.
    #[arg(long, default_value_t = 120)]
    frames: u32,

    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Radius of the built-in sweep around the arm origin.
    #[arg(long, default_value_t = 3.0)]
    radius: f64,

    #[arg(long)]
    beam_off: bool,

    #[arg(long)]
    pretty: bool,
}

fn parse_targets(json: &str) -> anyhow::Result<Vec<DVec2>> {
    let targets: Vec<DVec2> = serde_json::from_str(json)?;
    if let Some(bad) = targets.iter().find(|t| !t.is_finite()) {
        anyhow::bail!("target {bad} is not finite");
    }
    Ok(targets)
}

fn load_targets(path: &Path) -> anyhow::Result<Vec<DVec2>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading targets from {}", path.display()))?;
    parse_targets(&text).with_context(|| format!("parsing {}", path.display()))
}

fn sweep(origin: DVec2, radius: f64, frames: u32) -> Vec<DVec2> {
    (0..frames)
        .map(|i| {
            let t = i as f64 / frames.max(1) as f64;
            origin + DVec2::from_angle(t * std::f64::consts::TAU) * radius
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be positive, got {}", args.fps);
    }

    let rig_config = match &args.config {
        Some(path) => RigConfig::load(path)
            .with_context(|| format!("loading rig config {}", path.display()))?,
        None => RigConfig::default(),
    };
    let mut rig = rig_config.build_rig().context("building rig")?;
    if args.beam_off {
        rig.set_beam(BeamState::Off);
    }

    let targets = match &args.targets {
        Some(path) => load_targets(path)?,
        None => sweep(rig.config().origin(), args.radius, args.frames),
    };
    log::info!("driving {} frames at {} fps", targets.len(), args.fps);

    let dt = 1.0 / args.fps;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut clamped = 0usize;
    for target in targets {
        let frame = rig.try_tick(target, dt)?;
        if frame.pose.was_clamped() {
            clamped += 1;
        }
        if args.pretty {
            serde_json::to_writer_pretty(&mut out, &frame)?;
        } else {
            serde_json::to_writer(&mut out, &frame)?;
        }
        writeln!(out)?;
    }

    log::info!("done: {} frames, {} clamped", rig.frame_index(), clamped);
    Ok(())
}
