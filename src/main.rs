mod pilot;

use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};

use plane_shooter::{Simulation, Tuning};

use crate::pilot::{Autopilot, HookCounters};

/// Play the shooter headlessly with a steering autopilot and report the run
/// as JSON on stdout.
#[derive(Parser, Debug)]
#[command(name = "plane_shooter", version)]
struct Args {
    /// RNG seed for enemy spawns.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Simulated seconds to play.
    #[arg(long, default_value_t = 120.0)]
    seconds: f64,

    /// Frames per simulated second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    #[arg(long, default_value_t = 480.0)]
    width: f64,

    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// TOML file overriding gameplay tuning.
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Restart this many times after a game over.
    #[arg(long, default_value_t = 0)]
    restarts: u32,

    /// Emit a snapshot JSON line every N frames (0 disables).
    #[arg(long, default_value_t = 0)]
    snapshot_every: u64,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    frames: u64,
    seconds: f64,
    final_score: u32,
    best_score: u32,
    kills: u32,
    milestones: u32,
    escapes: u32,
    game_overs: u32,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr; stdout carries the JSON report.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}

fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning> {
    match path {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display())),
        None => Ok(Tuning::default()),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if args.fps == 0 {
        return Err(anyhow!("--fps must be > 0"));
    }
    let tuning = load_tuning(args.tuning.as_ref())?;

    let mut out = BufWriter::new(stdout());
    let summary = run(&args, tuning, &mut out)?;

    serde_json::to_writer(&mut out, &summary).context("writing run summary")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn run<W: Write>(args: &Args, tuning: Tuning, out: &mut W) -> Result<RunSummary> {
    let dt = 1.0 / args.fps as f64;
    let total_frames = (args.seconds.max(0.0) * args.fps as f64).round() as u64;

    let mut sim = Simulation::seeded(tuning, args.seed);
    let counters = HookCounters::default();
    counters.attach(&mut sim);
    sim.initialize(args.width, args.height);

    let mut pilot = Autopilot::default();
    let mut summary = RunSummary {
        seed: args.seed,
        frames: 0,
        seconds: 0.0,
        final_score: 0,
        best_score: 0,
        kills: 0,
        milestones: 0,
        escapes: 0,
        game_overs: 0,
    };
    let mut restarts_left = args.restarts;

    for frame in 1..=total_frames {
        let report = pilot.frame(&mut sim, &counters, dt);
        sim.validate()
            .map_err(|rule| anyhow!("invariant {rule} broken at frame {frame}"))?;

        summary.frames = frame;
        summary.best_score = summary.best_score.max(sim.score());
        if report.milestone {
            summary.milestones += 1;
        }
        if report.enemy_escaped {
            summary.escapes += 1;
        }

        if args.snapshot_every > 0 && frame % args.snapshot_every == 0 {
            serde_json::to_writer(&mut *out, &sim.snapshot())
                .with_context(|| format!("writing snapshot at frame {frame}"))?;
            writeln!(out)?;
        }

        if report.game_over_edge {
            summary.game_overs += 1;
            if restarts_left == 0 {
                break;
            }
            restarts_left -= 1;
            debug!(restarts_left, "restarting");
            sim.restart();
            pilot.reset();
        }
    }

    summary.seconds = summary.frames as f64 * dt;
    summary.final_score = sim.score();
    summary.kills = counters.kills.get();
    info!(
        frames = summary.frames,
        score = summary.final_score,
        kills = summary.kills,
        "run finished"
    );
    Ok(summary)
}
