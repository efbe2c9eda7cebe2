//! Gap Runner entry point
//!
//! Headless native runner: drives a session with a fixed frame delta, an
//! optional autopilot standing in for player input, and records the result on
//! the leaderboard.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use gap_runner::consts::{MAX_DT, NOMINAL_DT};
use gap_runner::sim::Snapshot;
use gap_runner::{HighScores, Session, Settings};

#[derive(Debug, Parser)]
#[command(name = "gap-runner", about = "Run a headless Gap Runner session")]
struct Args {
    /// Settings file (JSON)
    #[arg(long, default_value = "settings.json")]
    config: PathBuf,
    /// Player name (overrides settings)
    #[arg(long)]
    player: Option<String>,
    /// Obstacle seed (overrides settings)
    #[arg(long)]
    seed: Option<u64>,
    /// Maximum ticks before giving up
    #[arg(long, default_value_t = 10_000)]
    ticks: u64,
    /// Frame delta fed to each tick
    #[arg(long, default_value_t = NOMINAL_DT)]
    dt: f32,
    /// Leaderboard file (overrides settings)
    #[arg(long)]
    scores: Option<PathBuf>,
    /// Let the autopilot jump
    #[arg(long)]
    autopilot: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Gap Runner (native) starting...");

    let settings = Settings::load(&args.config);
    let player = args.player.unwrap_or(settings.player_name);
    let seed = args.seed.or(settings.seed).unwrap_or_else(clock_seed);
    let scores_path = args.scores.unwrap_or(settings.high_scores_path);
    let dt = args.dt.min(MAX_DT);

    let high_scores = HighScores::load(&scores_path)
        .with_context(|| format!("reading leaderboard {}", scores_path.display()))?;
    let mut session = Session::new(&player, settings.sim, seed, high_scores)?;

    // Nothing to load headless
    session.mark_assets_loaded();

    for _ in 0..args.ticks {
        if args.autopilot {
            let game = session.game();
            let rest_y = game.config().actor_start_y();
            if wants_jump(&game.snapshot(), game.actor().velocity(), rest_y) {
                session.jump();
            }
        }
        let report = session.advance(dt)?;
        if report.scored > 0 {
            log::info!("Score: {}", session.game().score());
        }
        if let Some(cause) = report.ended {
            println!(
                "Game over ({:?}) after {} ticks - score {}",
                cause,
                session.game().state().time_ticks,
                session.game().score()
            );
            break;
        }
    }

    if !session.game().is_over() {
        println!(
            "Stopped after {} ticks - score {}",
            args.ticks,
            session.game().score()
        );
        return Ok(());
    }

    if let Some(rank) = session.last_rank() {
        println!("New high score! Rank #{}", rank);
    }
    let high_scores = session.into_high_scores();
    high_scores
        .save(&scores_path)
        .with_context(|| format!("writing leaderboard {}", scores_path.display()))?;

    for (i, entry) in high_scores.top(5).iter().enumerate() {
        println!("{:>2}. {:<16} {}", i + 1, entry.player_name, entry.score);
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Jump when falling below the lower part of the next gap (or below
/// `rest_y` while no obstacle is ahead)
fn wants_jump(snapshot: &Snapshot, velocity: f32, rest_y: f32) -> bool {
    if velocity < 0.0 {
        return false;
    }
    let actor = snapshot.actor;
    let target = snapshot
        .obstacles
        .iter()
        .find(|o| o.x + o.half_width >= actor.x - snapshot.actor_radius)
        .map(|o| o.gap_top_y + o.gap_height * 0.65)
        .unwrap_or(rest_y);
    actor.y > target
}
