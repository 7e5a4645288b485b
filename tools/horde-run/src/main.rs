//! horde-run: headless driver for the horde simulation.
//!
//! Usage:
//!   horde-run --ticks 3600
//!   horde-run --config session.json --seed 7 --frame-ms 16.6667
//!
//! An autopilot steers the player away from the nearest enemy and takes the
//! first offer at every level-up. Set `RUST_LOG=debug` for per-stage detail.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use horde_core::constants::REFERENCE_FRAME_MS;
use horde_core::enums::GamePhase;
use horde_core::events::FeedbackEvent;
use horde_core::state::RenderSnapshot;
use horde_sim::{SimConfig, SimulationEngine};

const DEFAULT_TICKS: u64 = 60 * 60;

struct Options {
    config: Option<PathBuf>,
    ticks: u64,
    seed: Option<u64>,
    frame_ms: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }
    let options = parse_options(&args)?;

    let mut config = match &options.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(seed) = options.seed {
        config.seed = seed;
    }

    run(config, &options)
}

fn print_usage() {
    eprintln!(
        "horde-run: headless horde session driver\n\
         \n\
           --config <path>   JSON session config (optional, defaults otherwise)\n\
           --ticks <N>       Ticks to run (default: {DEFAULT_TICKS})\n\
           --seed <N>        Override the config seed\n\
           --frame-ms <ms>   Frame length per tick (default: one 60 Hz frame)\n"
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_options(args: &[String]) -> Result<Options> {
    let ticks = match flag_value(args, "--ticks") {
        Some(v) => v.parse().with_context(|| format!("invalid --ticks: {v}"))?,
        None => DEFAULT_TICKS,
    };
    let seed = match flag_value(args, "--seed") {
        Some(v) => Some(v.parse().with_context(|| format!("invalid --seed: {v}"))?),
        None => None,
    };
    let frame_ms = match flag_value(args, "--frame-ms") {
        Some(v) => v
            .parse::<f64>()
            .with_context(|| format!("invalid --frame-ms: {v}"))?,
        None => REFERENCE_FRAME_MS,
    };
    if !frame_ms.is_finite() || frame_ms <= 0.0 {
        bail!("--frame-ms must be a positive number, got {frame_ms}");
    }

    Ok(Options {
        config: flag_value(args, "--config").map(PathBuf::from),
        ticks,
        seed,
        frame_ms,
    })
}

fn run(config: SimConfig, options: &Options) -> Result<()> {
    let mut engine = SimulationEngine::new(config);
    engine.start_game();
    info!(
        seed = engine.config().seed,
        ticks = options.ticks,
        frame_ms = options.frame_ms,
        "running session"
    );

    let mut kills_by_event = 0u32;
    for _ in 0..options.ticks {
        if engine.phase() == GamePhase::LevelUp {
            if let Some(&choice) = engine.offered_upgrades().first() {
                info!(level = engine.player().level, upgrade = %choice.label(), "autopilot picked upgrade");
                engine.select_upgrade(choice);
            }
        }

        let (dx, dy) = flee_direction(&engine.snapshot());
        engine.set_movement_intent(dx, dy);

        for event in engine.tick(options.frame_ms) {
            match event {
                FeedbackEvent::Kill { .. } => kills_by_event += 1,
                FeedbackEvent::RewardOpened { reward } => info!(?reward, "reward opened"),
                FeedbackEvent::Death => info!("player died"),
                _ => {}
            }
        }

        if engine.phase() == GamePhase::Dead {
            break;
        }
    }

    let hud = engine.hud_stats();
    let weapons: Vec<String> = engine
        .loadout()
        .iter()
        .map(|w| format!("{:?} L{}", w.id, w.level))
        .collect();

    println!("phase:    {:?}", engine.phase());
    println!("time:     {:.1} s", hud.elapsed_ms / 1000.0);
    println!("level:    {} ({}/{} xp)", hud.level, hud.xp, hud.xp_to_next);
    println!("hp:       {:.1}/{:.1}", hud.hp, hud.max_hp);
    println!("kills:    {}", hud.kills);
    println!("loadout:  {}", weapons.join(", "));

    if kills_by_event != hud.kills {
        bail!(
            "kill events ({kills_by_event}) disagree with the kill counter ({})",
            hud.kills
        );
    }
    Ok(())
}

/// Unit vector pointing away from the nearest enemy, or idle when none remain.
fn flee_direction(snapshot: &RenderSnapshot) -> (f64, f64) {
    let player = snapshot.player.position;
    let nearest = snapshot.enemies.iter().min_by(|a, b| {
        player
            .distance_to(&a.position)
            .total_cmp(&player.distance_to(&b.position))
    });
    match nearest {
        Some(enemy) => {
            let (dir, _) = enemy.position.direction_to(&player);
            (dir.x, dir.y)
        }
        None => (0.0, 0.0),
    }
}
