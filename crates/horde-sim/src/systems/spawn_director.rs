//! Spawn director: introduces enemies and reward containers around the player.

use std::f64::consts::TAU;

use rand::Rng;

use horde_core::components::RewardContainer;
use horde_core::constants::*;
use horde_core::enums::EnemyVariant;
use horde_core::types::Position;

use crate::state::SimulationState;
use crate::world_setup;

/// One row of the variant draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRule {
    /// Elapsed time that must be exceeded before this row can match.
    pub unlock_after_ms: Option<f64>,
    /// The draw matches when it is below this cumulative threshold.
    pub threshold: f64,
    pub variant: EnemyVariant,
}

const fn rule(unlock_after_ms: Option<f64>, threshold: f64, variant: EnemyVariant) -> SpawnRule {
    SpawnRule {
        unlock_after_ms,
        threshold,
        variant,
    }
}

/// Ordered rules; the first match wins and `Basic` is the fallback.
pub const SPAWN_RULES: [SpawnRule; 15] = [
    rule(Some(90_000.0), 0.01, EnemyVariant::Boss),
    rule(Some(60_000.0), 0.03, EnemyVariant::MiniBoss),
    rule(None, 0.05, EnemyVariant::Swarm),
    rule(None, 0.12, EnemyVariant::Fast),
    rule(None, 0.22, EnemyVariant::Tank),
    rule(None, 0.30, EnemyVariant::Shooter),
    rule(Some(30_000.0), 0.37, EnemyVariant::Elite),
    rule(Some(20_000.0), 0.43, EnemyVariant::Splitter),
    rule(Some(40_000.0), 0.48, EnemyVariant::Circler),
    rule(Some(25_000.0), 0.53, EnemyVariant::Dasher),
    rule(Some(50_000.0), 0.58, EnemyVariant::Teleporter),
    rule(Some(45_000.0), 0.63, EnemyVariant::Necromancer),
    rule(Some(35_000.0), 0.68, EnemyVariant::Healer),
    rule(Some(30_000.0), 0.73, EnemyVariant::Shield),
    rule(Some(15_000.0), 0.78, EnemyVariant::Kamikaze),
];

/// Pick the variant for a uniform draw `roll` in `[0, 1)` at `elapsed_ms`.
pub fn select_variant(elapsed_ms: f64, roll: f64) -> EnemyVariant {
    SPAWN_RULES
        .iter()
        .find(|r| roll < r.threshold && r.unlock_after_ms.is_none_or(|t| elapsed_ms > t))
        .map(|r| r.variant)
        .unwrap_or(EnemyVariant::Basic)
}

/// Per-tick enemy spawn probability at `elapsed_ms`.
pub fn spawn_probability(base_rate: f64, ramp_ms: f64, elapsed_ms: f64) -> f64 {
    (base_rate * (1.0 + elapsed_ms / ramp_ms)).clamp(0.0, 1.0)
}

/// Run the spawn director for one tick.
pub fn run(state: &mut SimulationState) {
    let elapsed = state.time.elapsed_ms;
    let p = spawn_probability(state.config.spawn_base_rate, state.config.spawn_ramp_ms, elapsed);
    if state.rng.gen::<f64>() < p {
        let position = edge_position(state);
        let variant = select_variant(elapsed, state.rng.gen::<f64>());
        world_setup::spawn_enemy(state, variant, position);
    }

    if state.rng.gen::<f64>() < state.config.reward_spawn_chance {
        let open_slots = {
            let mut query = state.world.query::<&RewardContainer>();
            query.iter().count() < state.config.max_reward_containers
        };
        if open_slots {
            let angle = state.rng.gen::<f64>() * TAU;
            let distance =
                REWARD_SPAWN_MIN_DISTANCE + state.rng.gen::<f64>() * REWARD_SPAWN_DISTANCE_BAND;
            let position = state.player.position.polar_offset(distance, angle);
            world_setup::spawn_reward_container(state, position);
        }
    }

    state.flush();
}

/// A point just outside the view on a random side of the player.
fn edge_position(state: &mut SimulationState) -> Position {
    let player = state.player.position;
    let offset = state.config.spawn_distance;
    let side = state.rng.gen_range(0..4);
    let jitter = state.rng.gen::<f64>() - 0.5;
    match side {
        0 => Position::new(player.x + jitter * state.config.viewport_width, player.y - offset),
        1 => Position::new(player.x + offset, player.y + jitter * state.config.viewport_height),
        2 => Position::new(player.x + jitter * state.config.viewport_width, player.y + offset),
        _ => Position::new(player.x - offset, player.y + jitter * state.config.viewport_height),
    }
}
