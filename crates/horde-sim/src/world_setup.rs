//! Entity spawn factories.
//!
//! Every factory stages its spawn on the state's command buffer, so the
//! entity appears when the current stage flushes.

use std::f64::consts::TAU;

use rand::Rng;

use horde_ai::profiles::{get_profile, initial_state};
use horde_core::components::*;
use horde_core::constants::*;
use horde_core::enums::*;
use horde_core::types::{Position, Velocity};

use crate::arsenal;
use crate::state::SimulationState;

/// Spawn a full-health enemy of the given variant at rest.
pub fn spawn_enemy(state: &mut SimulationState, variant: EnemyVariant, position: Position) -> u32 {
    let profile = get_profile(variant);
    let variant_state = initial_state(variant, &mut state.rng);
    let id = state.next_id();
    state.commands.spawn((
        Enemy {
            id,
            variant,
            flash_timer: 0.0,
            hit_scale: 1.0,
            facing: 0.0,
            state: variant_state,
        },
        position,
        Velocity::zero(),
        Health {
            current: profile.max_hp,
            max: profile.max_hp,
        },
        Collider {
            radius: profile.radius,
        },
    ));
    tracing::trace!(id, ?variant, x = position.x, y = position.y, "enemy spawned");
    id
}

/// Spawn a weak swarm minion (split or summon).
pub fn spawn_minion(state: &mut SimulationState, position: Position, velocity: Velocity) -> u32 {
    let id = state.next_id();
    state.commands.spawn((
        Enemy {
            id,
            variant: EnemyVariant::Swarm,
            flash_timer: 0.0,
            hit_scale: 1.0,
            facing: 0.0,
            state: VariantState::Chase,
        },
        position,
        velocity,
        Health {
            current: MINION_HP,
            max: MINION_HP,
        },
        Collider {
            radius: get_profile(EnemyVariant::Swarm).radius,
        },
    ));
    id
}

/// Spawn a free-flying player projectile for `weapon` at the player.
pub fn spawn_weapon_projectile(
    state: &mut SimulationState,
    weapon: &Weapon,
    velocity: Velocity,
) -> u32 {
    let spec = arsenal::spec(weapon.id);
    let id = state.next_id();
    state.commands.spawn((
        Projectile {
            id,
            owner: Owner::Player,
            source: ProjectileSource::Weapon(weapon.id),
            damage: weapon.damage,
            pierce: Some(spec.pierce),
            lifetime_ms: None,
            motion: ProjectileMotion::Free,
        },
        state.player.position,
        velocity,
        Collider { radius: spec.size },
        PositionHistory::default(),
    ));
    id
}

/// Spawn one orbit-ring member for `weapon` at `angle` around the player.
pub fn spawn_orbiter(state: &mut SimulationState, weapon: &Weapon, angle: f64) -> u32 {
    let spec = arsenal::spec(weapon.id);
    let id = state.next_id();
    state.commands.spawn((
        Projectile {
            id,
            owner: Owner::Player,
            source: ProjectileSource::Weapon(weapon.id),
            damage: weapon.damage,
            pierce: None,
            lifetime_ms: None,
            motion: ProjectileMotion::Orbit {
                angle,
                radius: spec.radius,
            },
        },
        state.player.position.polar_offset(spec.radius, angle),
        Velocity::zero(),
        Collider { radius: spec.size },
        PositionHistory::default(),
    ));
    id
}

/// Spawn an enemy-owned shot with a finite lifetime.
pub fn spawn_enemy_shot(
    state: &mut SimulationState,
    variant: EnemyVariant,
    position: Position,
    velocity: Velocity,
) -> u32 {
    let id = state.next_id();
    state.commands.spawn((
        Projectile {
            id,
            owner: Owner::Enemy,
            source: ProjectileSource::Enemy(variant),
            damage: ENEMY_SHOT_DAMAGE,
            pierce: None,
            lifetime_ms: Some(ENEMY_SHOT_LIFETIME_MS),
            motion: ProjectileMotion::Free,
        },
        position,
        velocity,
        Collider {
            radius: ENEMY_SHOT_SIZE,
        },
        PositionHistory::default(),
    ));
    id
}

pub fn spawn_xp_orb(
    state: &mut SimulationState,
    position: Position,
    velocity: Velocity,
    value: u32,
) -> u32 {
    let pulse_phase = state.rng.gen::<f64>() * TAU;
    let id = state.next_id();
    state.commands.spawn((
        XpOrb {
            id,
            value,
            magnetized: false,
            pulse_phase,
        },
        position,
        velocity,
    ));
    id
}

pub fn spawn_reward_container(state: &mut SimulationState, position: Position) -> u32 {
    let id = state.next_id();
    state.commands.spawn((
        RewardContainer {
            id,
            opened: false,
            pulse_phase: 0.0,
            scale: 1.0,
            removal_timer_ms: None,
        },
        position,
    ));
    tracing::trace!(id, x = position.x, y = position.y, "reward container spawned");
    id
}
