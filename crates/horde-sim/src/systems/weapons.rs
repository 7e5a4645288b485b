//! Weapon system: cooldown gating and dispatch by weapon kind.

use std::f64::consts::TAU;

use hecs::Entity;

use horde_core::components::{Enemy, Health, Projectile, ProjectileSource, Weapon};
use horde_core::constants::*;
use horde_core::enums::*;
use horde_core::events::FeedbackEvent;
use horde_core::types::{Position, Velocity};

use crate::arsenal::{self, Aim};
use crate::state::SimulationState;
use crate::systems::combat::{self, Hit};
use crate::world_setup;

/// Attempt to fire every owned weapon whose cooldown has elapsed.
pub fn run(state: &mut SimulationState) {
    let now = state.time.elapsed_ms;

    for index in 0..state.loadout.len() {
        let weapon = {
            let weapon = &mut state.loadout[index];
            if now - weapon.last_fired_ms <= weapon.cooldown_ms {
                continue;
            }
            // The attempt resets the timer whether or not anything fires.
            weapon.last_fired_ms = now;
            weapon.clone()
        };

        match weapon.kind {
            WeaponKind::Projectile => fire_projectiles(state, &weapon),
            WeaponKind::Orbit => maintain_orbit(state, &weapon),
            WeaponKind::Area => pulse_area(state, &weapon),
        }
    }

    state.flush();
}

/// The `count` living enemies nearest the player, ties broken by encounter order.
pub fn nearest_enemies(state: &SimulationState, count: usize) -> Vec<Position> {
    let origin = state.player.position;
    let mut candidates: Vec<(f64, u32, Position)> = state
        .world
        .query::<(&Enemy, &Position, &Health)>()
        .iter()
        .filter(|(_, (_, _, health))| health.current > 0.0)
        .map(|(_, (enemy, pos, _))| (origin.distance_to(pos), enemy.id, *pos))
        .collect();
    candidates.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    candidates.into_iter().take(count).map(|c| c.2).collect()
}

fn fire_projectiles(state: &mut SimulationState, weapon: &Weapon) {
    let spec = arsenal::spec(weapon.id);

    match spec.aim {
        Aim::Fan {
            directions,
            rotation_rate,
        } => {
            let spin = state.time.elapsed_ms * rotation_rate;
            for i in 0..directions {
                let angle = TAU * i as f64 / directions as f64 + spin;
                world_setup::spawn_weapon_projectile(
                    state,
                    weapon,
                    Velocity::from_polar(spec.speed, angle),
                );
            }
        }
        Aim::Nearest => {
            let targets = nearest_enemies(state, weapon.projectile_count as usize);
            if targets.is_empty() {
                return;
            }
            let origin = state.player.position;
            for target in targets {
                let angle = origin.angle_to(&target);
                world_setup::spawn_weapon_projectile(
                    state,
                    weapon,
                    Velocity::from_polar(spec.speed, angle),
                );
            }
        }
    }

    state.emit(FeedbackEvent::Shoot {
        owner: Owner::Player,
    });
}

/// Add one ring member if the ring for this weapon is short.
fn maintain_orbit(state: &mut SimulationState, weapon: &Weapon) {
    let existing = {
        let mut query = state.world.query::<&Projectile>();
        query
            .iter()
            .filter(|(_, p)| p.source == ProjectileSource::Weapon(weapon.id))
            .count()
    };
    if existing >= weapon.projectile_count as usize {
        return;
    }

    let angle = TAU * existing as f64 / weapon.projectile_count as f64;
    world_setup::spawn_orbiter(state, weapon, angle);
    state.emit(FeedbackEvent::Shoot {
        owner: Owner::Player,
    });
}

/// Damage every living enemy within the pulse radius.
fn pulse_area(state: &mut SimulationState, weapon: &Weapon) {
    let spec = arsenal::spec(weapon.id);
    let origin = state.player.position;

    let mut victims: Vec<(u32, Entity, Position)> = state
        .world
        .query::<(&Enemy, &Position, &Health)>()
        .iter()
        .filter(|(_, (_, pos, health))| {
            health.current > 0.0 && origin.distance_to(pos) < spec.radius
        })
        .map(|(entity, (enemy, pos, _))| (enemy.id, entity, *pos))
        .collect();
    victims.sort_by_key(|v| v.0);

    for (_, entity, pos) in victims {
        combat::damage_enemy(
            state,
            entity,
            Hit {
                damage: weapon.damage,
                at: pos,
                tint: Tint::Weapon(weapon.id),
                sparks: 3,
                impulse: HIT_SCALE_AREA,
                shake: 0.0,
            },
        );
    }
}
