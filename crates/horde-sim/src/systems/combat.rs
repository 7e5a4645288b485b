//! Combat resolver: collision tests and damage resolution.
//!
//! Runs after movement. Player shots hit enemies, enemy shots hit the
//! player, then enemy bodies touch the player. Every pass visits entities in
//! ascending id order and skips enemies already at zero health.

use hecs::Entity;
use rand::Rng;
use tracing::trace;

use horde_ai::profiles::get_profile;
use horde_core::components::*;
use horde_core::constants::*;
use horde_core::enums::*;
use horde_core::events::FeedbackEvent;
use horde_core::types::{Position, Velocity};

use crate::progression;
use crate::state::{FxRequest, SimulationState};
use crate::world_setup;

/// One application of damage to an enemy.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub damage: f64,
    /// Where the impact sparks appear.
    pub at: Position,
    pub tint: Tint,
    pub sparks: usize,
    /// Hit-impulse scale set on the enemy.
    pub impulse: f64,
    pub shake: f64,
}

/// Run collision resolution for one tick.
pub fn run(state: &mut SimulationState) {
    resolve_player_shots(state);
    resolve_enemy_shots(state);
    if state.is_playing() {
        resolve_contact(state);
    }
    state.flush();
}

/// Collision view of a living enemy.
#[derive(Debug, Clone, Copy)]
struct Target {
    entity: Entity,
    id: u32,
    variant: EnemyVariant,
    position: Position,
    radius: f64,
}

/// Living enemies in encounter order.
fn living_enemies(state: &SimulationState) -> Vec<Target> {
    let mut enemies: Vec<Target> = state
        .world
        .query::<(&Enemy, &Position, &Health, &Collider)>()
        .iter()
        .filter(|(_, (_, _, health, _))| health.current > 0.0)
        .map(|(entity, (enemy, pos, _, collider))| Target {
            entity,
            id: enemy.id,
            variant: enemy.variant,
            position: *pos,
            radius: collider.radius,
        })
        .collect();
    enemies.sort_by_key(|t| t.id);
    enemies
}

fn is_alive(state: &SimulationState, entity: Entity) -> bool {
    state
        .world
        .get::<&Health>(entity)
        .map(|h| h.current > 0.0)
        .unwrap_or(false)
}

/// Where a projectile was at the start of this tick's movement.
///
/// Free shots are tested along the whole segment they covered, so a long
/// frame cannot carry them through a target.
fn swept_start(
    projectile: &Projectile,
    pos: &Position,
    vel: &Velocity,
    frame_scale: f64,
) -> Position {
    match projectile.motion {
        ProjectileMotion::Free => {
            Position::new(pos.x - vel.x * frame_scale, pos.y - vel.y * frame_scale)
        }
        ProjectileMotion::Orbit { .. } => *pos,
    }
}

fn resolve_player_shots(state: &mut SimulationState) {
    let frame_scale = state.time.frame_scale();
    let mut shots: Vec<(Entity, Projectile, Position, Position, f64)> = state
        .world
        .query::<(&Projectile, &Position, &Velocity, &Collider)>()
        .iter()
        .filter(|(_, (p, _, _, _))| p.owner == Owner::Player)
        .map(|(entity, (p, pos, vel, collider))| {
            let start = swept_start(p, pos, vel, frame_scale);
            (entity, p.clone(), start, *pos, collider.radius)
        })
        .collect();
    shots.sort_by_key(|s| s.1.id);

    let enemies = living_enemies(state);

    for (shot_entity, shot, shot_start, shot_pos, shot_radius) in shots {
        // At most one enemy per shot per tick.
        let target = enemies.iter().find(|t| {
            t.position.distance_to_segment(&shot_start, &shot_pos) < t.radius + shot_radius
                && is_alive(state, t.entity)
        });
        let Some(enemy_entity) = target.map(|t| t.entity) else {
            continue;
        };

        let tint = match shot.source {
            ProjectileSource::Weapon(id) => Tint::Weapon(id),
            ProjectileSource::Enemy(_) => Tint::EnemyShot,
        };
        damage_enemy(
            state,
            enemy_entity,
            Hit {
                damage: shot.damage,
                at: shot_pos,
                tint,
                sparks: 5,
                impulse: HIT_SCALE_PROJECTILE,
                shake: SHAKE_PER_HIT,
            },
        );

        match shot.pierce {
            Some(remaining) if remaining > 0 => {
                if let Ok(mut p) = state.world.get::<&mut Projectile>(shot_entity) {
                    p.pierce = Some(remaining - 1);
                }
            }
            _ => {
                if shot.motion == ProjectileMotion::Free {
                    state.commands.despawn(shot_entity);
                }
            }
        }
    }
}

fn resolve_enemy_shots(state: &mut SimulationState) {
    let frame_scale = state.time.frame_scale();
    let mut shots: Vec<(Entity, u32, f64, Position, Position, f64)> = state
        .world
        .query::<(&Projectile, &Position, &Velocity, &Collider)>()
        .iter()
        .filter(|(_, (p, _, _, _))| p.owner == Owner::Enemy)
        .map(|(entity, (p, pos, vel, collider))| {
            let start = swept_start(p, pos, vel, frame_scale);
            (entity, p.id, p.damage, start, *pos, collider.radius)
        })
        .collect();
    shots.sort_by_key(|s| s.1);

    for (entity, _, damage, start, pos, radius) in shots {
        let miss = state.player.position.distance_to_segment(&start, &pos);
        if miss >= state.player.radius + radius {
            continue;
        }
        state.commands.despawn(entity);
        state.request_fx(FxRequest::Sparks {
            at: pos,
            count: 8,
            tint: Tint::PlayerHit,
        });
        state.shake(SHAKE_PLAYER_HIT);
        if damage_player(state, damage) {
            return;
        }
    }
}

fn resolve_contact(state: &mut SimulationState) {
    let frame_scale = state.time.frame_scale();
    for target in living_enemies(state) {
        let Target {
            entity,
            variant,
            position,
            radius,
            ..
        } = target;
        if position.distance_to(&state.player.position) >= radius + state.player.radius {
            continue;
        }

        let damage = if variant == EnemyVariant::Kamikaze {
            // Detonates: one-shot damage, no per-frame scaling, no kill credit.
            if let Ok(mut health) = state.world.get::<&mut Health>(entity) {
                health.current = 0.0;
            }
            kill_enemy(state, entity, false);
            get_profile(variant).contact_damage
        } else {
            get_profile(variant).contact_damage * frame_scale
        };

        if damage_player(state, damage) {
            return;
        }
    }
}

/// Damage the player. Returns true if this killed them.
pub fn damage_player(state: &mut SimulationState, amount: f64) -> bool {
    let player = &mut state.player;
    player.hp = (player.hp - amount).max(0.0);
    player.flash_timer = HIT_FLASH_SECS;
    if player.hp <= 0.0 {
        progression::enter_dead(state);
        return true;
    }
    false
}

/// Apply one hit to an enemy: shield first, then health. Returns true on a kill.
///
/// Shared by projectile hits and area pulses, so both follow the same
/// death path.
pub fn damage_enemy(state: &mut SimulationState, entity: Entity, hit: Hit) -> bool {
    let (dealt, absorbed, pos, radius, dead) = {
        let Ok((enemy, health, pos, collider)) = state
            .world
            .query_one_mut::<(&mut Enemy, &mut Health, &Position, &Collider)>(entity)
        else {
            return false;
        };

        let mut remaining = hit.damage;
        let mut absorbed = false;
        if let VariantState::Shield { shield, .. } = &mut enemy.state {
            if *shield > 0.0 {
                let soaked = shield.min(remaining);
                *shield -= soaked;
                remaining -= soaked;
                absorbed = true;
            }
        }

        health.current -= remaining;
        enemy.flash_timer = HIT_FLASH_SECS;
        enemy.hit_scale = hit.impulse;
        (remaining, absorbed, *pos, collider.radius, health.current <= 0.0)
    };

    if absorbed {
        state.request_fx(FxRequest::Sparks {
            at: hit.at,
            count: 5,
            tint: Tint::Shield,
        });
    }
    if dealt > 0.0 {
        state.request_fx(FxRequest::DamageNumber {
            at: Position::new(pos.x, pos.y - radius),
            value: dealt,
        });
    }
    state.request_fx(FxRequest::Sparks {
        at: hit.at,
        count: hit.sparks,
        tint: hit.tint,
    });
    state.shake(hit.shake);
    state.emit(FeedbackEvent::Hit);

    if dead {
        kill_enemy(state, entity, true);
    }
    dead
}

/// Emit the death batch for an enemy whose health is already at zero and stage its removal.
///
/// `credited` kills count toward the session and emit a kill event.
pub fn kill_enemy(state: &mut SimulationState, entity: Entity, credited: bool) {
    let (variant, id, pos, radius) = {
        let Ok((enemy, pos, collider)) = state
            .world
            .query_one_mut::<(&Enemy, &Position, &Collider)>(entity)
        else {
            return;
        };
        (enemy.variant, enemy.id, *pos, collider.radius)
    };
    let profile = get_profile(variant);

    let explosion = if variant == EnemyVariant::Kamikaze {
        radius * 2.0
    } else {
        radius
    };
    state.request_fx(FxRequest::Explosion {
        at: pos,
        size: explosion,
        tint: Tint::Enemy(variant),
    });
    state.shake(profile.death_shake);

    if variant == EnemyVariant::Splitter {
        for k in 0..SPLIT_COUNT {
            let angle = std::f64::consts::TAU * k as f64 / SPLIT_COUNT as f64;
            world_setup::spawn_minion(state, pos, Velocity::from_polar(SPLIT_SPEED, angle));
        }
    }

    let drift = Velocity::new(
        (state.rng.gen::<f64>() - 0.5) * 2.0,
        (state.rng.gen::<f64>() - 0.5) * 2.0,
    );
    world_setup::spawn_xp_orb(state, pos, drift, profile.xp_value);

    state.commands.despawn(entity);
    if credited {
        state.stats.kills += 1;
        state.emit(FeedbackEvent::Kill {
            variant,
            x: pos.x,
            y: pos.y,
        });
    }
    trace!(id, ?variant, credited, "enemy killed");
}
