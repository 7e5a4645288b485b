//! Enemy AI system: evaluates each enemy's behavior policy, integrates
//! its motion and carries out the side actions the policy requests.

use hecs::Entity;
use tracing::trace;

use horde_ai::policy::{self, BehaviorAction, BehaviorContext};
use horde_core::components::{Enemy, Health};
use horde_core::constants::*;
use horde_core::enums::{EnemyVariant, Owner, Tint};
use horde_core::events::FeedbackEvent;
use horde_core::types::{Position, Velocity};

use crate::state::{FxRequest, SimulationState};
use crate::world_setup;

/// Run behavior for all living enemies, in encounter order.
///
/// Enemies are updated one at a time, so a healer sees the positions
/// already written by enemies processed before it.
pub fn run(state: &mut SimulationState) {
    let mut order: Vec<(u32, Entity)> = state
        .world
        .query::<(&Enemy, &Health)>()
        .iter()
        .filter(|(_, (_, health))| health.current > 0.0)
        .map(|(entity, (enemy, _))| (enemy.id, entity))
        .collect();
    order.sort_by_key(|o| o.0);

    for (id, entity) in order {
        update_enemy(state, id, entity);
    }

    state.flush();
}

fn update_enemy(state: &mut SimulationState, id: u32, entity: Entity) {
    let frame_ms = state.time.frame_ms;
    let frame_scale = state.time.frame_scale();

    let ctx = {
        let Ok((enemy, pos, vel)) = state
            .world
            .query_one_mut::<(&Enemy, &Position, &Velocity)>(entity)
        else {
            return;
        };
        BehaviorContext {
            variant: enemy.variant,
            position: *pos,
            velocity: *vel,
            target: state.player.position,
            state: enemy.state,
            frame_ms,
            frame_scale,
        }
    };

    let update = policy::evaluate(&ctx, &mut state.rng);

    let moved = {
        let Ok((enemy, pos, vel)) = state
            .world
            .query_one_mut::<(&mut Enemy, &mut Position, &mut Velocity)>(entity)
        else {
            return;
        };
        *pos = update.position;
        *vel = update.velocity;
        pos.integrate(vel, frame_scale);

        enemy.state = update.state;
        if vel.speed() > MIN_DISTANCE_EPSILON {
            enemy.facing = vel.heading();
        }
        enemy.flash_timer = (enemy.flash_timer - frame_ms / 1000.0).max(0.0);
        let ease = 1.0 - (1.0 - HIT_SCALE_EASE).powf(frame_scale);
        enemy.hit_scale += (1.0 - enemy.hit_scale) * ease;
        *pos
    };

    if let Some(action) = update.action {
        perform_action(state, id, entity, ctx.variant, moved, action);
    }
}

fn perform_action(
    state: &mut SimulationState,
    id: u32,
    entity: Entity,
    variant: EnemyVariant,
    position: Position,
    action: BehaviorAction,
) {
    match action {
        BehaviorAction::Dash => {
            state.request_fx(FxRequest::Sparks {
                at: position,
                count: 10,
                tint: Tint::Enemy(variant),
            });
        }
        BehaviorAction::Teleport { from, to } => {
            for at in [from, to] {
                state.request_fx(FxRequest::Explosion {
                    at,
                    size: 15.0,
                    tint: Tint::Enemy(variant),
                });
            }
            state.shake(SHAKE_TELEPORT);
            trace!(id, from_x = from.x, from_y = from.y, to_x = to.x, to_y = to.y, "teleported");
        }
        BehaviorAction::Summon { positions } => {
            for at in positions {
                world_setup::spawn_minion(state, at, Velocity::zero());
            }
            state.request_fx(FxRequest::Sparks {
                at: position,
                count: 15,
                tint: Tint::Enemy(variant),
            });
            trace!(id, count = positions.len(), "minions summoned");
        }
        BehaviorAction::Fire { velocity } => {
            world_setup::spawn_enemy_shot(state, variant, position, velocity);
            state.emit(FeedbackEvent::Shoot {
                owner: Owner::Enemy,
            });
        }
        BehaviorAction::HealAura { radius, amount } => {
            heal_around(state, entity, position, radius, amount);
        }
    }
}

/// Restore `amount` hp to every other living enemy within `radius`, capped at max.
fn heal_around(
    state: &mut SimulationState,
    healer: Entity,
    center: Position,
    radius: f64,
    amount: f64,
) {
    for (entity, (pos, health)) in state.world.query_mut::<(&Position, &mut Health)>() {
        if entity == healer || health.current <= 0.0 {
            continue;
        }
        if pos.distance_to(&center) < radius {
            health.current = (health.current + amount).min(health.max);
        }
    }
}
