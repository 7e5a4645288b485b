//! Pickup system: xp orb homing and collection, reward container opening.
//!
//! Consumption stops for the rest of the tick as soon as a level-up
//! moves the session out of `Playing`.

use std::f64::consts::TAU;

use hecs::Entity;
use rand::Rng;
use tracing::debug;

use horde_core::components::{RewardContainer, XpOrb};
use horde_core::constants::*;
use horde_core::enums::{RewardKind, Tint};
use horde_core::events::FeedbackEvent;
use horde_core::types::{Position, Velocity};

use crate::progression;
use crate::state::{FxRequest, SimulationState};
use crate::world_setup;

pub fn run(state: &mut SimulationState) {
    collect_orbs(state);
    if state.is_playing() {
        update_containers(state);
    }
    state.flush();
}

fn collect_orbs(state: &mut SimulationState) {
    let frame_scale = state.time.frame_scale();
    let target = state.player.position;
    let pickup_distance = state.player.radius + ORB_PICKUP_PADDING;

    let mut order: Vec<(u32, Entity)> = state
        .world
        .query::<&XpOrb>()
        .iter()
        .map(|(entity, orb)| (orb.id, entity))
        .collect();
    order.sort_by_key(|o| o.0);

    for (_, entity) in order {
        let collected = {
            let Ok((orb, pos, vel)) = state
                .world
                .query_one_mut::<(&mut XpOrb, &mut Position, &mut Velocity)>(entity)
            else {
                continue;
            };

            let (dir, distance) = pos.direction_to(&target);
            if distance < ORB_MAGNET_RADIUS || orb.magnetized {
                orb.magnetized = true;
                // A long frame must not carry the orb past the player.
                let speed = if ORB_HOMING_SPEED * frame_scale > distance {
                    distance / frame_scale
                } else {
                    ORB_HOMING_SPEED
                };
                *vel = Velocity::from_dvec2(dir * speed);
            } else {
                vel.decay(ORB_IDLE_DECAY, frame_scale);
            }
            pos.integrate(vel, frame_scale);
            orb.pulse_phase += ORB_PULSE_STEP * frame_scale;

            (distance < pickup_distance).then_some((orb.value, *pos))
        };

        if let Some((value, at)) = collected {
            state.commands.despawn(entity);
            state.player.xp += value;
            state.request_fx(FxRequest::Sparks {
                at,
                count: 8,
                tint: Tint::Xp,
            });
            state.emit(FeedbackEvent::Xp { value });

            if progression::check_level_up(state) {
                break;
            }
        }
    }
}

fn update_containers(state: &mut SimulationState) {
    let frame_ms = state.time.frame_ms;
    let frame_scale = state.time.frame_scale();
    let target = state.player.position;
    let open_distance = state.player.radius + REWARD_OPEN_PADDING;

    let mut order: Vec<(u32, Entity)> = state
        .world
        .query::<&RewardContainer>()
        .iter()
        .map(|(entity, c)| (c.id, entity))
        .collect();
    order.sort_by_key(|o| o.0);

    for (_, entity) in order {
        let opened_at = {
            let Ok((container, pos)) = state
                .world
                .query_one_mut::<(&mut RewardContainer, &Position)>(entity)
            else {
                continue;
            };

            if let Some(timer) = &mut container.removal_timer_ms {
                *timer -= frame_ms;
                container.scale = REWARD_OPEN_SCALE * (*timer / REWARD_REMOVAL_DELAY_MS).max(0.0);
                if *timer <= 0.0 {
                    state.commands.despawn(entity);
                }
                continue;
            }

            container.pulse_phase += REWARD_PULSE_STEP * frame_scale;
            if pos.distance_to(&target) >= open_distance {
                continue;
            }
            container.opened = true;
            container.scale = REWARD_OPEN_SCALE;
            container.removal_timer_ms = Some(REWARD_REMOVAL_DELAY_MS);
            *pos
        };

        state.request_fx(FxRequest::Explosion {
            at: opened_at,
            size: 30.0,
            tint: Tint::Reward,
        });
        state.shake(SHAKE_REWARD);

        let reward = draw_reward(state.rng.gen::<f64>());
        grant_reward(state, reward, opened_at);
        state.emit(FeedbackEvent::RewardOpened { reward });
        debug!(?reward, "reward container opened");

        if !state.is_playing() {
            break;
        }
    }
}

/// Map a uniform draw in `[0, 1)` to a reward.
pub fn draw_reward(roll: f64) -> RewardKind {
    if roll < REWARD_SCATTER_THRESHOLD {
        RewardKind::XpScatter
    } else if roll < REWARD_HEAL_THRESHOLD {
        RewardKind::Heal
    } else {
        RewardKind::InstantLevelUp
    }
}

/// Carry out a reward at the container's position.
pub fn grant_reward(state: &mut SimulationState, reward: RewardKind, at: Position) {
    match reward {
        RewardKind::XpScatter => {
            for j in 0..REWARD_XP_ORB_COUNT {
                let angle = TAU * j as f64 / REWARD_XP_ORB_COUNT as f64;
                let speed = 3.0 + state.rng.gen::<f64>() * 2.0;
                world_setup::spawn_xp_orb(
                    state,
                    at,
                    Velocity::from_polar(speed, angle),
                    REWARD_XP_ORB_VALUE,
                );
            }
        }
        RewardKind::Heal => {
            let player = &mut state.player;
            player.hp = (player.hp + REWARD_HEAL_AMOUNT).min(player.max_hp);
            state.request_fx(FxRequest::Sparks {
                at,
                count: 20,
                tint: Tint::Heal,
            });
        }
        RewardKind::InstantLevelUp => progression::grant_instant_level(state),
    }
}
