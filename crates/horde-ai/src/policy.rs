//! Per-variant enemy behavior policies.
//!
//! Pure functions that compute the next velocity, variant payload and
//! optional side action for one enemy. No ECS dependency: the caller
//! integrates the position and carries out the action.

use std::f64::consts::TAU;

use rand::Rng;

use horde_core::components::VariantState;
use horde_core::constants::*;
use horde_core::enums::EnemyVariant;
use horde_core::types::{Position, Velocity};

use crate::profiles::get_profile;

/// Input to the behavior policy for a single enemy.
#[derive(Debug, Clone, Copy)]
pub struct BehaviorContext {
    pub variant: EnemyVariant,
    pub position: Position,
    pub velocity: Velocity,
    /// Where the player currently stands.
    pub target: Position,
    pub state: VariantState,
    /// Length of this tick (ms).
    pub frame_ms: f64,
    /// Length of this tick relative to the reference frame.
    pub frame_scale: f64,
}

/// Side effect requested by a policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BehaviorAction {
    /// Dasher burst started.
    Dash,
    /// Teleporter relocated; the caller already gets `to` as the new position.
    Teleport { from: Position, to: Position },
    /// Necromancer summons minions at these points.
    Summon { positions: [Position; SUMMON_COUNT] },
    /// Shooter fires one enemy-owned projectile.
    Fire { velocity: Velocity },
    /// Healer restores `amount` hp to every other enemy within `radius`.
    HealAura { radius: f64, amount: f64 },
}

/// Output from the behavior policy.
#[derive(Debug, Clone, Copy)]
pub struct BehaviorUpdate {
    /// Position before integration (differs from the input only on teleport).
    pub position: Position,
    pub velocity: Velocity,
    pub state: VariantState,
    pub action: Option<BehaviorAction>,
}

/// Evaluate the policy for one enemy.
pub fn evaluate<R: Rng + ?Sized>(ctx: &BehaviorContext, rng: &mut R) -> BehaviorUpdate {
    let speed = get_profile(ctx.variant).speed;

    match ctx.state {
        VariantState::Circler {
            orbit_angle,
            orbit_radius,
        } => evaluate_circler(ctx, speed, orbit_angle, orbit_radius),
        VariantState::Dasher { dash_timer_ms } => evaluate_dasher(ctx, rng, dash_timer_ms),
        VariantState::Teleporter { teleport_timer_ms } => {
            evaluate_teleporter(ctx, rng, speed, teleport_timer_ms)
        }
        VariantState::Necromancer { summon_timer_ms } => {
            evaluate_necromancer(ctx, rng, speed, summon_timer_ms)
        }
        VariantState::Shooter { shot_timer_ms } => {
            evaluate_shooter(ctx, rng, speed, shot_timer_ms)
        }
        VariantState::Shield { shield, max_shield } => {
            evaluate_shield(ctx, speed, shield, max_shield)
        }
        VariantState::Healer => evaluate_healer(ctx, speed),
        VariantState::Chase => unchanged_state(ctx, chase(ctx, speed)),
    }
}

fn unchanged_state(ctx: &BehaviorContext, velocity: Velocity) -> BehaviorUpdate {
    BehaviorUpdate {
        position: ctx.position,
        velocity,
        state: ctx.state,
        action: None,
    }
}

/// Straight at the player.
fn chase(ctx: &BehaviorContext, speed: f64) -> Velocity {
    let (dir, _) = ctx.position.direction_to(&ctx.target);
    Velocity::from_dvec2(dir * speed)
}

/// Straight away from the player.
fn retreat(ctx: &BehaviorContext, speed: f64) -> Velocity {
    let (dir, _) = ctx.position.direction_to(&ctx.target);
    Velocity::from_dvec2(-dir * speed)
}

/// Chase beyond `comfort`, back off inside it.
fn keep_distance(ctx: &BehaviorContext, speed: f64, comfort: f64) -> Velocity {
    if ctx.position.distance_to(&ctx.target) > comfort {
        chase(ctx, speed)
    } else {
        retreat(ctx, speed)
    }
}

fn evaluate_circler(
    ctx: &BehaviorContext,
    speed: f64,
    orbit_angle: f64,
    orbit_radius: f64,
) -> BehaviorUpdate {
    let orbit_angle = orbit_angle + CIRCLER_ANGLE_STEP * ctx.frame_scale;
    let orbit_point = ctx.target.polar_offset(orbit_radius, orbit_angle);
    let (dir, distance) = ctx.position.direction_to(&orbit_point);

    // Sitting exactly on the orbit point keeps the previous velocity.
    let velocity = if distance < MIN_DISTANCE_EPSILON {
        ctx.velocity
    } else {
        Velocity::from_dvec2(dir * speed * CIRCLER_SPEED_FACTOR)
    };

    BehaviorUpdate {
        position: ctx.position,
        velocity,
        state: VariantState::Circler {
            orbit_angle,
            orbit_radius,
        },
        action: None,
    }
}

fn evaluate_dasher<R: Rng + ?Sized>(
    ctx: &BehaviorContext,
    rng: &mut R,
    dash_timer_ms: f64,
) -> BehaviorUpdate {
    let dash_timer_ms = dash_timer_ms - ctx.frame_ms;

    if dash_timer_ms <= 0.0 {
        let (dir, _) = ctx.position.direction_to(&ctx.target);
        return BehaviorUpdate {
            position: ctx.position,
            velocity: Velocity::from_dvec2(dir * DASHER_BURST_SPEED),
            state: VariantState::Dasher {
                dash_timer_ms: DASHER_REARM_MS + rng.gen::<f64>() * DASHER_REARM_JITTER_MS,
            },
            action: Some(BehaviorAction::Dash),
        };
    }

    let mut velocity = ctx.velocity;
    velocity.decay(DASHER_DECAY, ctx.frame_scale);
    BehaviorUpdate {
        position: ctx.position,
        velocity,
        state: VariantState::Dasher { dash_timer_ms },
        action: None,
    }
}

fn evaluate_teleporter<R: Rng + ?Sized>(
    ctx: &BehaviorContext,
    rng: &mut R,
    speed: f64,
    teleport_timer_ms: f64,
) -> BehaviorUpdate {
    let teleport_timer_ms = teleport_timer_ms - ctx.frame_ms;
    let distance = ctx.position.distance_to(&ctx.target);

    if teleport_timer_ms <= 0.0 && distance > TELEPORTER_MIN_DISTANCE {
        let angle = rng.gen::<f64>() * TAU;
        let to = ctx.target.polar_offset(TELEPORTER_LANDING_RADIUS, angle);
        return BehaviorUpdate {
            position: to,
            velocity: ctx.velocity,
            state: VariantState::Teleporter {
                teleport_timer_ms: TELEPORTER_REARM_MS
                    + rng.gen::<f64>() * TELEPORTER_REARM_JITTER_MS,
            },
            action: Some(BehaviorAction::Teleport {
                from: ctx.position,
                to,
            }),
        };
    }

    // An expired timer stays armed until the player is far enough away.
    BehaviorUpdate {
        position: ctx.position,
        velocity: chase(ctx, speed),
        state: VariantState::Teleporter { teleport_timer_ms },
        action: None,
    }
}

fn evaluate_necromancer<R: Rng + ?Sized>(
    ctx: &BehaviorContext,
    rng: &mut R,
    speed: f64,
    summon_timer_ms: f64,
) -> BehaviorUpdate {
    let mut summon_timer_ms = summon_timer_ms - ctx.frame_ms;
    let mut action = None;

    if summon_timer_ms <= 0.0 {
        summon_timer_ms =
            NECROMANCER_REARM_MS + rng.gen::<f64>() * NECROMANCER_REARM_JITTER_MS;
        let positions = std::array::from_fn(|j| {
            let angle = TAU * j as f64 / SUMMON_COUNT as f64;
            ctx.position.polar_offset(NECROMANCER_SUMMON_RADIUS, angle)
        });
        action = Some(BehaviorAction::Summon { positions });
    }

    BehaviorUpdate {
        position: ctx.position,
        velocity: keep_distance(ctx, speed, NECROMANCER_COMFORT_RADIUS),
        state: VariantState::Necromancer { summon_timer_ms },
        action,
    }
}

fn evaluate_healer(ctx: &BehaviorContext, speed: f64) -> BehaviorUpdate {
    BehaviorUpdate {
        position: ctx.position,
        velocity: keep_distance(ctx, speed, HEALER_COMFORT_RADIUS),
        state: ctx.state,
        action: Some(BehaviorAction::HealAura {
            radius: HEALER_AURA_RADIUS,
            amount: HEALER_RATE_PER_MS * ctx.frame_ms,
        }),
    }
}

fn evaluate_shooter<R: Rng + ?Sized>(
    ctx: &BehaviorContext,
    rng: &mut R,
    speed: f64,
    shot_timer_ms: f64,
) -> BehaviorUpdate {
    let (dir, distance) = ctx.position.direction_to(&ctx.target);
    let velocity = if distance < SHOOTER_STANDOFF_DISTANCE {
        retreat(ctx, speed)
    } else {
        chase(ctx, speed)
    };

    let mut shot_timer_ms = shot_timer_ms - ctx.frame_ms;
    let mut action = None;
    if shot_timer_ms <= 0.0 {
        shot_timer_ms = SHOOTER_REARM_MS + rng.gen::<f64>() * SHOOTER_REARM_JITTER_MS;
        action = Some(BehaviorAction::Fire {
            velocity: Velocity::from_dvec2(dir * ENEMY_SHOT_SPEED),
        });
    }

    BehaviorUpdate {
        position: ctx.position,
        velocity,
        state: VariantState::Shooter { shot_timer_ms },
        action,
    }
}

fn evaluate_shield(
    ctx: &BehaviorContext,
    speed: f64,
    shield: f64,
    max_shield: f64,
) -> BehaviorUpdate {
    let shield = if shield < max_shield {
        (shield + SHIELD_REGEN_PER_MS * ctx.frame_ms).min(max_shield)
    } else {
        shield
    };

    BehaviorUpdate {
        position: ctx.position,
        velocity: chase(ctx, speed),
        state: VariantState::Shield { shield, max_shield },
        action: None,
    }
}
