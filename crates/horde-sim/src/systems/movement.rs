//! Kinematic integration for the player and projectiles.
//!
//! Also records projectile position history for trail rendering and
//! culls free projectiles by lifetime and distance.

use horde_core::components::{PositionHistory, Projectile, ProjectileMotion};
use horde_core::constants::*;
use horde_core::types::{Position, Velocity};

use crate::state::SimulationState;

pub fn run(state: &mut SimulationState) {
    move_player(state);
    move_projectiles(state);
    state.flush();
}

/// Move the player along the normalized intent at its move speed.
pub fn move_player(state: &mut SimulationState) {
    let frame_scale = state.time.frame_scale();
    let player = &mut state.player;

    if state.intent != glam::DVec2::ZERO {
        let step = state.intent * player.move_speed * frame_scale;
        player.position = Position::from_dvec2(player.position.as_dvec2() + step);
        player.facing = state.intent.y.atan2(state.intent.x);
    }
    player.flash_timer = (player.flash_timer - state.time.frame_ms / 1000.0).max(0.0);
}

fn move_projectiles(state: &mut SimulationState) {
    let frame_scale = state.time.frame_scale();
    let frame_ms = state.time.frame_ms;
    let anchor = state.player.position;

    for (entity, (projectile, pos, vel, history)) in state.world.query_mut::<(
        &mut Projectile,
        &mut Position,
        &Velocity,
        &mut PositionHistory,
    )>() {
        let orbiting = match &mut projectile.motion {
            ProjectileMotion::Orbit { angle, radius } => {
                *angle += ORBIT_ANGLE_STEP * frame_scale;
                *pos = anchor.polar_offset(*radius, *angle);
                true
            }
            ProjectileMotion::Free => {
                pos.integrate(vel, frame_scale);
                false
            }
        };

        history.positions.insert(0, *pos);
        history.positions.truncate(PROJECTILE_TRAIL_LENGTH);

        if orbiting {
            continue;
        }

        if let Some(lifetime) = &mut projectile.lifetime_ms {
            *lifetime -= frame_ms;
            if *lifetime <= 0.0 {
                state.commands.despawn(entity);
                continue;
            }
        }

        if pos.distance_to(&anchor) > PROJECTILE_MAX_DISTANCE {
            state.commands.despawn(entity);
        }
    }
}
