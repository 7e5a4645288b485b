//! Feedback system: cosmetic particles, damage numbers and the camera.

use std::f64::consts::TAU;

use rand::Rng;

use horde_core::components::{DamageNumber, Particle};
use horde_core::constants::*;
use horde_core::enums::Tint;
use horde_core::types::{Position, Velocity};

use crate::state::{FxRequest, SimulationState};

pub fn run(state: &mut SimulationState) {
    materialize_fx(state);
    update_particles(state);
    update_damage_numbers(state);
    state.flush();
    update_camera(state);
}

/// Turn queued effect requests into particle and damage-number entities.
fn materialize_fx(state: &mut SimulationState) {
    for request in std::mem::take(&mut state.fx) {
        match request {
            FxRequest::Sparks { at, count, tint } => {
                for i in 0..count {
                    let angle = TAU * i as f64 / count as f64 + state.rng.gen::<f64>() * 0.5;
                    let speed = 2.0 + state.rng.gen::<f64>() * 4.0;
                    let size = 2.0 + state.rng.gen::<f64>() * 4.0;
                    let spin = (state.rng.gen::<f64>() - 0.5) * 0.2;
                    spawn_particle(state, at, Velocity::from_polar(speed, angle), size, spin, tint);
                }
            }
            FxRequest::Explosion { at, size, tint } => {
                let count = (size * 2.0).floor() as usize;
                for i in 0..count {
                    let angle = TAU * i as f64 / count as f64;
                    let speed = 3.0 + state.rng.gen::<f64>() * 6.0;
                    let debris = 3.0 + state.rng.gen::<f64>() * 5.0;
                    let spin = (state.rng.gen::<f64>() - 0.5) * 0.3;
                    spawn_particle(state, at, Velocity::from_polar(speed, angle), debris, spin, tint);
                }
            }
            FxRequest::DamageNumber { at, value } => {
                let velocity = Velocity::new(
                    (state.rng.gen::<f64>() - 0.5) * 2.0,
                    -2.0 - state.rng.gen::<f64>() * 2.0,
                );
                state.commands.spawn((
                    DamageNumber {
                        value,
                        life: 1.0,
                        scale: 1.0,
                    },
                    at,
                    velocity,
                ));
            }
        }
    }
}

fn spawn_particle(
    state: &mut SimulationState,
    at: Position,
    velocity: Velocity,
    size: f64,
    rotation_speed: f64,
    tint: Tint,
) {
    let rotation = state.rng.gen::<f64>() * TAU;
    state.commands.spawn((
        Particle {
            life: 1.0,
            size,
            rotation,
            rotation_speed,
            tint,
        },
        at,
        velocity,
    ));
}

fn update_particles(state: &mut SimulationState) {
    let frame_scale = state.time.frame_scale();
    let frame_ms = state.time.frame_ms;

    for (entity, (particle, pos, vel)) in
        state
            .world
            .query_mut::<(&mut Particle, &mut Position, &mut Velocity)>()
    {
        pos.integrate(vel, frame_scale);
        vel.decay(PARTICLE_DECAY, frame_scale);
        particle.rotation += particle.rotation_speed * frame_scale;
        particle.life -= frame_ms / 1000.0;
        if particle.life <= 0.0 {
            state.commands.despawn(entity);
        }
    }
}

fn update_damage_numbers(state: &mut SimulationState) {
    let frame_scale = state.time.frame_scale();
    let frame_ms = state.time.frame_ms;

    for (entity, (number, pos, vel)) in
        state
            .world
            .query_mut::<(&mut DamageNumber, &mut Position, &mut Velocity)>()
    {
        pos.integrate(vel, frame_scale);
        vel.y += DAMAGE_NUMBER_GRAVITY * frame_scale;
        number.life -= frame_ms / DAMAGE_NUMBER_LIFE_MS;
        number.scale = (number.scale + DAMAGE_NUMBER_GROWTH * frame_scale).min(DAMAGE_NUMBER_MAX_SCALE);
        if number.life <= 0.0 {
            state.commands.despawn(entity);
        }
    }
}

/// Decay shake, roll this frame's jitter and ease the follow target.
pub fn update_camera(state: &mut SimulationState) {
    let frame_scale = state.time.frame_scale();
    let camera = &mut state.camera;

    camera.shake *= SHAKE_DECAY.powf(frame_scale);
    if camera.shake < SHAKE_CUTOFF {
        camera.shake = 0.0;
    }
    camera.offset_x = (state.rng.gen::<f64>() - 0.5) * camera.shake;
    camera.offset_y = (state.rng.gen::<f64>() - 0.5) * camera.shake;

    let follow = 1.0 - (1.0 - CAMERA_FOLLOW_LERP).powf(frame_scale);
    let delta = state.player.position.as_dvec2() - camera.target.as_dvec2();
    camera.target = Position::from_dvec2(camera.target.as_dvec2() + delta * follow);
}
