//! Snapshot system: builds the read-only views handed to rendering and the HUD.
//!
//! This system is read-only. Id-carrying lists are sorted by id.

use horde_core::components::*;
use horde_core::state::*;
use horde_core::types::Position;

use crate::state::SimulationState;

/// Build a complete RenderSnapshot from the current state.
pub fn build_snapshot(state: &SimulationState) -> RenderSnapshot {
    RenderSnapshot {
        time: state.time,
        phase: state.phase,
        paused: state.paused,
        player: PlayerView {
            position: state.player.position,
            radius: state.player.radius,
            facing: state.player.facing,
            flash_timer: state.player.flash_timer,
        },
        enemies: build_enemies(state),
        projectiles: build_projectiles(state),
        particles: build_particles(state),
        xp_orbs: build_xp_orbs(state),
        reward_containers: build_reward_containers(state),
        damage_numbers: build_damage_numbers(state),
        camera: CameraView {
            target: state.camera.target,
            shake_offset_x: state.camera.offset_x,
            shake_offset_y: state.camera.offset_y,
        },
        offered_upgrades: state.offered_upgrades.clone(),
        hud: build_hud(state),
    }
}

/// HUD counters for the current session.
pub fn build_hud(state: &SimulationState) -> HudStats {
    HudStats {
        level: state.player.level,
        hp: state.player.hp,
        max_hp: state.player.max_hp,
        xp: state.player.xp,
        xp_to_next: state.player.xp_to_next,
        kills: state.stats.kills,
        elapsed_ms: state.time.elapsed_ms,
    }
}

fn build_enemies(state: &SimulationState) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = state
        .world
        .query::<(&Enemy, &Position, &Health, &Collider)>()
        .iter()
        .map(|(_, (enemy, pos, health, collider))| EnemyView {
            id: enemy.id,
            variant: enemy.variant,
            position: *pos,
            radius: collider.radius,
            hp: health.current,
            max_hp: health.max,
            facing: enemy.facing,
            flash_timer: enemy.flash_timer,
            hit_scale: enemy.hit_scale,
            state: enemy.state,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(state: &SimulationState) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = state
        .world
        .query::<(&Projectile, &Position, &Collider, &PositionHistory)>()
        .iter()
        .map(|(_, (projectile, pos, collider, history))| ProjectileView {
            id: projectile.id,
            owner: projectile.owner,
            source: projectile.source,
            position: *pos,
            radius: collider.radius,
            trail: history.positions.clone(),
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_particles(state: &SimulationState) -> Vec<ParticleView> {
    state
        .world
        .query::<(&Particle, &Position)>()
        .iter()
        .map(|(_, (particle, pos))| ParticleView {
            position: *pos,
            size: particle.size,
            rotation: particle.rotation,
            life: particle.life,
            tint: particle.tint,
        })
        .collect()
}

fn build_xp_orbs(state: &SimulationState) -> Vec<XpOrbView> {
    let mut orbs: Vec<XpOrbView> = state
        .world
        .query::<(&XpOrb, &Position)>()
        .iter()
        .map(|(_, (orb, pos))| XpOrbView {
            id: orb.id,
            position: *pos,
            value: orb.value,
            pulse_phase: orb.pulse_phase,
        })
        .collect();

    orbs.sort_by_key(|o| o.id);
    orbs
}

fn build_reward_containers(state: &SimulationState) -> Vec<RewardContainerView> {
    let mut containers: Vec<RewardContainerView> = state
        .world
        .query::<(&RewardContainer, &Position)>()
        .iter()
        .map(|(_, (container, pos))| RewardContainerView {
            id: container.id,
            position: *pos,
            opened: container.opened,
            pulse_phase: container.pulse_phase,
            scale: container.scale,
        })
        .collect();

    containers.sort_by_key(|c| c.id);
    containers
}

fn build_damage_numbers(state: &SimulationState) -> Vec<DamageNumberView> {
    state
        .world
        .query::<(&DamageNumber, &Position)>()
        .iter()
        .map(|(_, (number, pos))| DamageNumberView {
            position: *pos,
            value: number.value,
            life: number.life,
            scale: number.scale,
        })
        .collect()
}
