//! Variant-specific stat profiles.
//!
//! Consolidates per-variant parameters for spawning, behavior and combat.

use rand::Rng;

use horde_core::components::VariantState;
use horde_core::constants::*;
use horde_core::enums::EnemyVariant;

/// Fixed stats for an enemy variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantProfile {
    pub max_hp: f64,
    /// Collision radius.
    pub radius: f64,
    /// Chase speed (pixels per reference frame).
    pub speed: f64,
    /// Value of the xp orb dropped on death.
    pub xp_value: u32,
    /// Damage dealt per reference frame of player contact.
    pub contact_damage: f64,
    /// Camera shake raised by this variant's death.
    pub death_shake: f64,
}

const fn profile(
    max_hp: f64,
    radius: f64,
    speed: f64,
    xp_value: u32,
    contact_damage: f64,
    death_shake: f64,
) -> VariantProfile {
    VariantProfile {
        max_hp,
        radius,
        speed,
        xp_value,
        contact_damage,
        death_shake,
    }
}

/// Get the stat profile for a given variant.
pub fn get_profile(variant: EnemyVariant) -> VariantProfile {
    match variant {
        EnemyVariant::Basic => profile(30.0, 15.0, 1.5, 3, 0.5, 4.0),
        EnemyVariant::Fast => profile(15.0, 10.0, 3.0, 2, 0.5, 4.0),
        EnemyVariant::Tank => profile(60.0, 20.0, 0.8, 5, 0.8, 8.0),
        EnemyVariant::Boss => profile(1000.0, 45.0, 1.0, 100, 2.0, 20.0),
        EnemyVariant::Swarm => profile(8.0, 8.0, 2.5, 1, 0.5, 4.0),
        EnemyVariant::Elite => profile(100.0, 18.0, 2.0, 15, 0.7, 4.0),
        EnemyVariant::Shooter => profile(25.0, 14.0, 0.5, 4, 0.5, 4.0),
        EnemyVariant::Splitter => profile(40.0, 16.0, 1.2, 7, 0.5, 4.0),
        EnemyVariant::Circler => profile(35.0, 12.0, 2.0, 4, 0.5, 4.0),
        EnemyVariant::Dasher => profile(50.0, 15.0, 1.0, 6, 0.5, 4.0),
        EnemyVariant::Teleporter => profile(30.0, 13.0, 1.5, 8, 0.5, 4.0),
        EnemyVariant::MiniBoss => profile(300.0, 35.0, 1.2, 40, 1.5, 4.0),
        EnemyVariant::Necromancer => profile(70.0, 16.0, 0.7, 12, 0.5, 4.0),
        EnemyVariant::Healer => profile(40.0, 14.0, 1.8, 6, 0.5, 4.0),
        EnemyVariant::Shield => profile(45.0, 15.0, 1.3, 5, 0.5, 4.0),
        // Kamikaze contact damage is the one-shot detonation, not a per-frame rate.
        EnemyVariant::Kamikaze => profile(20.0, 11.0, 3.5, 3, KAMIKAZE_DAMAGE, KAMIKAZE_SHAKE),
    }
}

/// Build the variant payload a freshly spawned enemy starts with.
pub fn initial_state<R: Rng + ?Sized>(variant: EnemyVariant, rng: &mut R) -> VariantState {
    match variant {
        EnemyVariant::Shooter => VariantState::Shooter {
            shot_timer_ms: rng.gen::<f64>() * SHOOTER_INITIAL_TIMER_MAX_MS,
        },
        EnemyVariant::Circler => VariantState::Circler {
            orbit_angle: rng.gen::<f64>() * std::f64::consts::TAU,
            orbit_radius: CIRCLER_ORBIT_RADIUS,
        },
        EnemyVariant::Dasher => VariantState::Dasher {
            dash_timer_ms: DASHER_INITIAL_TIMER_MS,
        },
        EnemyVariant::Teleporter => VariantState::Teleporter {
            teleport_timer_ms: TELEPORTER_INITIAL_TIMER_MS,
        },
        EnemyVariant::Necromancer => VariantState::Necromancer {
            summon_timer_ms: NECROMANCER_INITIAL_TIMER_MS,
        },
        EnemyVariant::Shield => VariantState::Shield {
            shield: SHIELD_CAPACITY,
            max_shield: SHIELD_CAPACITY,
        },
        EnemyVariant::Healer => VariantState::Healer,
        _ => VariantState::Chase,
    }
}
