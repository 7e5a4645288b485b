//! Weapon identity table.
//!
//! Base stats and flight parameters per named weapon. Owned weapons copy
//! the mutable stats (damage, cooldown, count) at acquisition; flight
//! parameters are always read from here.

use horde_core::components::Weapon;
use horde_core::constants::*;
use horde_core::enums::{WeaponId, WeaponKind};

/// How projectile-kind weapons pick their headings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Aim {
    /// One projectile at each of the nearest living enemies.
    Nearest,
    /// A fixed fan of evenly spaced directions, rotating with elapsed time.
    Fan { directions: usize, rotation_rate: f64 },
}

/// Static description of a weapon identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponSpec {
    pub kind: WeaponKind,
    pub damage: f64,
    pub cooldown_ms: f64,
    pub projectile_count: u32,
    /// Projectile speed (pixels per reference frame). Unused by orbit/area.
    pub speed: f64,
    /// Projectile collision radius. Unused by area.
    pub size: f64,
    pub pierce: u32,
    pub aim: Aim,
    /// Orbit ring radius or area pulse radius.
    pub radius: f64,
}

const fn projectile(
    damage: f64,
    cooldown_ms: f64,
    projectile_count: u32,
    speed: f64,
    size: f64,
    pierce: u32,
) -> WeaponSpec {
    WeaponSpec {
        kind: WeaponKind::Projectile,
        damage,
        cooldown_ms,
        projectile_count,
        speed,
        size,
        pierce,
        aim: Aim::Nearest,
        radius: 0.0,
    }
}

const fn orbit(damage: f64, cooldown_ms: f64, projectile_count: u32) -> WeaponSpec {
    WeaponSpec {
        kind: WeaponKind::Orbit,
        damage,
        cooldown_ms,
        projectile_count,
        speed: 0.0,
        size: ORBIT_PROJECTILE_SIZE,
        pierce: 0,
        aim: Aim::Nearest,
        radius: ORBIT_RADIUS,
    }
}

/// Look up the spec for a weapon identity.
pub fn spec(id: WeaponId) -> WeaponSpec {
    match id {
        WeaponId::MagicBolt => projectile(10.0, 500.0, 1, 8.0, 6.0, 0),
        WeaponId::Fireball => projectile(25.0, 1500.0, 1, 6.0, 10.0, 0),
        WeaponId::Knife => projectile(8.0, 300.0, 2, 12.0, 6.0, 3),
        WeaponId::Axe => orbit(15.0, 100.0, 3),
        WeaponId::Garlic => WeaponSpec {
            kind: WeaponKind::Area,
            damage: 5.0,
            cooldown_ms: 500.0,
            projectile_count: 1,
            speed: 0.0,
            size: 0.0,
            pierce: 0,
            aim: Aim::Nearest,
            radius: AREA_PULSE_RADIUS,
        },
        WeaponId::HolyWater => projectile(12.0, 2000.0, 1, 5.0, 8.0, 5),
        WeaponId::Bible => orbit(20.0, 200.0, 2),
        WeaponId::Bone => WeaponSpec {
            aim: Aim::Fan {
                directions: FAN_DIRECTIONS,
                rotation_rate: FAN_ROTATION_RATE,
            },
            ..projectile(15.0, 800.0, 4, 7.0, 8.0, 2)
        },
        WeaponId::CherryBomb => projectile(50.0, 3000.0, 1, 4.0, 15.0, 10),
    }
}

/// Build a level-1 weapon of the given identity, never fired.
pub fn build_weapon(id: WeaponId) -> Weapon {
    let spec = spec(id);
    Weapon {
        id,
        level: 1,
        damage: spec.damage,
        cooldown_ms: spec.cooldown_ms,
        last_fired_ms: 0.0,
        projectile_count: spec.projectile_count,
        kind: spec.kind,
    }
}
