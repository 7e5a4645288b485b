//! ECS components for hecs entities, plus the singleton records the
//! simulation keeps outside the world (player, weapons, camera).
//!
//! Components are plain data structs. Game logic lives in systems.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::Position;

/// Current and maximum hit points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Circular collision bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f64,
}

/// Variant-specific enemy payload. Each behavior only sees the fields of its own tag.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum VariantState {
    /// Plain chaser with no timers.
    #[default]
    Chase,
    Shooter {
        shot_timer_ms: f64,
    },
    Circler {
        orbit_angle: f64,
        orbit_radius: f64,
    },
    Dasher {
        dash_timer_ms: f64,
    },
    Teleporter {
        teleport_timer_ms: f64,
    },
    Necromancer {
        summon_timer_ms: f64,
    },
    Shield {
        shield: f64,
        max_shield: f64,
    },
    /// Keeps its distance and heals nearby enemies every tick.
    Healer,
}

/// An enemy. Paired with Position, Velocity, Health and Collider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Spawn-ordered id; ascending id is encounter order.
    pub id: u32,
    pub variant: EnemyVariant,
    /// Remaining white-flash time (seconds).
    pub flash_timer: f64,
    /// Cosmetic squash/stretch, eased back toward 1.
    pub hit_scale: f64,
    /// Facing angle (radians).
    pub facing: f64,
    pub state: VariantState,
}

/// Where a projectile came from. Doubles as its identity tag for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileSource {
    Weapon(WeaponId),
    Enemy(EnemyVariant),
}

/// Free flight or a slot in an orbit ring. The two are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProjectileMotion {
    Free,
    Orbit { angle: f64, radius: f64 },
}

/// A projectile. Paired with Position, Velocity, Collider and PositionHistory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub owner: Owner,
    pub source: ProjectileSource,
    pub damage: f64,
    /// Extra enemies this projectile may pass through. `None` behaves as zero.
    pub pierce: Option<u32>,
    /// Remaining lifetime (ms). `None` means no lifetime limit.
    pub lifetime_ms: Option<f64>,
    pub motion: ProjectileMotion,
}

/// An experience orb. Paired with Position and Velocity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XpOrb {
    pub id: u32,
    pub value: u32,
    /// Sticky: once set, the orb homes on the player for good.
    pub magnetized: bool,
    pub pulse_phase: f64,
}

/// A reward container (chest). Paired with Position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardContainer {
    pub id: u32,
    pub opened: bool,
    pub pulse_phase: f64,
    /// Post-open shrink animation scale.
    pub scale: f64,
    /// Simulation time left before removal, set when opened.
    pub removal_timer_ms: Option<f64>,
}

/// Cosmetic particle. Paired with Position and Velocity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    /// Remaining life (seconds, starts at 1).
    pub life: f64,
    pub size: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
    pub tint: Tint,
}

/// Floating damage number. Paired with Position and Velocity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageNumber {
    pub value: f64,
    /// Remaining life (0..1).
    pub life: f64,
    pub scale: f64,
}

/// Bounded history of recent positions for trail rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionHistory {
    /// Recent positions (newest first), up to PROJECTILE_TRAIL_LENGTH.
    pub positions: Vec<Position>,
}

/// The player character. Singleton, never despawned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    pub radius: f64,
    pub hp: f64,
    pub max_hp: f64,
    pub xp: u32,
    pub level: u32,
    pub xp_to_next: u32,
    /// Remaining white-flash time (seconds).
    pub flash_timer: f64,
    pub facing: f64,
    /// Pixels per reference frame.
    pub move_speed: f64,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: Position::default(),
            radius: PLAYER_RADIUS,
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
            xp: 0,
            level: PLAYER_START_LEVEL,
            xp_to_next: PLAYER_START_XP_TO_NEXT,
            flash_timer: 0.0,
            facing: 0.0,
            move_speed: PLAYER_MOVE_SPEED,
        }
    }
}

/// An owned weapon in the player's loadout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: WeaponId,
    pub level: u32,
    pub damage: f64,
    pub cooldown_ms: f64,
    /// Simulation timestamp of the last fire attempt.
    pub last_fired_ms: f64,
    pub projectile_count: u32,
    pub kind: WeaponKind,
}

/// Camera feedback state driven by combat events.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Camera {
    /// Follow target, eased toward the player.
    pub target: Position,
    /// Current shake magnitude.
    pub shake: f64,
    /// Jitter offset derived from `shake` this frame.
    pub offset_x: f64,
    pub offset_y: f64,
}
