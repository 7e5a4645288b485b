//! Simulation constants and tuning parameters.
//!
//! Distances are in pixels, speeds in pixels per reference frame,
//! timers in milliseconds unless noted otherwise.

/// Frame length that per-frame rates are expressed against (60 Hz).
pub const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;

/// Longest tick accepted by the engine; longer frames are clamped.
pub const DEFAULT_MAX_FRAME_MS: f64 = 250.0;

/// Distances below this yield a zero direction vector.
pub const MIN_DISTANCE_EPSILON: f64 = 1e-6;

// --- Player ---

pub const PLAYER_RADIUS: f64 = 20.0;
pub const PLAYER_MAX_HP: f64 = 100.0;
pub const PLAYER_MOVE_SPEED: f64 = 4.0;
pub const PLAYER_START_LEVEL: u32 = 1;
pub const PLAYER_START_XP_TO_NEXT: u32 = 10;

/// Flash duration after the player or an enemy takes damage (seconds).
pub const HIT_FLASH_SECS: f64 = 0.1;

// --- Progression ---

/// Compounding multiplier applied to the xp threshold on every level-up.
pub const XP_THRESHOLD_MULTIPLIER: f64 = 1.5;

/// Number of upgrade options offered per level-up.
pub const UPGRADE_OFFER_COUNT: usize = 3;

pub const UPGRADE_DAMAGE_BONUS: f64 = 5.0;
pub const UPGRADE_COOLDOWN_FACTOR: f64 = 0.8;
pub const UPGRADE_MAX_HP_BONUS: f64 = 20.0;
pub const UPGRADE_SPEED_FACTOR: f64 = 1.1;

// --- Spawning ---

pub const DEFAULT_SPAWN_BASE_RATE: f64 = 0.02;
pub const DEFAULT_SPAWN_RAMP_MS: f64 = 60_000.0;
pub const DEFAULT_SPAWN_DISTANCE: f64 = 600.0;
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 720.0;

pub const DEFAULT_REWARD_SPAWN_CHANCE: f64 = 0.001;
pub const DEFAULT_MAX_REWARD_CONTAINERS: usize = 3;
pub const REWARD_SPAWN_MIN_DISTANCE: f64 = 400.0;
pub const REWARD_SPAWN_DISTANCE_BAND: f64 = 300.0;

// --- Projectiles ---

/// Free projectiles farther than this from the player are culled.
pub const PROJECTILE_MAX_DISTANCE: f64 = 1500.0;

/// Trail positions kept per projectile (rendering only).
pub const PROJECTILE_TRAIL_LENGTH: usize = 5;

pub const ORBIT_RADIUS: f64 = 80.0;
pub const ORBIT_ANGLE_STEP: f64 = 0.05;
pub const ORBIT_PROJECTILE_SIZE: f64 = 8.0;

pub const AREA_PULSE_RADIUS: f64 = 100.0;

/// Rotation rate of the fixed four-way fan (radians per millisecond).
pub const FAN_ROTATION_RATE: f64 = 0.001;
pub const FAN_DIRECTIONS: usize = 4;

// --- Enemy behavior ---

pub const CIRCLER_ORBIT_RADIUS: f64 = 200.0;
pub const CIRCLER_ANGLE_STEP: f64 = 0.02;
pub const CIRCLER_SPEED_FACTOR: f64 = 2.0;

pub const DASHER_INITIAL_TIMER_MS: f64 = 2000.0;
pub const DASHER_REARM_MS: f64 = 2000.0;
pub const DASHER_REARM_JITTER_MS: f64 = 1000.0;
pub const DASHER_BURST_SPEED: f64 = 15.0;
pub const DASHER_DECAY: f64 = 0.95;

pub const TELEPORTER_INITIAL_TIMER_MS: f64 = 3000.0;
pub const TELEPORTER_REARM_MS: f64 = 3000.0;
pub const TELEPORTER_REARM_JITTER_MS: f64 = 2000.0;
pub const TELEPORTER_MIN_DISTANCE: f64 = 200.0;
pub const TELEPORTER_LANDING_RADIUS: f64 = 150.0;

pub const NECROMANCER_INITIAL_TIMER_MS: f64 = 5000.0;
pub const NECROMANCER_REARM_MS: f64 = 5000.0;
pub const NECROMANCER_REARM_JITTER_MS: f64 = 3000.0;
pub const NECROMANCER_COMFORT_RADIUS: f64 = 250.0;
pub const NECROMANCER_SUMMON_RADIUS: f64 = 30.0;
pub const SUMMON_COUNT: usize = 3;

pub const HEALER_COMFORT_RADIUS: f64 = 200.0;
pub const HEALER_AURA_RADIUS: f64 = 100.0;
pub const HEALER_RATE_PER_MS: f64 = 0.01;

pub const SHOOTER_STANDOFF_DISTANCE: f64 = 300.0;
pub const SHOOTER_INITIAL_TIMER_MAX_MS: f64 = 3000.0;
pub const SHOOTER_REARM_MS: f64 = 2000.0;
pub const SHOOTER_REARM_JITTER_MS: f64 = 1000.0;
pub const ENEMY_SHOT_SPEED: f64 = 5.0;
pub const ENEMY_SHOT_DAMAGE: f64 = 10.0;
pub const ENEMY_SHOT_SIZE: f64 = 5.0;
pub const ENEMY_SHOT_LIFETIME_MS: f64 = 3000.0;

pub const SHIELD_CAPACITY: f64 = 30.0;
pub const SHIELD_REGEN_PER_MS: f64 = 0.02;

pub const KAMIKAZE_DAMAGE: f64 = 5.0;
pub const KAMIKAZE_SHAKE: f64 = 15.0;

/// Split and summoned swarm minions.
pub const MINION_HP: f64 = 10.0;
pub const SPLIT_COUNT: usize = 3;
pub const SPLIT_SPEED: f64 = 2.0;

/// Ease factor pulling the hit-impulse scale back toward 1 each frame.
pub const HIT_SCALE_EASE: f64 = 0.2;
pub const HIT_SCALE_PROJECTILE: f64 = 1.3;
pub const HIT_SCALE_AREA: f64 = 1.2;

// --- Pickups ---

pub const ORB_MAGNET_RADIUS: f64 = 150.0;
pub const ORB_HOMING_SPEED: f64 = 8.0;
pub const ORB_IDLE_DECAY: f64 = 0.95;
pub const ORB_PICKUP_PADDING: f64 = 8.0;
pub const ORB_PULSE_STEP: f64 = 0.1;

pub const REWARD_OPEN_PADDING: f64 = 20.0;
pub const REWARD_PULSE_STEP: f64 = 0.05;
pub const REWARD_OPEN_SCALE: f64 = 1.5;
pub const REWARD_REMOVAL_DELAY_MS: f64 = 500.0;
pub const REWARD_XP_ORB_COUNT: usize = 10;
pub const REWARD_XP_ORB_VALUE: u32 = 5;
pub const REWARD_HEAL_AMOUNT: f64 = 30.0;
/// Cumulative thresholds for the reward draw: scatter, heal, else level-up.
pub const REWARD_SCATTER_THRESHOLD: f64 = 0.4;
pub const REWARD_HEAL_THRESHOLD: f64 = 0.7;

// --- Feedback ---

pub const SHAKE_PER_HIT: f64 = 2.0;
pub const SHAKE_PLAYER_HIT: f64 = 5.0;
pub const SHAKE_TELEPORT: f64 = 5.0;
pub const SHAKE_REWARD: f64 = 10.0;
pub const SHAKE_DECAY: f64 = 0.9;
pub const SHAKE_CUTOFF: f64 = 0.1;
pub const CAMERA_FOLLOW_LERP: f64 = 0.1;

pub const PARTICLE_DECAY: f64 = 0.95;
pub const DAMAGE_NUMBER_GRAVITY: f64 = 0.1;
pub const DAMAGE_NUMBER_LIFE_MS: f64 = 500.0;
pub const DAMAGE_NUMBER_MAX_SCALE: f64 = 1.5;
pub const DAMAGE_NUMBER_GROWTH: f64 = 0.05;
