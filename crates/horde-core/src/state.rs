//! Read-only views handed to the rendering and HUD collaborators each frame.

use serde::{Deserialize, Serialize};

use crate::components::{ProjectileSource, VariantState};
use crate::enums::*;
use crate::types::{Position, SimTime};

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub paused: bool,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub particles: Vec<ParticleView>,
    pub xp_orbs: Vec<XpOrbView>,
    pub reward_containers: Vec<RewardContainerView>,
    pub damage_numbers: Vec<DamageNumberView>,
    pub camera: CameraView,
    /// Upgrade options on offer (non-empty only in `LevelUp`).
    pub offered_upgrades: Vec<UpgradeId>,
    pub hud: HudStats,
}

/// HUD counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HudStats {
    pub level: u32,
    pub hp: f64,
    pub max_hp: f64,
    pub xp: u32,
    pub xp_to_next: u32,
    pub kills: u32,
    pub elapsed_ms: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub radius: f64,
    pub facing: f64,
    pub flash_timer: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub variant: EnemyVariant,
    pub position: Position,
    pub radius: f64,
    pub hp: f64,
    pub max_hp: f64,
    pub facing: f64,
    pub flash_timer: f64,
    pub hit_scale: f64,
    pub state: VariantState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub owner: Owner,
    pub source: ProjectileSource,
    pub position: Position,
    pub radius: f64,
    /// Recent positions (newest first).
    pub trail: Vec<Position>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    pub size: f64,
    pub rotation: f64,
    pub life: f64,
    pub tint: Tint,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XpOrbView {
    pub id: u32,
    pub position: Position,
    pub value: u32,
    pub pulse_phase: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardContainerView {
    pub id: u32,
    pub position: Position,
    pub opened: bool,
    pub pulse_phase: f64,
    pub scale: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageNumberView {
    pub position: Position,
    pub value: f64,
    pub life: f64,
    pub scale: f64,
}

/// Follow target and shake offset for the camera transform.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub target: Position,
    pub shake_offset_x: f64,
    pub shake_offset_y: f64,
}
