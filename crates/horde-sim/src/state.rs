//! The single mutable aggregate every pipeline stage works on.

use glam::DVec2;
use hecs::{CommandBuffer, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use horde_core::components::{Camera, Player, Weapon};
use horde_core::enums::{GamePhase, Tint, UpgradeId, WeaponId};
use horde_core::events::FeedbackEvent;
use horde_core::types::{Position, SimTime};

use crate::arsenal;
use crate::config::SimConfig;

/// Counters that survive into the death screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub kills: u32,
}

/// Cosmetic effect requested by a gameplay stage, materialized by the feedback stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FxRequest {
    /// Small ring of sparks.
    Sparks { at: Position, count: usize, tint: Tint },
    /// Explosion whose particle count scales with `size`.
    Explosion { at: Position, size: f64, tint: Tint },
    /// Floating damage number.
    DamageNumber { at: Position, value: f64 },
}

/// All simulation state. Owned by `SimulationEngine`, borrowed by each system.
pub struct SimulationState {
    pub config: SimConfig,
    pub world: World,
    /// Staged spawns and despawns, flushed at the end of each stage.
    pub commands: CommandBuffer,
    pub rng: ChaCha8Rng,
    pub time: SimTime,
    pub phase: GamePhase,
    pub paused: bool,
    pub player: Player,
    pub loadout: Vec<Weapon>,
    /// Normalized movement intent (zero when idle).
    pub intent: DVec2,
    pub camera: Camera,
    pub stats: SessionStats,
    pub offered_upgrades: Vec<UpgradeId>,
    pub events: Vec<FeedbackEvent>,
    pub fx: Vec<FxRequest>,
    next_id: u32,
}

impl SimulationState {
    pub fn new(config: SimConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            config,
            world: World::new(),
            commands: CommandBuffer::new(),
            rng,
            time: SimTime::default(),
            phase: GamePhase::default(),
            paused: false,
            player: Player::default(),
            loadout: vec![arsenal::build_weapon(WeaponId::MagicBolt)],
            intent: DVec2::ZERO,
            camera: Camera::default(),
            stats: SessionStats::default(),
            offered_upgrades: Vec::new(),
            events: Vec::new(),
            fx: Vec::new(),
            next_id: 0,
        }
    }

    /// Discard the session and rebuild the starting loadout. The RNG stream continues.
    pub fn reset_session(&mut self) {
        self.world = World::new();
        self.commands = CommandBuffer::new();
        self.time = SimTime::default();
        self.paused = false;
        self.player = Player::default();
        self.loadout = vec![arsenal::build_weapon(WeaponId::MagicBolt)];
        self.camera = Camera::default();
        self.stats = SessionStats::default();
        self.offered_upgrades.clear();
        self.events.clear();
        self.fx.clear();
        self.next_id = 0;
    }

    /// Allocate the next entity id. Ascending id is encounter order.
    pub fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Apply staged spawns and despawns.
    pub fn flush(&mut self) {
        self.commands.run_on(&mut self.world);
    }

    /// Raise camera shake to at least `amount`.
    pub fn shake(&mut self, amount: f64) {
        self.camera.shake = self.camera.shake.max(amount);
    }

    pub fn emit(&mut self, event: FeedbackEvent) {
        self.events.push(event);
    }

    /// Queue a cosmetic effect. Dropped when cosmetics are disabled.
    pub fn request_fx(&mut self, request: FxRequest) {
        if self.config.cosmetics {
            self.fx.push(request);
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}
