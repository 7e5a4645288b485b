//! Simulation engine.
//!
//! `SimulationEngine` owns the `SimulationState`, processes commands, runs
//! the pipeline stages and produces `RenderSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::World;
use tracing::{debug, info};

use horde_core::commands::PlayerCommand;
use horde_core::components::{Player, Weapon};
use horde_core::constants::MIN_DISTANCE_EPSILON;
use horde_core::enums::{GamePhase, UpgradeId};
use horde_core::error::CommandError;
use horde_core::events::FeedbackEvent;
use horde_core::state::{HudStats, RenderSnapshot};
use horde_core::types::SimTime;

use crate::config::SimConfig;
use crate::progression;
use crate::state::SimulationState;
use crate::systems;

/// One pipeline stage.
type Stage = fn(&mut SimulationState);

/// Stages in pipeline order.
const PIPELINE: [(&str, Stage); 7] = [
    ("spawn_director", systems::spawn_director::run),
    ("weapons", systems::weapons::run),
    ("movement", systems::movement::run),
    ("enemy_ai", systems::enemy_ai::run),
    ("combat", systems::combat::run),
    ("pickups", systems::pickups::run),
    ("feedback", systems::feedback::run),
];

/// The simulation engine. Owns all sim state.
pub struct SimulationEngine {
    state: SimulationState,
    command_queue: VecDeque<PlayerCommand>,
}

impl SimulationEngine {
    /// Create a new engine, sitting in the menu.
    pub fn new(config: SimConfig) -> Self {
        Self {
            state: SimulationState::new(config),
            command_queue: VecDeque::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply a command immediately.
    pub fn apply_command(&mut self, command: PlayerCommand) -> Result<(), CommandError> {
        match command {
            PlayerCommand::StartGame => {
                if self.state.phase != GamePhase::Menu {
                    return Err(CommandError::NotInMenu);
                }
                self.state.reset_session();
                self.state.phase = GamePhase::Playing;
                info!(seed = self.state.config.seed, "session started");
            }
            PlayerCommand::SelectUpgrade { upgrade } => {
                progression::select_upgrade(&mut self.state, upgrade)?;
            }
            PlayerCommand::SetPaused { paused } => {
                self.state.paused = paused;
                debug!(paused, "pause toggled");
            }
            PlayerCommand::SetMovementIntent { dx, dy } => {
                if !dx.is_finite() || !dy.is_finite() {
                    return Err(CommandError::InvalidIntent(dx, dy));
                }
                let intent = DVec2::new(dx, dy);
                self.state.intent = if intent.length() < MIN_DISTANCE_EPSILON {
                    DVec2::ZERO
                } else {
                    intent.normalize()
                };
            }
            PlayerCommand::ReturnToMenu => {
                if self.state.phase != GamePhase::Dead {
                    return Err(CommandError::NotDead);
                }
                self.state.reset_session();
                self.state.phase = GamePhase::Menu;
                debug!("returned to menu");
            }
        }
        Ok(())
    }

    /// Leave the menu and begin a fresh session. Ignored outside the menu.
    pub fn start_game(&mut self) {
        self.apply_logged(PlayerCommand::StartGame);
    }

    /// Resolve a pending level-up. Ignored unless `upgrade` is on offer.
    pub fn select_upgrade(&mut self, upgrade: UpgradeId) {
        self.apply_logged(PlayerCommand::SelectUpgrade { upgrade });
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.apply_logged(PlayerCommand::SetPaused { paused });
    }

    /// Set the movement intent. Any non-zero vector is normalized.
    pub fn set_movement_intent(&mut self, dx: f64, dy: f64) {
        self.apply_logged(PlayerCommand::SetMovementIntent { dx, dy });
    }

    /// Go back to the menu after death.
    pub fn return_to_menu(&mut self) {
        self.apply_logged(PlayerCommand::ReturnToMenu);
    }

    fn apply_logged(&mut self, command: PlayerCommand) {
        if let Err(err) = self.apply_command(command) {
            debug!(%err, "command rejected");
        }
    }

    /// Advance the simulation by one frame of `elapsed_ms` and drain feedback events.
    ///
    /// Queued commands are applied first. Outside `Playing`, or while paused,
    /// nothing else happens.
    pub fn tick(&mut self, elapsed_ms: f64) -> Vec<FeedbackEvent> {
        while let Some(command) = self.command_queue.pop_front() {
            self.apply_logged(command);
        }

        if self.state.is_playing() && !self.state.paused {
            let frame_ms = if elapsed_ms.is_finite() {
                elapsed_ms.clamp(0.0, self.state.config.max_frame_ms)
            } else {
                0.0
            };
            self.run_systems(frame_ms);
        }

        std::mem::take(&mut self.state.events)
    }

    /// Run all stages in order. A death mid-pipeline skips the rest.
    fn run_systems(&mut self, frame_ms: f64) {
        self.state.time.advance(frame_ms);

        for (name, stage) in PIPELINE {
            stage(&mut self.state);
            if self.state.phase == GamePhase::Dead {
                debug!(stage = name, tick = self.state.time.tick, "pipeline halted by death");
                break;
            }
        }
    }

    /// Build the render snapshot for the current state.
    pub fn snapshot(&self) -> RenderSnapshot {
        systems::snapshot::build_snapshot(&self.state)
    }

    pub fn hud_stats(&self) -> HudStats {
        systems::snapshot::build_hud(&self.state)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    pub fn time(&self) -> SimTime {
        self.state.time
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn loadout(&self) -> &[Weapon] {
        &self.state.loadout
    }

    /// Upgrade options on offer (empty unless leveling up).
    pub fn offered_upgrades(&self) -> &[UpgradeId] {
        &self.state.offered_upgrades
    }

    pub fn kills(&self) -> u32 {
        self.state.stats.kills
    }

    pub fn config(&self) -> &SimConfig {
        &self.state.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.state.world
    }

    /// Mutable access to the whole state (for tests).
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    /// Spawn an enemy immediately, bypassing the director (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        variant: horde_core::enums::EnemyVariant,
        position: horde_core::types::Position,
    ) -> hecs::Entity {
        let id = crate::world_setup::spawn_enemy(&mut self.state, variant, position);
        self.state.flush();
        self.find_enemy_entity(id)
    }

    /// Spawn an xp orb at rest immediately (for tests).
    #[cfg(test)]
    pub fn spawn_test_orb(&mut self, position: horde_core::types::Position, value: u32) {
        crate::world_setup::spawn_xp_orb(
            &mut self.state,
            position,
            horde_core::types::Velocity::zero(),
            value,
        );
        self.state.flush();
    }

    #[cfg(test)]
    fn find_enemy_entity(&self, id: u32) -> hecs::Entity {
        let mut query = self.state.world.query::<&horde_core::components::Enemy>();
        query
            .iter()
            .find(|(_, enemy)| enemy.id == id)
            .map(|(entity, _)| entity)
            .expect("test enemy was just spawned")
    }
}
