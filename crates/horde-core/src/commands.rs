//! Commands sent from the UI/input collaborators to the simulation.
//!
//! Commands are either applied immediately or queued for the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::UpgradeId;

/// All externally driven actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave the menu and begin a fresh session.
    StartGame,
    /// Pick one of the currently offered upgrades.
    SelectUpgrade { upgrade: UpgradeId },
    /// Toggle the orthogonal pause flag.
    SetPaused { paused: bool },
    /// Abstract movement intent; normalized by the simulation.
    SetMovementIntent { dx: f64, dy: f64 },
    /// Return to the menu after death.
    ReturnToMenu,
}
