//! Feedback events emitted by the simulation for audio and UI collaborators.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Fire-and-forget feedback signal. Drained once per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedbackEvent {
    /// A weapon or an enemy fired.
    Shoot { owner: Owner },
    /// Damage landed on an enemy (projectile or area pulse).
    Hit,
    /// An enemy was killed by the player.
    Kill { variant: EnemyVariant, x: f64, y: f64 },
    /// An xp orb was collected.
    Xp { value: u32 },
    /// The player gained a level and upgrade options are waiting.
    LevelUp { level: u32 },
    /// A reward container opened.
    RewardOpened { reward: RewardKind },
    /// The player died.
    Death,
}
