//! Error types for rejected external requests.

use crate::enums::UpgradeId;

/// Why a command was rejected. Rejections never alter simulation state.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("game can only be started from the menu")]
    NotInMenu,
    #[error("no level-up is pending")]
    NotLevelingUp,
    #[error("upgrade {0:?} is not among the offered options")]
    UpgradeNotOffered(UpgradeId),
    #[error("session is still running")]
    NotDead,
    #[error("movement intent must be finite, got ({0}, {1})")]
    InvalidIntent(f64, f64),
}
