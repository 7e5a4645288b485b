//! Session configuration, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use horde_core::constants::*;

/// Why a configuration could not be loaded.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for starting a new simulation.
///
/// Every field has a default, so a partial JSON document is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed, intents and frame lengths = same session.
    pub seed: u64,
    /// Spawn jitter extent along the horizontal sides.
    pub viewport_width: f64,
    /// Spawn jitter extent along the vertical sides.
    pub viewport_height: f64,
    /// Per-tick enemy spawn probability at time zero.
    pub spawn_base_rate: f64,
    /// Elapsed time over which the spawn probability doubles.
    pub spawn_ramp_ms: f64,
    /// Offset from the player along the chosen spawn side.
    pub spawn_distance: f64,
    pub reward_spawn_chance: f64,
    pub max_reward_containers: usize,
    /// Keep particles and damage numbers in-core.
    pub cosmetics: bool,
    /// Upper clamp for a single tick.
    pub max_frame_ms: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            spawn_base_rate: DEFAULT_SPAWN_BASE_RATE,
            spawn_ramp_ms: DEFAULT_SPAWN_RAMP_MS,
            spawn_distance: DEFAULT_SPAWN_DISTANCE,
            reward_spawn_chance: DEFAULT_REWARD_SPAWN_CHANCE,
            max_reward_containers: DEFAULT_MAX_REWARD_CONTAINERS,
            cosmetics: true,
            max_frame_ms: DEFAULT_MAX_FRAME_MS,
        }
    }
}

impl SimConfig {
    /// Parse a config from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
