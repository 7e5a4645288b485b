//! Simulation engine for HORDE.
//!
//! Owns the hecs ECS world and the session singletons, runs the per-tick
//! pipeline and produces RenderSnapshots for the frontend.

pub mod arsenal;
pub mod config;
pub mod engine;
pub mod progression;
pub mod state;
pub mod systems;
pub mod world_setup;

pub use config::SimConfig;
pub use engine::SimulationEngine;
pub use horde_core as core;
