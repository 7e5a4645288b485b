//! Pipeline stages run once per playing tick, in this order:
//! spawn, fire, move, behave, collide, pick up, feedback.
//!
//! Each stage takes `&mut SimulationState`, stages its spawns and despawns
//! on the command buffer and flushes before returning.

pub mod combat;
pub mod enemy_ai;
pub mod feedback;
pub mod movement;
pub mod pickups;
pub mod snapshot;
pub mod spawn_director;
pub mod weapons;
