//! Enemy AI for HORDE.
//!
//! Implements per-variant stat profiles and the movement/behavior
//! policies that drive every enemy each tick.

pub mod policy;
pub mod profiles;

pub use horde_core as core;

#[cfg(test)]
mod tests;
