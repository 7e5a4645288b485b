//! Core types and definitions for the HORDE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, snapshot views, feedback events, errors and constants.
//! It has no dependency on the ECS runtime or any presentation layer.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
