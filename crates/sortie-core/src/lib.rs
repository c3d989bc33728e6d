//! Core types and definitions for the SORTIE attack-wave simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry and time types, lifecycle enums, tuning constants, the
//! orchestrator configuration, the injectable random source, events and
//! snapshots. It has no dependency on any ECS or runtime framework.

pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod random;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
