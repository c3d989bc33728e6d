//! Wave orchestration for SORTIE.
//!
//! Owns the formation arena (hecs ECS world), the wave orchestrator that
//! pulls units out of formation on attack runs, and a headless engine that
//! drives both with caller-supplied deltas and produces snapshots.

pub mod components;
pub mod engine;
pub mod formation;
pub mod orchestrator;
pub mod snapshot;
pub mod surface;

pub use engine::SwarmEngine;
pub use formation::Formation;
pub use orchestrator::WaveOrchestrator;
pub use sortie_core as core;
