//! Attack AI for SORTIE.
//!
//! Implements the attack-path curve library, per-kind curve profiles with
//! the weighted curve factory, and the per-unit lifecycle state machine.

pub mod curves;
pub mod fsm;
pub mod profiles;

pub use sortie_core as core;
