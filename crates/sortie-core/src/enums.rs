//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Lifecycle of a single formation unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Parked in the grid, governed by the formation.
    #[default]
    InFormation,
    /// Flying an attack curve, governed by the orchestrator.
    Attacking,
    /// Steering back to its formation anchor.
    Returning,
    /// Eliminated. Terminal.
    Destroyed,
}

impl LifecycleState {
    /// Whether the orchestrator owns writes to a unit in this state.
    pub fn is_in_flight(self) -> bool {
        matches!(self, LifecycleState::Attacking | LifecycleState::Returning)
    }

    /// Legal lifecycle moves. Destruction is reachable from any live state.
    pub fn can_transition_to(self, next: LifecycleState) -> bool {
        use LifecycleState::*;
        match (self, next) {
            (Destroyed, _) => false,
            (_, Destroyed) => true,
            (InFormation, Attacking) => true,
            (Attacking, Returning) => true,
            (Returning, InFormation) => true,
            _ => false,
        }
    }
}

/// The five attack-path families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveKind {
    /// Quadratic Bezier plunge off the bottom of the screen.
    Dive,
    /// Full revolution around the screen center.
    Loop,
    /// Sine weave while descending.
    Weave,
    /// Cubic Bezier S-curve.
    Swoop,
    /// Horizontal run, then straight down.
    Strafe,
}

impl CurveKind {
    pub const ALL: [CurveKind; 5] = [
        CurveKind::Dive,
        CurveKind::Loop,
        CurveKind::Weave,
        CurveKind::Swoop,
        CurveKind::Strafe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurveKind::Dive => "dive",
            CurveKind::Loop => "loop",
            CurveKind::Weave => "weave",
            CurveKind::Swoop => "swoop",
            CurveKind::Strafe => "strafe",
        }
    }
}
