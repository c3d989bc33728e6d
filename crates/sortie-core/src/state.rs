//! Serializable snapshots of the simulation, one per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{CurveKind, LifecycleState};
use crate::events::WaveEvent;
use crate::types::{GridPos, SimClock};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSnapshot {
    pub grid: GridPos,
    pub position: Vec2,
    pub state: LifecycleState,
    /// Curve being flown, present only while attacking.
    pub curve: Option<CurveKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwarmSnapshot {
    pub time: SimClock,
    pub units: Vec<UnitSnapshot>,
    pub active_waves: usize,
    pub events: Vec<WaveEvent>,
}
