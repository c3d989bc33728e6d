//! Events emitted by the orchestrator for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::CurveKind;
use crate::types::GridPos;

/// One attack run assigned at launch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchedUnit {
    pub unit: GridPos,
    pub curve: CurveKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WaveEvent {
    /// A wave left the formation.
    WaveLaunched {
        wave_id: u32,
        members: Vec<LaunchedUnit>,
    },
    /// A unit finished its curve and turned for home.
    AttackFinished { wave_id: u32, unit: GridPos },
    /// A unit snapped back onto its anchor.
    UnitReturned { wave_id: u32, unit: GridPos },
    /// A wave has no members left in flight.
    WaveRetired { wave_id: u32 },
}
