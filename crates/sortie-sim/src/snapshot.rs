//! Snapshot builder — reads the formation and produces a SwarmSnapshot.

use sortie_core::events::WaveEvent;
use sortie_core::state::{SwarmSnapshot, UnitSnapshot};
use sortie_core::types::SimClock;

use crate::formation::Formation;
use crate::surface::FormationSurface;

/// Build a complete snapshot of every unit, dead ones included.
pub fn build_snapshot(
    formation: &Formation,
    time: &SimClock,
    active_waves: usize,
    events: Vec<WaveEvent>,
) -> SwarmSnapshot {
    let units = formation
        .units()
        .into_iter()
        .map(|view| UnitSnapshot {
            grid: view.grid,
            position: view.position,
            state: view.state,
            curve: formation.active_curve(view.handle).map(|curve| curve.kind()),
        })
        .collect();

    SwarmSnapshot {
        time: *time,
        units,
        active_waves,
        events,
    }
}
