//! The narrow surface the orchestrator uses to query and drive units.
//!
//! Units are owned by the formation; the orchestrator only holds
//! `UnitHandle`s and re-resolves them every tick. The lifecycle state is the
//! ownership discipline: the formation writes units that are
//! `InFormation`, the orchestrator writes units that are `Attacking` or
//! `Returning`.

use std::collections::BTreeMap;

use glam::Vec2;

use sortie_ai::curves::Curve;
use sortie_core::enums::LifecycleState;
use sortie_core::types::GridPos;

/// Non-owning handle to a formation unit. Never reused while the unit lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitHandle(pub hecs::Entity);

/// Read-only view of one unit at the time of the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitView {
    pub handle: UnitHandle,
    pub grid: GridPos,
    pub position: Vec2,
    pub state: LifecycleState,
    pub alive: bool,
}

pub trait FormationSurface {
    /// Every alive unit, ordered by grid position.
    fn alive_units(&self) -> Vec<UnitView>;

    fn unit(&self, handle: UnitHandle) -> Option<UnitView>;

    /// Units eligible for an attack run: per column, the bottom-most alive
    /// unit, kept only while it sits in formation. A column whose bottom unit
    /// is away on a run has no eligible unit.
    fn front_line(&self) -> Vec<UnitView> {
        let mut by_col: BTreeMap<u32, UnitView> = BTreeMap::new();
        for view in self.alive_units() {
            if !view.alive {
                continue;
            }
            by_col
                .entry(view.grid.col)
                .and_modify(|best| {
                    if view.grid.row > best.grid.row {
                        *best = view;
                    }
                })
                .or_insert(view);
        }
        by_col
            .into_values()
            .filter(|view| view.state == LifecycleState::InFormation)
            .collect()
    }

    fn set_position(&mut self, handle: UnitHandle, position: Vec2);

    fn set_lifecycle_state(&mut self, handle: UnitHandle, state: LifecycleState);

    fn set_formation_anchor(&mut self, handle: UnitHandle, anchor: Vec2);

    fn formation_anchor(&self, handle: UnitHandle) -> Option<Vec2>;

    fn set_active_curve(&mut self, handle: UnitHandle, curve: Option<Curve>);

    fn active_curve(&self, handle: UnitHandle) -> Option<Curve>;
}
