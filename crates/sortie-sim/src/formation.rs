//! Formation arena: the grid of units, stored as hecs entities.
//!
//! The formation owns every unit. It implements `FormationSurface` so the
//! orchestrator can find eligible units and fly them without holding
//! references across ticks.

use glam::Vec2;
use hecs::{Entity, World};

use sortie_ai::curves::Curve;
use sortie_core::constants::{FORMATION_SPACING_X, FORMATION_SPACING_Y, FORMATION_TOP};
use sortie_core::enums::LifecycleState;
use sortie_core::types::{GridPos, ScreenBounds};

use crate::components::{ActiveCurve, Alive, FormationAnchor};
use crate::surface::{FormationSurface, UnitHandle, UnitView};

#[derive(Default)]
pub struct Formation {
    world: World,
}

impl Formation {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `rows` x `cols` grid whose top-left unit sits at `origin`.
    pub fn grid(rows: u32, cols: u32, origin: Vec2, spacing: Vec2) -> Self {
        let mut formation = Self::new();
        for row in 0..rows {
            for col in 0..cols {
                let position = origin + Vec2::new(col as f32 * spacing.x, row as f32 * spacing.y);
                formation.spawn_unit(GridPos::new(row, col), position);
            }
        }
        formation
    }

    /// The standard layout: horizontally centered, hanging from the top row line.
    pub fn centered(rows: u32, cols: u32, bounds: &ScreenBounds) -> Self {
        let span = cols.saturating_sub(1) as f32 * FORMATION_SPACING_X;
        let origin = Vec2::new((bounds.width - span) * 0.5, FORMATION_TOP);
        Self::grid(
            rows,
            cols,
            origin,
            Vec2::new(FORMATION_SPACING_X, FORMATION_SPACING_Y),
        )
    }

    pub fn spawn_unit(&mut self, grid: GridPos, position: Vec2) -> UnitHandle {
        UnitHandle(self.world.spawn((
            grid,
            position,
            LifecycleState::InFormation,
            FormationAnchor(position),
            Alive(true),
        )))
    }

    pub fn handle_at(&self, grid: GridPos) -> Option<UnitHandle> {
        self.world
            .query::<&GridPos>()
            .iter()
            .find(|(_, g)| **g == grid)
            .map(|(entity, _)| UnitHandle(entity))
    }

    /// Every unit, dead ones included, ordered by grid position.
    pub fn units(&self) -> Vec<UnitView> {
        let mut views: Vec<UnitView> = self
            .world
            .query::<(&GridPos, &Vec2, &LifecycleState, &Alive)>()
            .iter()
            .map(|(entity, (grid, position, state, alive))| UnitView {
                handle: UnitHandle(entity),
                grid: *grid,
                position: *position,
                state: *state,
                alive: alive.0,
            })
            .collect();
        views.sort_by_key(|view| view.grid);
        views
    }

    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.world.is_empty()
    }

    pub fn alive_count(&self) -> usize {
        self.world
            .query::<&Alive>()
            .iter()
            .filter(|(_, alive)| alive.0)
            .count()
    }

    /// Eliminate a unit in whatever state it is in. Returns false if it was
    /// already dead or unknown.
    pub fn destroy(&mut self, handle: UnitHandle) -> bool {
        let Some(view) = self.view(handle.0) else {
            return false;
        };
        if !view.alive {
            return false;
        }
        self.set_lifecycle_state(handle, LifecycleState::Destroyed);
        true
    }

    /// Teardown cleanup: put every unit still attacking or returning back
    /// on its anchor, in formation. Returns how many were recalled.
    pub fn recall_in_flight(&mut self) -> usize {
        let stranded: Vec<(Entity, Vec2)> = self
            .world
            .query::<(&LifecycleState, &FormationAnchor, &Alive)>()
            .iter()
            .filter(|(_, (state, _, alive))| alive.0 && state.is_in_flight())
            .map(|(entity, (_, anchor, _))| (entity, anchor.0))
            .collect();

        for &(entity, anchor) in &stranded {
            // Recall bypasses the transition table: Attacking -> InFormation is only legal here.
            if let Ok(mut state) = self.world.get::<&mut LifecycleState>(entity) {
                *state = LifecycleState::InFormation;
            }
            if let Ok(mut position) = self.world.get::<&mut Vec2>(entity) {
                *position = anchor;
            }
            let _ = self.world.remove_one::<ActiveCurve>(entity);
        }

        if !stranded.is_empty() {
            tracing::debug!(
                target: "sortie::formation",
                recalled = stranded.len(),
                "formation.recall_in_flight"
            );
        }
        stranded.len()
    }

    fn view(&self, entity: Entity) -> Option<UnitView> {
        let grid = *self.world.get::<&GridPos>(entity).ok()?;
        let position = *self.world.get::<&Vec2>(entity).ok()?;
        let state = *self.world.get::<&LifecycleState>(entity).ok()?;
        let alive = self.world.get::<&Alive>(entity).ok()?.0;
        Some(UnitView {
            handle: UnitHandle(entity),
            grid,
            position,
            state,
            alive,
        })
    }
}

impl FormationSurface for Formation {
    fn alive_units(&self) -> Vec<UnitView> {
        let mut views = self.units();
        views.retain(|view| view.alive);
        views
    }

    fn unit(&self, handle: UnitHandle) -> Option<UnitView> {
        self.view(handle.0)
    }

    fn set_position(&mut self, handle: UnitHandle, position: Vec2) {
        if let Ok(mut current) = self.world.get::<&mut Vec2>(handle.0) {
            *current = position;
        }
    }

    fn set_lifecycle_state(&mut self, handle: UnitHandle, state: LifecycleState) {
        let Ok(current) = self.world.get::<&LifecycleState>(handle.0).map(|s| *s) else {
            return;
        };
        if current == state {
            return;
        }
        if !current.can_transition_to(state) {
            tracing::warn!(
                target: "sortie::formation",
                from = ?current,
                to = ?state,
                "formation.illegal_transition"
            );
            return;
        }

        if let Ok(mut slot) = self.world.get::<&mut LifecycleState>(handle.0) {
            *slot = state;
        }
        if state == LifecycleState::Destroyed {
            if let Ok(mut alive) = self.world.get::<&mut Alive>(handle.0) {
                alive.0 = false;
            }
            let _ = self.world.remove_one::<ActiveCurve>(handle.0);
        }
    }

    fn set_formation_anchor(&mut self, handle: UnitHandle, anchor: Vec2) {
        if let Ok(mut current) = self.world.get::<&mut FormationAnchor>(handle.0) {
            current.0 = anchor;
        }
    }

    fn formation_anchor(&self, handle: UnitHandle) -> Option<Vec2> {
        self.world
            .get::<&FormationAnchor>(handle.0)
            .ok()
            .map(|anchor| anchor.0)
    }

    fn set_active_curve(&mut self, handle: UnitHandle, curve: Option<Curve>) {
        match curve {
            Some(curve) => {
                let _ = self.world.insert_one(handle.0, ActiveCurve(curve));
            }
            None => {
                let _ = self.world.remove_one::<ActiveCurve>(handle.0);
            }
        }
    }

    fn active_curve(&self, handle: UnitHandle) -> Option<Curve> {
        self.world
            .get::<&ActiveCurve>(handle.0)
            .ok()
            .map(|curve| curve.0.clone())
    }
}
