//! ECS components for formation units.
//!
//! Components are plain data. Position is stored as a bare `glam::Vec2`,
//! the lifecycle as a bare `LifecycleState`, the grid slot as `GridPos`.

use glam::Vec2;

use sortie_ai::curves::Curve;

/// Where the unit must return after an attack run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormationAnchor(pub Vec2);

/// Present only while the unit is attacking.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveCurve(pub Curve);

/// Cleared when the unit is eliminated, in any lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alive(pub bool);
