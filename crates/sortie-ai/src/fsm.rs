//! Unit lifecycle finite state machine.
//!
//! Pure functions that compute one tick of movement and the resulting phase
//! transition for a unit the orchestrator is flying. No ECS dependency —
//! operates on plain data.

use glam::Vec2;

use sortie_core::constants::{ARRIVAL_RADIUS, MAX_HOMING_STEER_RATE};
use sortie_core::enums::LifecycleState;

use crate::curves::Curve;

/// Horizontal pull toward a target x while attacking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Homing {
    pub target_x: Option<f32>,
    /// 0 disables steering, 1 corrects the full error (up to the rate cap).
    pub strength: f32,
}

impl Homing {
    pub const OFF: Homing = Homing {
        target_x: None,
        strength: 0.0,
    };

    pub fn is_active(&self) -> bool {
        self.target_x.is_some() && self.strength > 0.0
    }

    /// Accumulated steering offset after one tick, given the unsteered curve x.
    pub fn steer(&self, curve_x: f32, offset: f32, dt_ms: f64) -> f32 {
        let target_x = match self.target_x {
            Some(x) if self.is_active() => x,
            _ => return offset,
        };
        let max_steer = MAX_HOMING_STEER_RATE * (dt_ms / 1000.0) as f32;
        let error = target_x - (curve_x + offset);
        offset + (error * self.strength).clamp(-max_steer, max_steer)
    }
}

/// Input to the unit FSM for a single unit.
pub struct UnitContext<'a> {
    pub state: LifecycleState,
    pub position: Vec2,
    pub anchor: Vec2,
    pub curve: Option<&'a Curve>,
    pub steer_offset: f32,
    pub homing: Homing,
    /// Return-to-formation speed (px/s).
    pub return_speed: f32,
    pub now_ms: f64,
    pub dt_ms: f64,
}

/// Output from the unit FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitUpdate {
    pub new_state: LifecycleState,
    pub new_position: Vec2,
    pub steer_offset: f32,
    pub state_changed: bool,
}

/// A unit is well-formed iff it carries a curve exactly while attacking.
pub fn curve_invariant_holds(state: LifecycleState, has_curve: bool) -> bool {
    (state == LifecycleState::Attacking) == has_curve
}

/// Evaluate the FSM for one unit. Returns the updated phase and position.
pub fn evaluate(ctx: &UnitContext) -> UnitUpdate {
    let no_change = UnitUpdate {
        new_state: ctx.state,
        new_position: ctx.position,
        steer_offset: ctx.steer_offset,
        state_changed: false,
    };

    match (ctx.state, ctx.curve) {
        (LifecycleState::Attacking, Some(curve)) => evaluate_attacking(ctx, curve),
        (LifecycleState::Returning, _) => evaluate_returning(ctx),
        // Formation-owned, terminal, or malformed: nothing to do here.
        _ => no_change,
    }
}

fn evaluate_attacking(ctx: &UnitContext, curve: &Curve) -> UnitUpdate {
    let on_curve = curve.current_position(ctx.now_ms);
    let steer_offset = ctx.homing.steer(on_curve.x, ctx.steer_offset, ctx.dt_ms);
    let new_position = Vec2::new(on_curve.x + steer_offset, on_curve.y);

    if curve.is_complete(ctx.now_ms) {
        return UnitUpdate {
            new_state: LifecycleState::Returning,
            new_position,
            steer_offset,
            state_changed: true,
        };
    }

    UnitUpdate {
        new_state: ctx.state,
        new_position,
        steer_offset,
        state_changed: false,
    }
}

fn evaluate_returning(ctx: &UnitContext) -> UnitUpdate {
    let (new_position, arrived) =
        step_toward_anchor(ctx.position, ctx.anchor, ctx.return_speed, ctx.dt_ms);

    if arrived {
        return UnitUpdate {
            new_state: LifecycleState::InFormation,
            new_position,
            steer_offset: 0.0,
            state_changed: true,
        };
    }

    UnitUpdate {
        new_state: ctx.state,
        new_position,
        steer_offset: ctx.steer_offset,
        state_changed: false,
    }
}

/// Move from `position` toward `anchor` at `speed` px/s for `dt_ms`.
/// Snaps onto the anchor once within the arrival radius.
pub fn step_toward_anchor(position: Vec2, anchor: Vec2, speed: f32, dt_ms: f64) -> (Vec2, bool) {
    let to_anchor = anchor - position;
    let distance = to_anchor.length();
    if distance < ARRIVAL_RADIUS {
        return (anchor, true);
    }

    let step = (speed * (dt_ms / 1000.0) as f32).min(distance);
    let moved = position + to_anchor / distance * step;
    if moved.distance(anchor) < ARRIVAL_RADIUS {
        (anchor, true)
    } else {
        (moved, false)
    }
}
