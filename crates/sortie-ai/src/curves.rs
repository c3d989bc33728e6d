//! Attack-path curve library.
//!
//! A curve maps a normalized progress `t` in `[0, 1]` to a screen position.
//! Control geometry is derived once when the curve is started and frozen
//! afterwards, so `point_at` is a pure function of `t`. Time is supplied by
//! the caller as accumulated simulation milliseconds; nothing here reads a
//! wall clock.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use sortie_core::constants::*;
use sortie_core::enums::CurveKind;
use sortie_core::random::RandomSource;
use sortie_core::types::ScreenBounds;

use crate::profiles::get_profile;

/// A constructed but not yet started curve: its kind and traversal time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSpec {
    pub kind: CurveKind,
    pub duration_ms: f32,
}

impl CurveSpec {
    /// Curve of `kind` with its profile's default duration.
    pub fn new(kind: CurveKind) -> Self {
        Self {
            kind,
            duration_ms: get_profile(kind).duration_ms,
        }
    }

    pub fn with_duration(kind: CurveKind, duration_ms: f32) -> Self {
        Self { kind, duration_ms }
    }

    /// Freeze control geometry for a run starting at `origin` at `now_ms`.
    pub fn start<R: RandomSource + ?Sized>(
        self,
        origin: Vec2,
        now_ms: f64,
        bounds: &ScreenBounds,
        rng: &mut R,
    ) -> Curve {
        Curve {
            kind: self.kind,
            duration_ms: self.duration_ms.max(0.0),
            origin,
            started_at_ms: now_ms,
            path: CurvePath::build(self.kind, origin, bounds, rng),
        }
    }
}

/// Frozen control geometry, one variant per curve family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CurvePath {
    /// Quadratic Bezier.
    Dive { p0: Vec2, p1: Vec2, p2: Vec2 },
    /// Circle around the screen center, not the start point.
    Loop { center: Vec2, radius: f32 },
    /// Sine on x, linear descent on y.
    Weave {
        origin: Vec2,
        amplitude: f32,
        cycles: f32,
        bottom: f32,
    },
    /// Cubic Bezier.
    Swoop { p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2 },
    /// Horizontal leg to `turn_x`, then vertical leg to `bottom`.
    Strafe { origin: Vec2, turn_x: f32, bottom: f32 },
}

impl CurvePath {
    fn build<R: RandomSource + ?Sized>(
        kind: CurveKind,
        origin: Vec2,
        bounds: &ScreenBounds,
        rng: &mut R,
    ) -> Self {
        match kind {
            CurveKind::Dive => {
                let p1 = Vec2::new(
                    origin.x + rng.between(-DIVE_CONTROL_SPREAD_X, DIVE_CONTROL_SPREAD_X),
                    origin.y + rng.between(DIVE_CONTROL_DROP_MIN, DIVE_CONTROL_DROP_MAX),
                );
                let target_x = (origin.x
                    + rng.between(-DIVE_TARGET_SPREAD_X, DIVE_TARGET_SPREAD_X))
                .clamp(0.0, bounds.width);
                let p2 = Vec2::new(target_x, bounds.height + DIVE_EXIT_OVERSHOOT);
                CurvePath::Dive { p0: origin, p1, p2 }
            }
            CurveKind::Loop => CurvePath::Loop {
                center: bounds.center(),
                radius: LOOP_RADIUS,
            },
            CurveKind::Weave => CurvePath::Weave {
                origin,
                amplitude: WEAVE_AMPLITUDE,
                cycles: WEAVE_CYCLES,
                bottom: bounds.height,
            },
            CurveKind::Swoop => {
                // First swing heads toward the screen center.
                let side = if bounds.is_left_half(origin.x) { 1.0 } else { -1.0 };
                let fall = bounds.height - origin.y;
                CurvePath::Swoop {
                    p0: origin,
                    p1: Vec2::new(origin.x + side * SWOOP_SWING_X, origin.y + fall / 3.0),
                    p2: Vec2::new(
                        origin.x - side * SWOOP_SWING_X,
                        origin.y + 2.0 * fall / 3.0,
                    ),
                    p3: Vec2::new(origin.x, bounds.height - SWOOP_EXIT_MARGIN),
                }
            }
            CurveKind::Strafe => {
                let turn_x = if bounds.is_left_half(origin.x) {
                    bounds.width - STRAFE_EDGE_OFFSET
                } else {
                    STRAFE_EDGE_OFFSET
                };
                CurvePath::Strafe {
                    origin,
                    turn_x,
                    bottom: bounds.height,
                }
            }
        }
    }

    /// Position at progress `t`, which must already lie in `[0, 1]`.
    fn point_at(&self, t: f32) -> Vec2 {
        match *self {
            CurvePath::Dive { p0, p1, p2 } => {
                let u = 1.0 - t;
                p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
            }
            CurvePath::Loop { center, radius } => {
                let angle = TAU * t;
                Vec2::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            }
            CurvePath::Weave {
                origin,
                amplitude,
                cycles,
                bottom,
            } => Vec2::new(
                origin.x + amplitude * (TAU * cycles * t).sin(),
                origin.y + (bottom - origin.y) * t,
            ),
            CurvePath::Swoop { p0, p1, p2, p3 } => {
                let u = 1.0 - t;
                p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
            }
            CurvePath::Strafe {
                origin,
                turn_x,
                bottom,
            } => {
                if t < 0.5 {
                    let local = t * 2.0;
                    Vec2::new(origin.x + (turn_x - origin.x) * local, origin.y)
                } else {
                    let local = (t - 0.5) * 2.0;
                    Vec2::new(turn_x, origin.y + (bottom - origin.y) * local)
                }
            }
        }
    }
}

/// A started curve, owned by exactly one unit for one attack run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    kind: CurveKind,
    duration_ms: f32,
    origin: Vec2,
    started_at_ms: f64,
    path: CurvePath,
}

impl Curve {
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Start point recorded at `start`.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn started_at_ms(&self) -> f64 {
        self.started_at_ms
    }

    pub fn path(&self) -> &CurvePath {
        &self.path
    }

    /// Re-derive geometry from a new start. Leaves kind and duration intact.
    pub fn restart<R: RandomSource + ?Sized>(
        &mut self,
        origin: Vec2,
        now_ms: f64,
        bounds: &ScreenBounds,
        rng: &mut R,
    ) {
        *self = CurveSpec::with_duration(self.kind, self.duration_ms).start(
            origin, now_ms, bounds, rng,
        );
    }

    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        (now_ms - self.started_at_ms).max(0.0)
    }

    /// `clamp(elapsed / duration, 0, 1)`. A zero-length curve is always done.
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms(now_ms) / self.duration_ms as f64).clamp(0.0, 1.0) as f32
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.elapsed_ms(now_ms) >= self.duration_ms as f64
    }

    /// Pure sample of the frozen geometry. `t` is clamped to `[0, 1]`.
    pub fn point_at(&self, t: f32) -> Vec2 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        self.path.point_at(t)
    }

    pub fn current_position(&self, now_ms: f64) -> Vec2 {
        self.point_at(self.progress(now_ms))
    }
}
