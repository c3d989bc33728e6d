//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH};

/// Stable grid coordinate assigned to a unit when its formation is built.
/// Row 0 is the top of the formation; larger rows sit lower on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub row: u32,
    pub col: u32,
}

impl GridPos {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Fixed playfield dimensions in pixels. y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for ScreenBounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
        }
    }
}

impl ScreenBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Whether `x` lies in the left half of the screen.
    pub fn is_left_half(&self, x: f32) -> bool {
        x < self.width * 0.5
    }
}

/// Simulation time tracking, driven purely by caller-supplied deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    /// Number of ticks advanced so far.
    pub tick: u64,
    /// Accumulated simulation time in milliseconds.
    pub now_ms: f64,
}

impl SimClock {
    /// Advance by one tick of `delta_ms`. Negative or non-finite deltas count as zero.
    pub fn advance(&mut self, delta_ms: f64) -> f64 {
        let delta = sanitize_delta(delta_ms);
        self.tick += 1;
        self.now_ms += delta;
        delta
    }
}

/// Clamp a frame delta to a usable, non-negative finite value.
pub fn sanitize_delta(delta_ms: f64) -> f64 {
    if delta_ms.is_finite() && delta_ms > 0.0 {
        delta_ms
    } else {
        0.0
    }
}
