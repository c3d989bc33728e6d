//! Simulation constants and tuning parameters.

// --- Screen ---

/// Default playfield width (px).
pub const DEFAULT_SCREEN_WIDTH: f32 = 800.0;

/// Default playfield height (px).
pub const DEFAULT_SCREEN_HEIGHT: f32 = 600.0;

// --- Curve durations (ms) ---

pub const DIVE_DURATION_MS: f32 = 2000.0;
pub const LOOP_DURATION_MS: f32 = 3000.0;
pub const WEAVE_DURATION_MS: f32 = 2500.0;
pub const SWOOP_DURATION_MS: f32 = 2500.0;
pub const STRAFE_DURATION_MS: f32 = 2200.0;

// --- Curve selection weights (sum to 1.0) ---

pub const DIVE_WEIGHT: f32 = 0.30;
pub const LOOP_WEIGHT: f32 = 0.15;
pub const WEAVE_WEIGHT: f32 = 0.25;
pub const SWOOP_WEIGHT: f32 = 0.20;
pub const STRAFE_WEIGHT: f32 = 0.10;

// --- Dive geometry ---

/// Max horizontal offset of the dive control point from the start (px).
pub const DIVE_CONTROL_SPREAD_X: f32 = 150.0;

/// Vertical drop of the dive control point below the start (px).
pub const DIVE_CONTROL_DROP_MIN: f32 = 100.0;
pub const DIVE_CONTROL_DROP_MAX: f32 = 200.0;

/// Max horizontal offset of the dive exit point from the start (px).
pub const DIVE_TARGET_SPREAD_X: f32 = 200.0;

/// How far below the screen bottom a dive exits (px).
pub const DIVE_EXIT_OVERSHOOT: f32 = 50.0;

// --- Loop geometry ---

/// Radius of the screen-centered loop (px).
pub const LOOP_RADIUS: f32 = 150.0;

// --- Weave geometry ---

/// Horizontal sine amplitude (px).
pub const WEAVE_AMPLITUDE: f32 = 100.0;

/// Full sine cycles over the run.
pub const WEAVE_CYCLES: f32 = 2.0;

// --- Swoop geometry ---

/// Horizontal reach of each swoop control point (px).
pub const SWOOP_SWING_X: f32 = 200.0;

/// Swoop exit height above the screen bottom (px).
pub const SWOOP_EXIT_MARGIN: f32 = 50.0;

// --- Strafe geometry ---

/// Distance of the strafe turn point from the far screen edge (px).
pub const STRAFE_EDGE_OFFSET: f32 = 100.0;

// --- Steering ---

/// Return-to-formation speed (px/s).
pub const DEFAULT_RETURN_SPEED: f32 = 200.0;

/// Distance at which a returning unit snaps onto its anchor (px).
pub const ARRIVAL_RADIUS: f32 = 5.0;

/// Maximum homing correction rate (px/s).
pub const MAX_HOMING_STEER_RATE: f32 = 120.0;

// --- Orchestrator defaults (level 1) ---

pub const DEFAULT_MIN_LAUNCH_INTERVAL_MS: f64 = 3000.0;
pub const DEFAULT_MAX_LAUNCH_INTERVAL_MS: f64 = 6000.0;
pub const DEFAULT_MIN_WAVE_SIZE: u32 = 2;
pub const DEFAULT_MAX_WAVE_SIZE: u32 = 4;
pub const DEFAULT_MAX_SIMULTANEOUS_WAVES: u32 = 2;
pub const DEFAULT_SEED: u64 = 42;

// --- Difficulty scaling per level ---

/// Launch interval shrink per level above 1 (ms).
pub const LEVEL_INTERVAL_STEP_MS: f64 = 250.0;

/// Shortest minimum launch interval any level may reach (ms).
pub const LEVEL_MIN_INTERVAL_FLOOR_MS: f64 = 1000.0;

/// Shortest maximum launch interval any level may reach (ms).
pub const LEVEL_MAX_INTERVAL_FLOOR_MS: f64 = 2000.0;

/// Largest wave any level may request.
pub const LEVEL_WAVE_SIZE_CAP: u32 = 8;

/// Most concurrent waves any level may allow.
pub const LEVEL_MAX_WAVES_CAP: u32 = 4;

/// Homing strength gained per level above 2.
pub const LEVEL_HOMING_STEP: f32 = 0.05;

/// Strongest homing any level may reach.
pub const LEVEL_HOMING_CAP: f32 = 0.5;

// --- Formation layout ---

/// Horizontal gap between formation columns (px).
pub const FORMATION_SPACING_X: f32 = 48.0;

/// Vertical gap between formation rows (px).
pub const FORMATION_SPACING_Y: f32 = 40.0;

/// y of the top formation row (px).
pub const FORMATION_TOP: f32 = 80.0;

/// Default formation size.
pub const DEFAULT_FORMATION_ROWS: u32 = 5;
pub const DEFAULT_FORMATION_COLS: u32 = 10;
