//! Headless swarm engine.
//!
//! `SwarmEngine` owns the formation, the wave orchestrator and the clock.
//! Each `tick` feeds the caller's frame delta through the orchestrator and
//! returns a `SwarmSnapshot`. No wall clock is read anywhere, so a fixed
//! seed and delta sequence always replays identically.

use rand_chacha::ChaCha8Rng;

use sortie_core::config::{ConfigError, OrchestratorConfig};
use sortie_core::constants::{DEFAULT_FORMATION_COLS, DEFAULT_FORMATION_ROWS};
use sortie_core::state::SwarmSnapshot;
use sortie_core::types::{GridPos, ScreenBounds, SimClock};

use crate::formation::Formation;
use crate::orchestrator::WaveOrchestrator;
use crate::snapshot::build_snapshot;

/// Configuration for starting a new engine.
#[derive(Debug, Clone)]
pub struct SwarmConfig {
    pub orchestrator: OrchestratorConfig,
    pub bounds: ScreenBounds,
    pub rows: u32,
    pub cols: u32,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            orchestrator: OrchestratorConfig::default(),
            bounds: ScreenBounds::default(),
            rows: DEFAULT_FORMATION_ROWS,
            cols: DEFAULT_FORMATION_COLS,
        }
    }
}

pub struct SwarmEngine {
    formation: Formation,
    orchestrator: WaveOrchestrator<ChaCha8Rng>,
    time: SimClock,
}

impl SwarmEngine {
    /// Build the standard centered formation and a seeded orchestrator.
    pub fn new(config: SwarmConfig) -> Result<Self, ConfigError> {
        let formation = Formation::centered(config.rows, config.cols, &config.bounds);
        Self::with_formation(formation, config.orchestrator, config.bounds)
    }

    pub fn with_formation(
        formation: Formation,
        config: OrchestratorConfig,
        bounds: ScreenBounds,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            formation,
            orchestrator: WaveOrchestrator::seeded(config, bounds)?,
            time: SimClock::default(),
        })
    }

    /// Advance by `delta_ms` and return the resulting snapshot.
    pub fn tick(&mut self, delta_ms: f64) -> SwarmSnapshot {
        let dt_ms = self.time.advance(delta_ms);
        self.orchestrator.advance(&mut self.formation, dt_ms);

        let events = self.orchestrator.take_events();
        build_snapshot(
            &self.formation,
            &self.time,
            self.orchestrator.active_wave_count(),
            events,
        )
    }

    /// Eliminate the unit at `grid`. Returns false if none is alive there.
    pub fn destroy_unit(&mut self, grid: GridPos) -> bool {
        match self.formation.handle_at(grid) {
            Some(handle) => self.formation.destroy(handle),
            None => false,
        }
    }

    /// Defender x for homing. Ignored while homing strength is zero.
    pub fn set_defender_x(&mut self, x: Option<f32>) {
        self.orchestrator.set_homing_target(x);
    }

    /// Tear down wave tracking and recall anything still in flight.
    pub fn shutdown(&mut self) {
        self.orchestrator.shutdown();
        self.formation.recall_in_flight();
    }

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    pub fn orchestrator(&self) -> &WaveOrchestrator<ChaCha8Rng> {
        &self.orchestrator
    }

    pub fn time(&self) -> SimClock {
        self.time
    }

    pub fn active_wave_count(&self) -> usize {
        self.orchestrator.active_wave_count()
    }
}
