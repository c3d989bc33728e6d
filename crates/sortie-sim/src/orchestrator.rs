//! Wave orchestrator — decides when waves launch, flies their members along
//! attack curves and home again, and retires finished waves.
//!
//! Invoked synchronously once per tick with the frame delta. Holds only
//! unit handles; the formation is passed in on every call and re-resolved.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sortie_ai::fsm::{self, Homing, UnitContext};
use sortie_ai::profiles;
use sortie_core::config::{ConfigError, OrchestratorConfig};
use sortie_core::enums::LifecycleState;
use sortie_core::events::{LaunchedUnit, WaveEvent};
use sortie_core::random::RandomSource;
use sortie_core::types::{sanitize_delta, GridPos, ScreenBounds};

use crate::surface::{FormationSurface, UnitHandle};

/// One unit's participation in a wave.
#[derive(Debug, Clone)]
pub struct WaveMember {
    pub handle: UnitHandle,
    pub grid: GridPos,
    /// Accumulated homing correction on top of the curve.
    pub steer_offset: f32,
    /// Set once the unit is back in formation or gone. A finished member may
    /// already be flying again in a later wave.
    pub finished: bool,
}

/// Units launched together.
#[derive(Debug, Clone)]
pub struct Wave {
    pub id: u32,
    pub members: Vec<WaveMember>,
    pub launched_at_ms: f64,
    pub active: bool,
}

pub struct WaveOrchestrator<R: RandomSource = ChaCha8Rng> {
    config: OrchestratorConfig,
    bounds: ScreenBounds,
    rng: R,
    waves: Vec<Wave>,
    now_ms: f64,
    since_last_launch_ms: f64,
    next_wave_id: u32,
    homing_target: Option<f32>,
    events: Vec<WaveEvent>,
    shut_down: bool,
}

impl WaveOrchestrator<ChaCha8Rng> {
    /// Orchestrator drawing from a `ChaCha8Rng` seeded with `config.seed`.
    pub fn seeded(config: OrchestratorConfig, bounds: ScreenBounds) -> Result<Self, ConfigError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::new(config, bounds, rng)
    }
}

impl<R: RandomSource> WaveOrchestrator<R> {
    pub fn new(
        config: OrchestratorConfig,
        bounds: ScreenBounds,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            bounds,
            rng,
            waves: Vec::new(),
            now_ms: 0.0,
            since_last_launch_ms: 0.0,
            next_wave_id: 0,
            homing_target: None,
            events: Vec::new(),
            shut_down: false,
        })
    }

    /// Advance one tick: fly in-flight units, maybe launch a wave, retire
    /// finished waves. A no-op after `shutdown`.
    pub fn advance<S: FormationSurface>(&mut self, formation: &mut S, delta_ms: f64) {
        if self.shut_down {
            return;
        }
        let dt_ms = sanitize_delta(delta_ms);
        self.now_ms += dt_ms;
        self.since_last_launch_ms += dt_ms;

        self.update_waves(formation, dt_ms);
        self.try_launch(formation);
        self.retire_waves(formation);
    }

    /// Number of currently tracked waves.
    pub fn active_wave_count(&self) -> usize {
        self.waves.len()
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Defender x to steer toward while attacking. `None` disables homing.
    pub fn set_homing_target(&mut self, target_x: Option<f32>) {
        self.homing_target = target_x;
    }

    /// Drain events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<WaveEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drop all wave tracking. Units are left exactly as they are; cleaning
    /// up anything still in flight is the formation's job.
    pub fn shutdown(&mut self) {
        if !self.waves.is_empty() {
            tracing::debug!(
                target: "sortie::waves",
                dropped = self.waves.len(),
                "orchestrator.shutdown"
            );
        }
        self.waves.clear();
        self.events.clear();
        self.shut_down = true;
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    fn update_waves<S: FormationSurface>(&mut self, formation: &mut S, dt_ms: f64) {
        let homing = Homing {
            target_x: self.homing_target,
            strength: self.config.homing_strength,
        };
        let return_speed = self.config.return_speed;
        let now_ms = self.now_ms;

        for wave in &mut self.waves {
            for member in wave.members.iter_mut().filter(|m| !m.finished) {
                let Some(view) = formation.unit(member.handle) else {
                    member.finished = true;
                    continue;
                };
                if !view.alive || view.state == LifecycleState::Destroyed {
                    member.finished = true;
                    continue;
                }

                let curve = formation.active_curve(member.handle);
                let well_formed = fsm::curve_invariant_holds(view.state, curve.is_some());
                debug_assert!(
                    well_formed,
                    "unit {:?} in {:?} with curve present = {}",
                    view.grid,
                    view.state,
                    curve.is_some()
                );
                if !well_formed {
                    tracing::warn!(
                        target: "sortie::waves",
                        row = view.grid.row,
                        col = view.grid.col,
                        state = ?view.state,
                        "orchestrator.skip_malformed_unit"
                    );
                    continue;
                }
                if !view.state.is_in_flight() {
                    // Back in formation through some other path.
                    member.finished = true;
                    continue;
                }

                let anchor = formation
                    .formation_anchor(member.handle)
                    .unwrap_or(view.position);
                let update = fsm::evaluate(&UnitContext {
                    state: view.state,
                    position: view.position,
                    anchor,
                    curve: curve.as_ref(),
                    steer_offset: member.steer_offset,
                    homing,
                    return_speed,
                    now_ms,
                    dt_ms,
                });

                formation.set_position(member.handle, update.new_position);
                member.steer_offset = update.steer_offset;

                if !update.state_changed {
                    continue;
                }
                match update.new_state {
                    LifecycleState::Returning => {
                        formation.set_active_curve(member.handle, None);
                        formation.set_lifecycle_state(member.handle, LifecycleState::Returning);
                        tracing::trace!(
                            target: "sortie::waves",
                            wave_id = wave.id,
                            row = view.grid.row,
                            col = view.grid.col,
                            "unit.returning"
                        );
                        self.events.push(WaveEvent::AttackFinished {
                            wave_id: wave.id,
                            unit: view.grid,
                        });
                    }
                    LifecycleState::InFormation => {
                        formation.set_lifecycle_state(member.handle, LifecycleState::InFormation);
                        member.finished = true;
                        member.steer_offset = 0.0;
                        tracing::trace!(
                            target: "sortie::waves",
                            wave_id = wave.id,
                            row = view.grid.row,
                            col = view.grid.col,
                            "unit.in_formation"
                        );
                        self.events.push(WaveEvent::UnitReturned {
                            wave_id: wave.id,
                            unit: view.grid,
                        });
                    }
                    LifecycleState::Attacking | LifecycleState::Destroyed => {}
                }
            }
        }
    }

    fn try_launch<S: FormationSurface>(&mut self, formation: &mut S) {
        if self.waves.len() >= self.config.max_simultaneous_waves as usize {
            return;
        }

        // Redrawn on every check; the timer itself only resets on a launch.
        let interval_ms = self.rng.between_f64(
            self.config.min_launch_interval_ms,
            self.config.max_launch_interval_ms,
        );
        if self.since_last_launch_ms <= interval_ms {
            return;
        }

        let mut candidates = formation.front_line();
        if candidates.is_empty() {
            tracing::trace!(target: "sortie::waves", "orchestrator.no_eligible_units");
            return;
        }

        let requested = self
            .rng
            .between_inclusive(self.config.min_wave_size, self.config.max_wave_size);
        let size = (requested as usize).min(candidates.len());

        let wave_id = self.next_wave_id;
        let mut members = Vec::with_capacity(size);
        let mut launched = Vec::with_capacity(size);
        for _ in 0..size {
            let Some(idx) = self.rng.pick(candidates.len()) else {
                break;
            };
            let view = candidates.swap_remove(idx);

            formation.set_formation_anchor(view.handle, view.position);
            let curve = profiles::random_curve(&mut self.rng).start(
                view.position,
                self.now_ms,
                &self.bounds,
                &mut self.rng,
            );
            let kind = curve.kind();
            formation.set_active_curve(view.handle, Some(curve));
            formation.set_lifecycle_state(view.handle, LifecycleState::Attacking);

            members.push(WaveMember {
                handle: view.handle,
                grid: view.grid,
                steer_offset: 0.0,
                finished: false,
            });
            launched.push(LaunchedUnit {
                unit: view.grid,
                curve: kind,
            });
        }

        tracing::debug!(
            target: "sortie::waves",
            wave_id,
            requested,
            size = members.len(),
            now_ms = self.now_ms,
            "wave.launched"
        );

        self.waves.push(Wave {
            id: wave_id,
            members,
            launched_at_ms: self.now_ms,
            active: true,
        });
        self.events.push(WaveEvent::WaveLaunched {
            wave_id,
            members: launched,
        });
        self.next_wave_id += 1;
        self.since_last_launch_ms = 0.0;
    }

    fn retire_waves<S: FormationSurface>(&mut self, formation: &S) {
        let events = &mut self.events;
        self.waves.retain_mut(|wave| {
            wave.active = wave.members.iter().any(|member| {
                !member.finished
                    && formation
                        .unit(member.handle)
                        .is_some_and(|view| view.alive && view.state.is_in_flight())
            });
            if !wave.active {
                tracing::debug!(target: "sortie::waves", wave_id = wave.id, "wave.retired");
                events.push(WaveEvent::WaveRetired { wave_id: wave.id });
            }
            wave.active
        });
    }
}
