//! Orchestrator configuration and its validation.
//!
//! Difficulty scaling lives here rather than in the orchestrator: callers
//! build a config per level and hand it over at construction.

use std::{fs, io, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Tuning knobs for the wave orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Lower bound of the launch interval draw (ms).
    pub min_launch_interval_ms: f64,
    /// Upper bound of the launch interval draw (ms).
    pub max_launch_interval_ms: f64,
    /// Smallest wave requested.
    pub min_wave_size: u32,
    /// Largest wave requested.
    pub max_wave_size: u32,
    /// Waves tracked at once before launches are held back.
    pub max_simultaneous_waves: u32,
    /// Horizontal homing strength in `[0, 1]`; 0 disables steering.
    pub homing_strength: f32,
    /// Return-to-formation speed (px/s).
    pub return_speed: f32,
    /// Seed for the default random source.
    pub seed: u64,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            min_launch_interval_ms: DEFAULT_MIN_LAUNCH_INTERVAL_MS,
            max_launch_interval_ms: DEFAULT_MAX_LAUNCH_INTERVAL_MS,
            min_wave_size: DEFAULT_MIN_WAVE_SIZE,
            max_wave_size: DEFAULT_MAX_WAVE_SIZE,
            max_simultaneous_waves: DEFAULT_MAX_SIMULTANEOUS_WAVES,
            homing_strength: 0.0,
            return_speed: DEFAULT_RETURN_SPEED,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field}: min {min} exceeds max {max}")]
    InvertedRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{field} must be a finite, non-negative number (got {value})")]
    NotFiniteOrNegative { field: &'static str, value: f64 },
    #[error("min_wave_size must be at least 1")]
    ZeroWaveSize,
    #[error("max_simultaneous_waves must be at least 1")]
    ZeroMaxWaves,
    #[error("homing_strength must lie in [0, 1] (got {0})")]
    HomingOutOfRange(f32),
    #[error("return_speed must be positive (got {0})")]
    NonPositiveReturnSpeed(f32),
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl OrchestratorConfig {
    /// Config for a given level (1-based). Level 1 equals `Default`.
    pub fn for_level(level: u32) -> Self {
        let base = Self::default();
        let step = level.saturating_sub(1);

        let shrink = step as f64 * LEVEL_INTERVAL_STEP_MS;
        let min_launch_interval_ms =
            (base.min_launch_interval_ms - shrink).max(LEVEL_MIN_INTERVAL_FLOOR_MS);
        let max_launch_interval_ms = (base.max_launch_interval_ms - 2.0 * shrink)
            .max(LEVEL_MAX_INTERVAL_FLOOR_MS)
            .max(min_launch_interval_ms);

        let min_wave_size = (base.min_wave_size + step / 3).min(LEVEL_WAVE_SIZE_CAP);
        let max_wave_size = (base.max_wave_size + step / 2)
            .min(LEVEL_WAVE_SIZE_CAP)
            .max(min_wave_size);
        let max_simultaneous_waves =
            (base.max_simultaneous_waves + step / 3).min(LEVEL_MAX_WAVES_CAP);

        let homing_strength =
            (level.saturating_sub(2) as f32 * LEVEL_HOMING_STEP).min(LEVEL_HOMING_CAP);

        Self {
            min_launch_interval_ms,
            max_launch_interval_ms,
            min_wave_size,
            max_wave_size,
            max_simultaneous_waves,
            homing_strength,
            ..base
        }
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(data: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(data).map_err(|err| {
            tracing::warn!(target: "sortie::config", error = %err, "config.parse_failed");
            ConfigError::from(err)
        })?;
        if let Err(err) = config.validate() {
            tracing::warn!(target: "sortie::config", error = %err, "config.rejected");
            return Err(err);
        }
        tracing::debug!(target: "sortie::config", seed = config.seed, "config.loaded");
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| {
            tracing::warn!(
                target: "sortie::config",
                path = %path.display(),
                error = %source,
                "config.read_failed"
            );
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("min_launch_interval_ms", self.min_launch_interval_ms),
            ("max_launch_interval_ms", self.max_launch_interval_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NotFiniteOrNegative { field, value });
            }
        }
        if self.min_launch_interval_ms > self.max_launch_interval_ms {
            return Err(ConfigError::InvertedRange {
                field: "launch_interval_ms",
                min: self.min_launch_interval_ms,
                max: self.max_launch_interval_ms,
            });
        }
        if self.min_wave_size == 0 {
            return Err(ConfigError::ZeroWaveSize);
        }
        if self.min_wave_size > self.max_wave_size {
            return Err(ConfigError::InvertedRange {
                field: "wave_size",
                min: self.min_wave_size as f64,
                max: self.max_wave_size as f64,
            });
        }
        if self.max_simultaneous_waves == 0 {
            return Err(ConfigError::ZeroMaxWaves);
        }
        if !(0.0..=1.0).contains(&self.homing_strength) {
            return Err(ConfigError::HomingOutOfRange(self.homing_strength));
        }
        if !(self.return_speed.is_finite() && self.return_speed > 0.0) {
            return Err(ConfigError::NonPositiveReturnSpeed(self.return_speed));
        }
        Ok(())
    }
}
