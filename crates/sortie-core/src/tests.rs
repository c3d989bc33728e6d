#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::config::{ConfigError, OrchestratorConfig};
    use crate::enums::{CurveKind, LifecycleState};
    use crate::events::{LaunchedUnit, WaveEvent};
    use crate::random::RandomSource;
    use crate::types::{GridPos, ScreenBounds, SimClock};

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        assert!(OrchestratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_level_one_matches_default() {
        assert_eq!(OrchestratorConfig::for_level(1), OrchestratorConfig::default());
        assert_eq!(OrchestratorConfig::for_level(0), OrchestratorConfig::default());
    }

    #[test]
    fn test_level_scaling_grows_pressure_and_stays_valid() {
        let mut prev = OrchestratorConfig::for_level(1);
        for level in 2..40 {
            let cfg = OrchestratorConfig::for_level(level);
            assert!(cfg.validate().is_ok(), "level {level} produced {cfg:?}");
            assert!(cfg.min_launch_interval_ms <= prev.min_launch_interval_ms);
            assert!(cfg.max_launch_interval_ms <= prev.max_launch_interval_ms);
            assert!(cfg.max_wave_size >= prev.max_wave_size);
            assert!(cfg.max_simultaneous_waves >= prev.max_simultaneous_waves);
            assert!(cfg.homing_strength >= prev.homing_strength);
            prev = cfg;
        }
        assert!(prev.homing_strength > 0.0);
        assert!(prev.homing_strength <= 1.0);
    }

    #[test]
    fn test_json_missing_fields_take_defaults() {
        let cfg = OrchestratorConfig::from_json_str(
            r#"{ "min_wave_size": 3, "max_wave_size": 5, "homing_strength": 0.25 }"#,
        )
        .unwrap();
        assert_eq!(cfg.min_wave_size, 3);
        assert_eq!(cfg.max_wave_size, 5);
        assert_eq!(cfg.homing_strength, 0.25);
        assert_eq!(
            cfg.max_simultaneous_waves,
            OrchestratorConfig::default().max_simultaneous_waves
        );
    }

    #[test]
    fn test_inverted_interval_rejected() {
        let cfg = OrchestratorConfig {
            min_launch_interval_ms: 5000.0,
            max_launch_interval_ms: 1000.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvertedRange {
                field: "launch_interval_ms",
                ..
            })
        ));
    }

    #[test]
    fn test_json_failing_validation_is_rejected() {
        let json = r#"{ "min_wave_size": 5, "max_wave_size": 2 }"#;
        assert!(matches!(
            OrchestratorConfig::from_json_str(json),
            Err(ConfigError::InvertedRange {
                field: "wave_size",
                ..
            })
        ));
    }

    #[test]
    fn test_bad_values_rejected() {
        let zero_size = OrchestratorConfig {
            min_wave_size: 0,
            ..Default::default()
        };
        assert!(matches!(zero_size.validate(), Err(ConfigError::ZeroWaveSize)));

        let zero_waves = OrchestratorConfig {
            max_simultaneous_waves: 0,
            ..Default::default()
        };
        assert!(matches!(zero_waves.validate(), Err(ConfigError::ZeroMaxWaves)));

        let homing = OrchestratorConfig {
            homing_strength: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            homing.validate(),
            Err(ConfigError::HomingOutOfRange(_))
        ));

        let nan_interval = OrchestratorConfig {
            min_launch_interval_ms: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan_interval.validate(),
            Err(ConfigError::NotFiniteOrNegative { .. })
        ));

        let stalled = OrchestratorConfig {
            return_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            stalled.validate(),
            Err(ConfigError::NonPositiveReturnSpeed(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = OrchestratorConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = OrchestratorConfig::load(std::path::Path::new("/nonexistent/sortie.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/sortie.json"));
    }

    // ---- Lifecycle ----

    #[test]
    fn test_lifecycle_normal_cycle_is_legal() {
        use LifecycleState::*;
        assert!(InFormation.can_transition_to(Attacking));
        assert!(Attacking.can_transition_to(Returning));
        assert!(Returning.can_transition_to(InFormation));
    }

    #[test]
    fn test_lifecycle_shortcuts_are_illegal() {
        use LifecycleState::*;
        assert!(!InFormation.can_transition_to(Returning));
        assert!(!Attacking.can_transition_to(InFormation));
        assert!(!Returning.can_transition_to(Attacking));
        assert!(!InFormation.can_transition_to(InFormation));
    }

    #[test]
    fn test_destroyed_is_terminal_and_reachable_from_anywhere() {
        use LifecycleState::*;
        for state in [InFormation, Attacking, Returning] {
            assert!(state.can_transition_to(Destroyed));
        }
        for state in [InFormation, Attacking, Returning, Destroyed] {
            assert!(!Destroyed.can_transition_to(state));
        }
    }

    #[test]
    fn test_in_flight_states() {
        assert!(LifecycleState::Attacking.is_in_flight());
        assert!(LifecycleState::Returning.is_in_flight());
        assert!(!LifecycleState::InFormation.is_in_flight());
        assert!(!LifecycleState::Destroyed.is_in_flight());
    }

    // ---- Random source ----

    #[test]
    fn test_rng_draws_stay_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let r = rng.random();
            assert!((0.0..1.0).contains(&r));
            let b = rng.between(-3.0, 5.0);
            assert!((-3.0..5.0).contains(&b));
            let n = rng.between_inclusive(2, 4);
            assert!((2..=4).contains(&n));
            let i = rng.pick(3).unwrap();
            assert!(i < 3);
        }
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(rng.between(4.0, 4.0), 4.0);
        assert_eq!(rng.between_inclusive(3, 3), 3);
        assert_eq!(rng.between_inclusive(5, 2), 5);
        assert_eq!(rng.pick(0), None);
    }

    #[test]
    fn test_wide_f64_range_stays_finite() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let v = rng.between_f64(1000.0, 1e39);
            assert!(v.is_finite());
            assert!((1000.0..=1e39).contains(&v));
        }
        assert_eq!(rng.between_f64(f64::MAX, f64::MAX), f64::MAX);
        assert_eq!(rng.between_f64(9.0, 2.0), 9.0);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(a.between(0.0, 100.0), b.between(0.0, 100.0));
        }
    }

    // ---- Types ----

    #[test]
    fn test_screen_center_and_halves() {
        let bounds = ScreenBounds::new(800.0, 600.0);
        assert_eq!(bounds.center(), glam::Vec2::new(400.0, 300.0));
        assert!(bounds.is_left_half(100.0));
        assert!(!bounds.is_left_half(400.0));
    }

    #[test]
    fn test_clock_ignores_bad_deltas() {
        let mut clock = SimClock::default();
        assert_eq!(clock.advance(16.0), 16.0);
        assert_eq!(clock.advance(-5.0), 0.0);
        assert_eq!(clock.advance(f64::NAN), 0.0);
        assert_eq!(clock.tick, 3);
        assert_eq!(clock.now_ms, 16.0);
    }

    #[test]
    fn test_wave_event_serde_tagged() {
        let event = WaveEvent::WaveLaunched {
            wave_id: 3,
            members: vec![LaunchedUnit {
                unit: GridPos::new(4, 1),
                curve: CurveKind::Swoop,
            }],
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"WaveLaunched""#));
        let back: WaveEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
