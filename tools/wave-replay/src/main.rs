//! wave-replay: headless attack-wave harness.
//!
//! Usage:
//!   wave-replay --seed 7 --ticks 3600 --delta-ms 16.67 --level 3
//!   wave-replay --config waves.json --rows 4 --cols 8

use std::path::PathBuf;
use std::process;

use sortie_core::config::OrchestratorConfig;
use sortie_core::constants::{DEFAULT_FORMATION_COLS, DEFAULT_FORMATION_ROWS};
use sortie_core::events::WaveEvent;
use sortie_core::types::ScreenBounds;
use sortie_sim::engine::{SwarmConfig, SwarmEngine};

struct Args {
    seed: Option<u64>,
    ticks: u64,
    delta_ms: f64,
    rows: u32,
    cols: u32,
    level: u32,
    config: Option<PathBuf>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            seed: None,
            ticks: 3600,
            delta_ms: 1000.0 / 60.0,
            rows: DEFAULT_FORMATION_ROWS,
            cols: DEFAULT_FORMATION_COLS,
            level: 1,
            config: None,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            process::exit(1);
        }
    };

    let mut orchestrator = match &args.config {
        Some(path) => match OrchestratorConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        },
        None => OrchestratorConfig::for_level(args.level),
    };
    if let Some(seed) = args.seed {
        orchestrator.seed = seed;
    }

    let config = SwarmConfig {
        orchestrator,
        bounds: ScreenBounds::default(),
        rows: args.rows,
        cols: args.cols,
    };
    let mut engine = match SwarmEngine::new(config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    let active = engine.orchestrator().config();
    tracing::info!(
        target: "sortie::replay",
        seed = active.seed,
        min_interval_ms = active.min_launch_interval_ms,
        max_interval_ms = active.max_launch_interval_ms,
        max_waves = active.max_simultaneous_waves,
        homing = active.homing_strength,
        "replay.start"
    );

    let mut launched = 0u32;
    let mut retired = 0u32;
    let mut snapshot = engine.tick(0.0);
    for _ in 0..args.ticks {
        snapshot = engine.tick(args.delta_ms);
        for event in &snapshot.events {
            match event {
                WaveEvent::WaveLaunched { wave_id, members } => {
                    launched += 1;
                    tracing::info!(
                        target: "sortie::replay",
                        wave_id,
                        size = members.len(),
                        now_ms = snapshot.time.now_ms,
                        "wave.launched"
                    );
                }
                WaveEvent::WaveRetired { wave_id } => {
                    retired += 1;
                    tracing::info!(
                        target: "sortie::replay",
                        wave_id,
                        now_ms = snapshot.time.now_ms,
                        "wave.retired"
                    );
                }
                WaveEvent::AttackFinished { .. } | WaveEvent::UnitReturned { .. } => {}
            }
        }
    }

    tracing::info!(
        target: "sortie::replay",
        ticks = args.ticks,
        launched,
        retired,
        active = snapshot.active_waves,
        "replay.complete"
    );

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "wave-replay: SORTIE headless attack-wave harness\n\
         \n\
           --seed <N>       RNG seed (overrides config)\n\
           --ticks <N>      Ticks to simulate (default: 3600)\n\
           --delta-ms <F>   Frame delta in ms (default: 16.67)\n\
           --rows <N>       Formation rows (default: 5)\n\
           --cols <N>       Formation columns (default: 10)\n\
           --level <N>      Difficulty level when no config is given (default: 1)\n\
           --config <path>  Orchestrator config JSON\n\
         \n\
         Prints the final snapshot as JSON. Set RUST_LOG=sortie=debug for wave detail.\n"
    );
}

fn parse_args(argv: &[String]) -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = argv.iter();
    while let Some(flag) = iter.next() {
        if matches!(flag.as_str(), "help" | "--help" | "-h") {
            print_usage();
            process::exit(0);
        }
        let value = iter
            .next()
            .ok_or_else(|| format!("Missing value for {flag}"))?;
        match flag.as_str() {
            "--seed" => args.seed = Some(parse_value(flag, value)?),
            "--ticks" => args.ticks = parse_value(flag, value)?,
            "--delta-ms" => args.delta_ms = parse_value(flag, value)?,
            "--rows" => args.rows = parse_value(flag, value)?,
            "--cols" => args.cols = parse_value(flag, value)?,
            "--level" => args.level = parse_value(flag, value)?,
            "--config" => args.config = Some(PathBuf::from(value)),
            other => return Err(format!("Unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("Invalid value for {flag}: {value}"))
}
