use gravsim::{bench_step, body_table, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "2D gravitational N-body simulator with inelastic merging")]
struct Args {
    /// Scenario file, relative to the crate's `scenarios/` directory
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    steps: usize,

    /// Simulated display refresh interval in headless mode (ms)
    #[arg(long, default_value_t = 16.0)]
    frame_ms: f64,

    /// Time `step()` over a range of body counts and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario, steps: usize, frame_ms: f64) -> Result<()> {
    let Scenario { engine, clock, .. } = &mut scenario;
    let mass_before = engine.total_mass();

    for frame in 0..=steps {
        let dt = clock.tick(frame as f64 * frame_ms);
        engine.step(dt)?;

        if frame % 60 == 0 {
            info!(
                "frame {frame:5}: t = {:8.3}, {:4} bodies, mass = {:.1}, |p| = {:.1}, KE = {:.1}",
                engine.time(),
                engine.len(),
                engine.total_mass(),
                engine.total_momentum().norm(),
                engine.kinetic_energy()
            );
        }
    }

    info!(
        "done: {} bodies left, total mass {:.3} -> {:.3}",
        engine.len(),
        mass_before,
        engine.total_mass()
    );
    debug!("\n{}", body_table(engine.time(), engine.bodies()));
    Ok(())
}

#[cfg(feature = "viewer")]
fn run_windowed(scenario: Scenario, _args: &Args) -> Result<()> {
    gravsim::run_2d(scenario);
    Ok(())
}

#[cfg(not(feature = "viewer"))]
fn run_windowed(scenario: Scenario, args: &Args) -> Result<()> {
    log::warn!("built without the `viewer` feature, running headless");
    run_headless(scenario, args.steps, args.frame_ms)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.headless {
        run_headless(scenario, args.steps, args.frame_ms)
    } else {
        run_windowed(scenario, &args)
    }
}
