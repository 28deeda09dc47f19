use std::time::Instant;

use crate::error::EngineError;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Vector};

/// Helper to build `n` light bodies spread far enough apart that few merge
fn make_bodies(n: usize) -> Vec<Body> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let angle = i_f * 0.37;
            let x = Vector::new(angle.cos(), angle.sin()) * (50.0 + 10.0 * i_f);
            Body::at_rest(x, 1.0)
        })
        .collect()
}

/// One warm-up step, then the mean wall time of `steps` steps in ms.
/// Stops at the first failed step.
pub fn time_steps(engine: &mut Engine, dt: f64, steps: usize) -> Result<f64, EngineError> {
    engine.step(dt)?;

    let t0 = Instant::now();
    for _ in 0..steps {
        engine.step(dt)?;
    }
    Ok(t0.elapsed().as_secs_f64() * 1000.0 / steps.max(1) as f64)
}

/// Time `Engine::step` for a range of body counts
/// Paste output directly into a spreadsheet to graph
pub fn bench_step() {
    let dt = 16.0 / 4000.0; // one 60 Hz frame at the default time scale

    println!("N,ms_per_step,survivors");

    for n in [50, 100, 200, 400, 800, 1600] {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 400 { 50 } else { 5 };

        let mut engine = match Engine::with_bodies(Parameters::default(), make_bodies(n)) {
            Ok(engine) => engine,
            Err(err) => {
                eprintln!("N = {n}: {err}");
                continue;
            }
        };

        let ms = match time_steps(&mut engine, dt, steps) {
            Ok(ms) => ms,
            Err(err) => {
                eprintln!("N = {n}: {err}");
                continue;
            }
        };

        println!("{},{:.6},{}", n, ms, engine.len());
    }
}
