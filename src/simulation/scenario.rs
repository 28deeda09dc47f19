//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - the engine with its policies and initial bodies
//! - the frame clock that turns refresh timestamps into time steps
//! - the spawner used when the user places new bodies
//!
//! Validation happens here so a bad file fails before the first frame.

use std::f64::consts::TAU;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{BodyConfig, DiskConfig, ScenarioConfig, ThresholdConfig};
use crate::error::ScenarioError;
use crate::simulation::clock::FrameClock;
use crate::simulation::engine::Engine;
use crate::simulation::params::{CollisionThresholdPolicy, Parameters};
use crate::simulation::spawner::Spawner;
use crate::simulation::states::{Body, Vector};

/// Runtime bundle built from a [`ScenarioConfig`]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub clock: FrameClock,
    pub spawner: Spawner,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        // Policies (runtime) from EngineConfig
        let e_cfg = &cfg.engine;
        let collision_threshold = match e_cfg.collision_threshold {
            ThresholdConfig::SizeAware => CollisionThresholdPolicy::SizeAware,
            ThresholdConfig::Fixed => {
                if !(e_cfg.fixed_distance.is_finite() && e_cfg.fixed_distance >= 0.0) {
                    return Err(invalid(format!(
                        "fixed_distance must be finite and >= 0, got {}",
                        e_cfg.fixed_distance
                    )));
                }
                CollisionThresholdPolicy::Fixed { distance: e_cfg.fixed_distance }
            }
        };
        let parameters = Parameters {
            collision_threshold,
            attraction: e_cfg.attraction,
            merge_tiebreak: e_cfg.merge_tiebreak,
        };

        // Frame clock from ParametersConfig
        let p_cfg = &cfg.parameters;
        if !(p_cfg.time_scale.is_finite() && p_cfg.time_scale > 0.0) {
            return Err(invalid(format!("time_scale must be positive, got {}", p_cfg.time_scale)));
        }
        if let Some(max) = p_cfg.max_delta {
            if !(max >= 0.0) {
                return Err(invalid(format!("max_delta must be >= 0, got {max}")));
            }
        }
        let clock = FrameClock::new(p_cfg.time_scale, p_cfg.max_delta);

        // Spawner from SpawnConfig
        let s_cfg = &cfg.spawn;
        if !(s_cfg.max_speed.is_finite() && s_cfg.max_speed >= 0.0) {
            return Err(invalid(format!("spawn.max_speed must be >= 0, got {}", s_cfg.max_speed)));
        }
        if !(s_cfg.mass_min > 0.0 && s_cfg.mass_max.is_finite() && s_cfg.mass_max >= s_cfg.mass_min) {
            return Err(invalid(format!(
                "spawn masses need 0 < mass_min <= mass_max, got [{}, {}]",
                s_cfg.mass_min, s_cfg.mass_max
            )));
        }
        let spawner = Spawner::new(s_cfg.max_speed, s_cfg.mass_min, s_cfg.mass_max, p_cfg.seed.wrapping_add(1));

        // Bodies: generated disk first, then explicit ones
        let mut bodies = Vec::new();
        if let Some(disk) = &cfg.disk {
            let mut rng = StdRng::seed_from_u64(p_cfg.seed);
            bodies.extend(build_disk(disk, &mut rng)?);
        }
        for (index, bc) in cfg.bodies.iter().enumerate() {
            bodies.push(build_body(index, bc)?);
        }

        let engine = Engine::with_bodies(parameters, bodies)?;
        info!(
            "scenario: {} bodies, {:?}, {:?} attraction, {:?} tiebreak",
            engine.len(),
            parameters.collision_threshold,
            parameters.attraction,
            parameters.merge_tiebreak
        );

        Ok(Self { engine, clock, spawner })
    }
}

/// Central mass plus `count` bodies on near-circular orbits around it
pub fn build_disk(cfg: &DiskConfig, rng: &mut impl Rng) -> Result<Vec<Body>, ScenarioError> {
    let center = vector2(&cfg.center).ok_or_else(|| invalid(format!(
        "disk.center needs 2 components, got {}",
        cfg.center.len()
    )))?;
    if !(cfg.r_min > 0.0 && cfg.r_span >= 0.0) {
        return Err(invalid(format!("disk radii need r_min > 0 and r_span >= 0, got {} / {}", cfg.r_min, cfg.r_span)));
    }
    if !(cfg.mass_min > 0.0 && cfg.mass_span >= 0.0) {
        return Err(invalid(format!(
            "disk masses need mass_min > 0 and mass_span >= 0, got {} / {}",
            cfg.mass_min, cfg.mass_span
        )));
    }

    let mut bodies = Vec::with_capacity(cfg.count + 1);
    bodies.push(Body::at_rest(center, cfg.sun_mass));

    for _ in 0..cfg.count {
        let distance = cfg.r_min + rng.gen::<f64>() * cfg.r_span;
        let angle = rng.gen::<f64>() * TAU;

        let position = center + Vector::new(angle.cos(), angle.sin()) * distance;

        // perpendicular to the radius, speed from Kepler's law
        let speed = (cfg.sun_mass / distance).sqrt() * cfg.speed_factor;
        let velocity = Vector::new(angle.sin(), -angle.cos()) * speed;

        let mass = cfg.mass_min + rng.gen::<f64>() * cfg.mass_span;
        bodies.push(Body::new(position, velocity, mass));
    }

    Ok(bodies)
}

fn build_body(index: usize, bc: &BodyConfig) -> Result<Body, ScenarioError> {
    let position = vector2(&bc.x).ok_or(ScenarioError::Arity { index, field: "x", got: bc.x.len() })?;
    let velocity = if bc.v.is_empty() {
        Vector::zeros()
    } else {
        vector2(&bc.v).ok_or(ScenarioError::Arity { index, field: "v", got: bc.v.len() })?
    };
    Ok(Body::new(position, velocity, bc.m))
}

fn vector2(c: &[f64]) -> Option<Vector> {
    match c {
        [x, y] => Some(Vector::new(*x, *y)),
        _ => None,
    }
}

fn invalid(msg: String) -> ScenarioError {
    ScenarioError::InvalidParameter(msg)
}
