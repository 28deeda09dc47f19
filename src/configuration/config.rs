//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – merge and attraction policies
//! - [`ParametersConfig`] – frame-driver timing and the RNG seed
//! - [`SpawnConfig`]      – how pointer-spawned bodies are drawn
//! - [`DiskConfig`]       – optional central mass with an orbiting disk
//! - [`BodyConfig`]       – explicit initial bodies
//! - [`ScenarioConfig`]   – top-level wrapper loaded from a file
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   collision_threshold: size_aware   # or "fixed" (uses fixed_distance)
//!   fixed_distance: 1.0
//!   attraction: product               # or "sum"
//!   merge_tiebreak: lower_index       # or "partner" / "always_lower_index"
//!
//! parameters:
//!   time_scale: 4000.0                # milliseconds per unit of sim time
//!   max_delta: 0.05                   # optional per-frame clamp
//!   seed: 42
//!
//! spawn:
//!   max_speed: 100.0
//!   mass_min: 1.0
//!   mass_max: 200.0
//!
//! disk:
//!   center: [400.0, 400.0]
//!   sun_mass: 5000.0
//!   count: 100
//!
//! bodies:
//!   - x: [ 100.0, 0.0 ]
//!     v: [   0.0, 0.0 ]
//!     m: 40.0
//! ```
//!
//! Every section except `bodies` may be omitted; missing values fall back
//! to the defaults below.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::ScenarioError;
use crate::simulation::params::{AttractionPolicy, MergeTiebreakPolicy};

/// Collision threshold selection as written in YAML
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdConfig {
    #[default]
    SizeAware, // half the sum of both radii
    Fixed, // `fixed_distance` for every pair
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub collision_threshold: ThresholdConfig,
    pub fixed_distance: f64,
    pub attraction: AttractionPolicy,
    pub merge_tiebreak: MergeTiebreakPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            collision_threshold: ThresholdConfig::SizeAware,
            fixed_distance: 1.0,
            attraction: AttractionPolicy::Product,
            merge_tiebreak: MergeTiebreakPolicy::LowerIndex,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub time_scale: f64,         // frame driver: dt = elapsed_ms / time_scale
    pub max_delta: Option<f64>,  // clamp for long frames (window dragged, paused)
    pub seed: u64,               // deterministic seed to make runs reproducible
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            time_scale: 4000.0,
            max_delta: Some(0.05),
            seed: 42,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SpawnConfig {
    pub max_speed: f64,
    pub mass_min: f64,
    pub mass_max: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            max_speed: 100.0,
            mass_min: 1.0,
            mass_max: 200.0,
        }
    }
}

/// A heavy central body with `count` lighter bodies on roughly circular orbits
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DiskConfig {
    pub center: Vec<f64>,
    pub sun_mass: f64,
    pub count: usize,
    pub r_min: f64,        // closest orbit
    pub r_span: f64,       // orbits fall in [r_min, r_min + r_span)
    pub speed_factor: f64, // speed = sqrt(sun_mass / r) * speed_factor
    pub mass_min: f64,
    pub mass_span: f64,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            center: vec![400.0, 400.0],
            sun_mass: 5000.0,
            count: 100,
            r_min: 80.0,
            r_span: 250.0,
            speed_factor: 300.0,
            mass_min: 2.0,
            mass_span: 10.0,
        }
    }
}

/// Initial state of a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // position
    #[serde(default)]
    pub v: Vec<f64>, // velocity, at rest when omitted
    pub m: f64,      // mass, must be positive
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub spawn: SpawnConfig,
    #[serde(default)]
    pub disk: Option<DiskConfig>,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ScenarioError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
