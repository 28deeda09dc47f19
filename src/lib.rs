pub mod simulation;
pub mod configuration;
pub mod inspection;
pub mod benchmark;
pub mod error;
#[cfg(feature = "viewer")]
pub mod visualization;

pub use simulation::states::{Body, Vector};
pub use simulation::store::BodyStore;
pub use simulation::params::{Parameters, CollisionThresholdPolicy, AttractionPolicy, MergeTiebreakPolicy};
pub use simulation::forces::{CollisionPass, MergeEvent, merged_state};
pub use simulation::integrator::euler_integrator;
pub use simulation::engine::Engine;
pub use simulation::clock::FrameClock;
pub use simulation::spawner::Spawner;
pub use simulation::scenario::{Scenario, build_disk};

pub use configuration::config::{EngineConfig, ParametersConfig, SpawnConfig, DiskConfig, BodyConfig, ScenarioConfig, ThresholdConfig};

pub use inspection::debug_table::{body_table, format_scalars, format_vectors};

pub use error::{EngineError, ScenarioError};

pub use benchmark::benchmark::{bench_step, time_steps};

#[cfg(feature = "viewer")]
pub use visualization::viewer2d::run_2d;
