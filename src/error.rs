//! Error types for the simulator.

use thiserror::Error;

/// Caller misuse rejected by the engine before any state changes
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("time step must be finite, got {0}")]
    NonFiniteDelta(f64),

    #[error("body mass must be finite and positive, got {0}")]
    NonPositiveMass(f64),

    #[error("body position and velocity must be finite")]
    NonFiniteVector,

    #[error("fixed collision distance must be finite and >= 0, got {0}")]
    InvalidThreshold(f64),
}

/// Problems turning a scenario file into a runnable scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("body {index}: `{field}` needs 2 components, got {got}")]
    Arity {
        index: usize,
        field: &'static str,
        got: usize,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
