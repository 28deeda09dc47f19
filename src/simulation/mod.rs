pub mod states;
pub mod store;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod engine;
pub mod clock;
pub mod spawner;
pub mod scenario;
