//! Spawn-parameter generation for user-placed bodies
//!
//! The engine never draws random numbers itself; whoever turns pointer
//! clicks into bodies picks velocity and mass here, from a seeded RNG so
//! runs can be reproduced.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::EngineError;
use crate::simulation::engine::Engine;
use crate::simulation::states::Vector;

#[derive(Debug, Clone)]
pub struct Spawner {
    pub max_speed: f64, // each velocity component in [-max_speed, max_speed)
    pub mass_min: f64,
    pub mass_max: f64,
    rng: StdRng,
}

impl Spawner {
    /// Ranges are expected to be validated already: `mass_min > 0`,
    /// `mass_min <= mass_max`, `max_speed >= 0`
    pub fn new(max_speed: f64, mass_min: f64, mass_max: f64, seed: u64) -> Self {
        Self {
            max_speed,
            mass_min,
            mass_max,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a velocity and mass for a new body
    pub fn sample(&mut self) -> (Vector, f64) {
        let velocity = if self.max_speed > 0.0 {
            Vector::new(
                self.rng.gen_range(-self.max_speed..self.max_speed),
                self.rng.gen_range(-self.max_speed..self.max_speed),
            )
        } else {
            Vector::zeros()
        };
        let mass = if self.mass_max > self.mass_min {
            self.rng.gen_range(self.mass_min..self.mass_max)
        } else {
            self.mass_min
        };
        (velocity, mass)
    }

    /// Spawn a body at `position` with freshly drawn velocity and mass
    pub fn spawn_at(&mut self, engine: &mut Engine, position: Vector) -> Result<usize, EngineError> {
        let (velocity, mass) = self.sample();
        engine.spawn(position, velocity, mass)
    }
}
