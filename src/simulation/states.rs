//! Core state types for the N-body simulation.
//!
//! - `Vector` is a 2D nalgebra vector of `f64`
//! - `Body` is a single point mass with position, velocity and mass
//!
//! Bodies carry no identity of their own; within a step a body is known by
//! its slot index in the [`BodyStore`](super::store::BodyStore).

use nalgebra::Vector2;
pub type Vector = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vector,
    pub velocity: Vector,
    pub mass: f64, // strictly positive while live
}

impl Body {
    pub fn new(position: Vector, velocity: Vector, mass: f64) -> Self {
        Self { position, velocity, mass }
    }

    /// Body at rest at `position`
    pub fn at_rest(position: Vector, mass: f64) -> Self {
        Self::new(position, Vector::zeros(), mass)
    }

    /// Size used for collisions and drawing: `sqrt(mass)`
    pub fn radius(&self) -> f64 {
        self.mass.sqrt()
    }

    pub fn momentum(&self) -> Vector {
        self.velocity * self.mass
    }

    /// 0.5 * m * |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.position.iter().all(|c| c.is_finite())
            && self.velocity.iter().all(|c| c.is_finite())
    }
}
