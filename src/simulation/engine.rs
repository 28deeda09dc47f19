//! Simulation engine
//!
//! Owns the body store and runs one step as
//! force & collision pass -> integrator -> compactor.
//! Single-threaded and not re-entrant: `step` and `spawn` take `&mut self`.

use log::trace;

use crate::error::EngineError;
use crate::simulation::forces::{CollisionPass, MergeEvent};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::{CollisionThresholdPolicy, Parameters};
use crate::simulation::states::{Body, Vector};
use crate::simulation::store::BodyStore;

#[derive(Debug, Clone)]
pub struct Engine {
    params: Parameters,
    store: BodyStore,
    t: f64, // accumulated simulation time
    merges: Vec<MergeEvent>,
    removed: Vec<usize>,
}

impl Engine {
    /// Empty engine. A fixed collision threshold must be finite and `>= 0`.
    pub fn new(params: Parameters) -> Result<Self, EngineError> {
        if let CollisionThresholdPolicy::Fixed { distance } = params.collision_threshold {
            if !(distance.is_finite() && distance >= 0.0) {
                return Err(EngineError::InvalidThreshold(distance));
            }
        }
        Ok(Self {
            params,
            store: BodyStore::new(),
            t: 0.0,
            merges: Vec::new(),
            removed: Vec::new(),
        })
    }

    /// Engine seeded with `bodies`, each checked like [`Engine::spawn`]
    pub fn with_bodies(params: Parameters, bodies: Vec<Body>) -> Result<Self, EngineError> {
        for b in &bodies {
            validate(b)?;
        }
        Ok(Self {
            store: BodyStore::from_bodies(bodies),
            ..Self::new(params)?
        })
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Append a live body at the end of the store and return its index
    pub fn spawn(&mut self, position: Vector, velocity: Vector, mass: f64) -> Result<usize, EngineError> {
        let body = Body::new(position, velocity, mass);
        validate(&body)?;
        Ok(self.store.push(body))
    }

    /// Advance the simulation by `dt` and return the live bodies.
    /// The returned slice stays valid until the next call.
    pub fn step(&mut self, dt: f64) -> Result<&[Body], EngineError> {
        if !dt.is_finite() {
            return Err(EngineError::NonFiniteDelta(dt));
        }

        let n = self.store.len();
        self.merges.clear();

        CollisionPass { params: &self.params }.apply(dt, &mut self.store, &mut self.merges);
        euler_integrator(&mut self.store, dt);
        self.removed = self.store.compact();
        self.t += dt;

        trace!(
            "step dt={dt:.5}: {n} -> {} bodies, {} merges",
            self.store.len(),
            self.merges.len()
        );

        Ok(self.store.as_slice())
    }

    /// Live bodies, in slot order
    pub fn bodies(&self) -> &[Body] {
        self.store.as_slice()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Simulation time accumulated over all steps
    pub fn time(&self) -> f64 {
        self.t
    }

    /// Merges performed by the last step, in the order they happened
    pub fn last_merges(&self) -> &[MergeEvent] {
        &self.merges
    }

    /// Slot indices (before compaction, ascending) removed by the last step.
    /// Parallel collections stay aligned by removing these in reverse order.
    pub fn last_removed(&self) -> &[usize] {
        &self.removed
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies().iter().map(|b| b.mass).sum()
    }

    pub fn total_momentum(&self) -> Vector {
        self.bodies().iter().fold(Vector::zeros(), |p, b| p + b.momentum())
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies().iter().map(Body::kinetic_energy).sum()
    }
}

fn validate(body: &Body) -> Result<(), EngineError> {
    if !(body.mass.is_finite() && body.mass > 0.0) {
        return Err(EngineError::NonPositiveMass(body.mass));
    }
    if !body.is_finite() {
        return Err(EngineError::NonFiniteVector);
    }
    Ok(())
}
