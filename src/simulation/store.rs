//! Body Store and Compactor.
//!
//! Bodies live in a dense `Vec<Body>` with a parallel liveness bitmap.
//! A slot marked removed (a tombstone) is only ever produced inside the
//! force & collision pass and is cleared by [`BodyStore::compact`] before
//! the step returns, so outside of a step every slot is live.

use crate::simulation::states::Body;

#[derive(Debug, Clone, Default)]
pub struct BodyStore {
    bodies: Vec<Body>,
    live: Vec<bool>,
}

impl BodyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bodies(bodies: Vec<Body>) -> Self {
        let live = vec![true; bodies.len()];
        Self { bodies, live }
    }

    /// Number of slots, tombstones included
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Append a live body, returning its slot index
    pub fn push(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.live.push(true);
        self.bodies.len() - 1
    }

    pub fn is_live(&self, i: usize) -> bool {
        self.live[i]
    }

    /// `true` when no slot holds a tombstone
    pub fn is_dense(&self) -> bool {
        self.live.iter().all(|&l| l)
    }

    /// Live body at slot `i`. Reading a tombstone here is a defect in the
    /// caller, never a recoverable condition.
    pub fn live(&self, i: usize) -> &Body {
        if !self.live[i] {
            unreachable!("slot {i} read after it was removed");
        }
        &self.bodies[i]
    }

    pub fn live_mut(&mut self, i: usize) -> &mut Body {
        if !self.live[i] {
            unreachable!("slot {i} written after it was removed");
        }
        &mut self.bodies[i]
    }

    pub fn get(&self, i: usize) -> Option<&Body> {
        match self.live.get(i) {
            Some(true) => self.bodies.get(i),
            _ => None,
        }
    }

    /// Tombstone slot `i` until the next compaction
    pub fn remove(&mut self, i: usize) {
        debug_assert!(self.live[i], "slot {i} removed twice");
        self.live[i] = false;
    }

    /// Iterate over live bodies in slot order
    pub fn iter_live(&self) -> impl Iterator<Item = &Body> {
        self.bodies
            .iter()
            .zip(self.live.iter())
            .filter_map(|(b, &l)| l.then_some(b))
    }

    pub fn iter_live_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies
            .iter_mut()
            .zip(self.live.iter())
            .filter_map(|(b, &l)| l.then_some(b))
    }

    /// Drop every tombstoned slot, keeping survivors in their relative order.
    /// Returns the removed slot indices in ascending order (empty when the
    /// store was already dense, in which case nothing moves).
    pub fn compact(&mut self) -> Vec<usize> {
        let removed: Vec<usize> = self
            .live
            .iter()
            .enumerate()
            .filter_map(|(i, &l)| (!l).then_some(i))
            .collect();
        if removed.is_empty() {
            return removed;
        }

        let mut flags = self.live.iter();
        self.bodies.retain(|_| flags.next().copied().unwrap_or(false));
        self.live.clear();
        self.live.resize(self.bodies.len(), true);
        removed
    }

    /// Dense view of all bodies. Only valid once compacted.
    pub fn as_slice(&self) -> &[Body] {
        if !self.is_dense() {
            unreachable!("live view requested while tombstones remain");
        }
        &self.bodies
    }
}
