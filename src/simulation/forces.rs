//! Force & collision pass
//!
//! Visits every ordered pair `(i, j)`, `i != j`, of live bodies. A pair that
//! is within the collision threshold merges inelastically; otherwise the
//! owner `i` is pulled toward `j`. Only the owner's velocity changes for a
//! gravity contribution; `j` picks up its own pull when it becomes the owner.
//!
//! Merges tombstone the absorbed body immediately, so it is skipped both as
//! an owner and as a partner for the rest of the pass.

use log::debug;

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Vector};
use crate::simulation::store::BodyStore;

/// One inelastic merge performed during a pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeEvent {
    pub survivor: usize, // slot index before compaction
    pub absorbed: usize, // slot index before compaction
    pub mass: f64,       // combined mass
}

/// Mass-weighted velocity and total mass of two merging bodies
pub fn merged_state(a: &Body, b: &Body) -> (Vector, f64) {
    let mass = a.mass + b.mass;
    let velocity = (a.velocity * a.mass + b.velocity * b.mass) / mass;
    (velocity, mass)
}

pub struct CollisionPass<'a> {
    pub params: &'a Parameters,
}

impl CollisionPass<'_> {
    /// Update velocities (and masses on merge) of every live body in `store`.
    /// Merges are appended to `events` in the order they happen.
    pub fn apply(&self, dt: f64, store: &mut BodyStore, events: &mut Vec<MergeEvent>) {
        let n = store.len();

        for i in 0..n {
            if !store.is_live(i) {
                continue;
            }

            for j in 0..n {
                if i == j || !store.is_live(j) {
                    continue;
                }

                // Copies: the merge branch writes one of the two slots
                let bi = *store.live(i);
                let bj = *store.live(j);

                let displacement = bj.position - bi.position;
                let distance = displacement.norm();

                if distance <= self.params.collision_threshold.threshold(&bi, &bj) {
                    let (velocity, mass) = merged_state(&bi, &bj);
                    let survivor = self.params.merge_tiebreak.survivor(i, bi.mass, j, bj.mass);
                    let absorbed = if survivor == i { j } else { i };

                    let keep = store.live_mut(survivor);
                    keep.velocity = velocity;
                    keep.mass = mass;
                    store.remove(absorbed);

                    debug!("merge: slot {absorbed} into slot {survivor}, mass {mass:.3}");
                    events.push(MergeEvent { survivor, absorbed, mass });

                    // the owner is gone: it neither pulls nor gets pulled any more
                    if absorbed == i {
                        break;
                    }
                } else {
                    let attraction = self.params.attraction.attraction(bi.mass, bj.mass);
                    let owner = store.live_mut(i);
                    owner.velocity += displacement * dt * attraction / distance / bi.mass;
                }
            }
        }
    }
}
