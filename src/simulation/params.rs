//! Physical policies for the force & collision pass
//!
//! Each rule is selectable per scenario:
//! - `CollisionThresholdPolicy` decides when two bodies touch,
//! - `AttractionPolicy` scales the pull between two bodies,
//! - `MergeTiebreakPolicy` decides which slot survives a merge.

use serde::Deserialize;

use crate::simulation::states::Body;

/// Distance at or below which a pair merges instead of attracting
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CollisionThresholdPolicy {
    /// `(sqrt(m_i) + sqrt(m_j)) / 2`
    #[default]
    SizeAware,
    /// Same distance for every pair
    Fixed { distance: f64 },
}

impl CollisionThresholdPolicy {
    pub fn threshold(&self, a: &Body, b: &Body) -> f64 {
        match *self {
            CollisionThresholdPolicy::SizeAware => (a.radius() + b.radius()) / 2.0,
            CollisionThresholdPolicy::Fixed { distance } => distance,
        }
    }
}

/// Scalar that multiplies the pull of `j` on `i`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AttractionPolicy {
    /// `m_i * m_j`
    #[default]
    Product,
    /// `m_i + m_j`
    Sum,
}

impl AttractionPolicy {
    pub fn attraction(&self, mi: f64, mj: f64) -> f64 {
        match self {
            AttractionPolicy::Product => mi * mj,
            AttractionPolicy::Sum => mi + mj,
        }
    }
}

/// Which body keeps its slot when two bodies merge
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MergeTiebreakPolicy {
    /// Heavier survives, lower index on equal mass
    #[default]
    LowerIndex,
    /// Heavier survives, the visited partner on equal mass
    Partner,
    /// Lower index survives regardless of mass
    AlwaysLowerIndex,
}

impl MergeTiebreakPolicy {
    /// Slot that survives a merge between `owner` (outer traversal) and
    /// `partner` (inner traversal), given their pre-merge masses
    pub fn survivor(&self, owner: usize, owner_mass: f64, partner: usize, partner_mass: f64) -> usize {
        match self {
            MergeTiebreakPolicy::AlwaysLowerIndex => owner.min(partner),
            _ if owner_mass > partner_mass => owner,
            _ if partner_mass > owner_mass => partner,
            MergeTiebreakPolicy::LowerIndex => owner.min(partner),
            MergeTiebreakPolicy::Partner => partner,
        }
    }
}

/// Policy bundle handed to the engine
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Parameters {
    pub collision_threshold: CollisionThresholdPolicy,
    pub attraction: AttractionPolicy,
    pub merge_tiebreak: MergeTiebreakPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::Vector;

    #[test]
    fn size_aware_threshold_averages_radii() {
        let a = Body::at_rest(Vector::zeros(), 4.0);
        let b = Body::at_rest(Vector::zeros(), 16.0);
        let t = CollisionThresholdPolicy::SizeAware.threshold(&a, &b);
        assert_eq!(t, 3.0);
    }

    #[test]
    fn tiebreak_prefers_heavier_body() {
        for policy in [MergeTiebreakPolicy::LowerIndex, MergeTiebreakPolicy::Partner] {
            assert_eq!(policy.survivor(3, 1.0, 1, 2.0), 1);
            assert_eq!(policy.survivor(1, 2.0, 3, 1.0), 1);
            assert_eq!(policy.survivor(3, 2.0, 1, 1.0), 3);
        }
    }

    #[test]
    fn tiebreak_on_equal_mass() {
        assert_eq!(MergeTiebreakPolicy::LowerIndex.survivor(4, 5.0, 2, 5.0), 2);
        assert_eq!(MergeTiebreakPolicy::Partner.survivor(2, 5.0, 4, 5.0), 4);
        assert_eq!(MergeTiebreakPolicy::AlwaysLowerIndex.survivor(4, 9.0, 2, 1.0), 2);
    }
}
