//! Per-cluster aggregates and the linkage distance between adjacent clusters.
//!
//! Every cluster is a contiguous run of ranks on the sorted axis, so its
//! extremes, size and median come straight from the rank bounds. The
//! remaining fields carry the running aggregates that the averaging and
//! centroid criteria need to price a merge in O(1).

use crate::LinkageMethod;

use super::chain::SortedAxis;

/// Running summary of one cluster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ClusterSummary {
    /// Rank of the leftmost member.
    pub(crate) first: usize,
    /// Rank of the rightmost member.
    pub(crate) last: usize,
    /// Spread towards the left edge.
    ///
    /// Average linkage stores `Σ (x − min)` over the members. McQuitty
    /// stores the recursively halved equivalent.
    pub(crate) left_spread: f64,
    /// Spread towards the right edge, mirroring [`Self::left_spread`].
    pub(crate) right_spread: f64,
    /// Sum of coordinates for centroid and Ward linkage; the weighted
    /// centroid for WPGMC.
    pub(crate) centroid: f64,
}

impl ClusterSummary {
    /// Summary of the single point at `rank`.
    pub(crate) fn singleton(rank: usize, value: f64) -> Self {
        Self {
            first: rank,
            last: rank,
            left_spread: 0.0,
            right_spread: 0.0,
            centroid: value,
        }
    }

    /// Number of members.
    pub(crate) fn count(&self) -> usize {
        self.last - self.first + 1
    }

    fn weight(&self) -> f64 {
        self.count() as f64
    }

    fn min(&self, axis: &SortedAxis) -> f64 {
        axis.value(self.first)
    }

    fn max(&self, axis: &SortedAxis) -> f64 {
        axis.value(self.last)
    }

    fn mean(&self) -> f64 {
        self.centroid / self.weight()
    }

    /// Summary of the union of `left` and the cluster immediately to its
    /// right.
    pub(crate) fn merge(
        method: LinkageMethod,
        left: &Self,
        right: &Self,
        axis: &SortedAxis,
    ) -> Self {
        debug_assert_eq!(left.last + 1, right.first, "clusters must be adjacent");
        let mut merged = Self {
            first: left.first,
            last: right.last,
            left_spread: 0.0,
            right_spread: 0.0,
            centroid: 0.0,
        };
        match method {
            LinkageMethod::Average => {
                merged.left_spread = left.left_spread
                    + right.left_spread
                    + right.weight() * (right.min(axis) - left.min(axis));
                merged.right_spread = left.right_spread
                    + right.right_spread
                    + left.weight() * (right.max(axis) - left.max(axis));
            }
            LinkageMethod::McQuitty => {
                merged.left_spread = 0.5 * left.left_spread
                    + 0.5 * right.left_spread
                    + (right.min(axis) - left.min(axis));
                merged.right_spread = 0.5 * left.right_spread
                    + 0.5 * right.right_spread
                    + (right.max(axis) - left.max(axis));
            }
            LinkageMethod::Centroid | LinkageMethod::WardD | LinkageMethod::WardD2 => {
                merged.centroid = left.centroid + right.centroid;
            }
            LinkageMethod::Median => {
                merged.centroid = 0.5 * (left.centroid + right.centroid);
            }
            LinkageMethod::Single
            | LinkageMethod::SingleViaHeap
            | LinkageMethod::Complete
            | LinkageMethod::TrueMedian => {}
        }
        merged
    }

    /// Linkage distance between `left` and the cluster immediately to its
    /// right.
    pub(crate) fn distance(
        method: LinkageMethod,
        left: &Self,
        right: &Self,
        axis: &SortedAxis,
    ) -> f64 {
        let gap = right.min(axis) - left.max(axis);
        match method {
            LinkageMethod::Single | LinkageMethod::SingleViaHeap => gap,
            LinkageMethod::Complete => right.max(axis) - left.min(axis),
            LinkageMethod::Average => {
                left.right_spread / left.weight() + gap + right.left_spread / right.weight()
            }
            LinkageMethod::McQuitty => 0.5 * left.right_spread + gap + 0.5 * right.left_spread,
            LinkageMethod::Centroid => squared(right.mean() - left.mean()),
            LinkageMethod::WardD => ward(left, right),
            LinkageMethod::WardD2 => ward(left, right).sqrt(),
            LinkageMethod::TrueMedian => {
                axis.median(right.first, right.last) - axis.median(left.first, left.last)
            }
            LinkageMethod::Median => squared(right.centroid - left.centroid),
        }
    }
}

fn squared(value: f64) -> f64 {
    value * value
}

/// Doubled increase in within-cluster sum of squares caused by the merge.
fn ward(left: &ClusterSummary, right: &ClusterSummary) -> f64 {
    let (left_weight, right_weight) = (left.weight(), right.weight());
    let scale = 2.0 * left_weight * right_weight / (left_weight + right_weight);
    scale * squared(right.mean() - left.mean())
}
