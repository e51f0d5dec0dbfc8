//! Sorted axis and the doubly linked chain of candidate merges.
//!
//! After sorting, every cluster the engine can ever form is a contiguous run
//! of ranks, and only adjacent clusters can be the closest pair. Each
//! candidate merge is therefore an [`Interval`] between two neighbouring
//! clusters, and the intervals form a chain in axis order. Merging an
//! interval splices it out of the chain and folds its cluster into both
//! neighbours.

use std::ops::{Index, IndexMut};

use crate::{LinkageMethod, Result, dendrogram::MergeRef, error::Hclust1dError, order::order};

use super::cluster::ClusterSummary;

/// Input points viewed in ascending order.
#[derive(Clone, Debug)]
pub(crate) struct SortedAxis {
    /// `order[rank]` is the original index of the point at `rank`.
    order: Vec<usize>,
    /// `values[rank]` is the coordinate of the point at `rank`.
    values: Vec<f64>,
}

impl SortedAxis {
    pub(crate) fn new(points: &[f64]) -> Self {
        let order = order(points);
        let values = order.iter().map(|&index| points[index]).collect();
        Self { order, values }
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// Coordinate of the point at `rank`.
    pub(crate) fn value(&self, rank: usize) -> f64 {
        self.values[rank]
    }

    /// Original index of the point at `rank`.
    pub(crate) fn original_index(&self, rank: usize) -> usize {
        self.order[rank]
    }

    /// Median of the points occupying ranks `first..=last`.
    pub(crate) fn median(&self, first: usize, last: usize) -> f64 {
        let count = last - first + 1;
        let middle = first + count / 2;
        if count % 2 == 1 {
            self.values[middle]
        } else {
            (self.values[middle - 1] + self.values[middle]) / 2.0
        }
    }

    pub(crate) fn into_order(self) -> Vec<usize> {
        self.order
    }
}

/// A live candidate merge between two adjacent clusters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Interval {
    /// Interval immediately to the left in the chain.
    pub(crate) left_neighbour: Option<usize>,
    /// Interval immediately to the right in the chain.
    pub(crate) right_neighbour: Option<usize>,
    /// Cluster on the left side of the gap.
    pub(crate) left: ClusterSummary,
    /// Cluster on the right side of the gap.
    pub(crate) right: ClusterSummary,
    /// How the left cluster is referenced in the merge sequence.
    pub(crate) left_ref: MergeRef,
    /// How the right cluster is referenced in the merge sequence.
    pub(crate) right_ref: MergeRef,
}

/// Arena of intervals addressed by dense id.
///
/// Interval `i` starts out between ranks `i` and `i + 1`. Ids never change,
/// so the chain's left-to-right order always matches increasing ids.
#[derive(Clone, Debug)]
pub(crate) struct IntervalChain {
    intervals: Vec<Interval>,
}

impl IntervalChain {
    /// Builds the initial chain and the initial merge distance of every
    /// interval under `method`.
    ///
    /// # Errors
    /// Returns [`Hclust1dError::InsufficientPoints`] when the axis holds fewer
    /// than two points.
    pub(crate) fn build(axis: &SortedAxis, method: LinkageMethod) -> Result<(Self, Vec<f64>)> {
        let count = axis.len();
        if count < 2 {
            return Err(Hclust1dError::InsufficientPoints { got: count });
        }
        let last = count - 2;

        let mut intervals = Vec::with_capacity(count - 1);
        let mut keys = Vec::with_capacity(count - 1);
        for id in 0..=last {
            let gap = axis.value(id + 1) - axis.value(id);
            keys.push(initial_distance(method, gap));
            intervals.push(Interval {
                left_neighbour: id.checked_sub(1),
                right_neighbour: (id < last).then_some(id + 1),
                left: ClusterSummary::singleton(id, axis.value(id)),
                right: ClusterSummary::singleton(id + 1, axis.value(id + 1)),
                left_ref: MergeRef::Point(axis.original_index(id)),
                right_ref: MergeRef::Point(axis.original_index(id + 1)),
            });
        }
        Ok((Self { intervals }, keys))
    }

    /// Splices interval `id` out of the chain after it merged at `stage`.
    ///
    /// Both neighbours are relinked around `id` and told that the cluster on
    /// their inner side is now the product of `stage`. Returns the
    /// `(left, right)` neighbours so the caller can refresh their distances.
    pub(crate) fn splice(&mut self, id: usize, stage: usize) -> (Option<usize>, Option<usize>) {
        let Interval {
            left_neighbour,
            right_neighbour,
            ..
        } = self.intervals[id];

        if let Some(left_id) = left_neighbour {
            let left = &mut self.intervals[left_id];
            left.right_neighbour = right_neighbour;
            left.right_ref = MergeRef::Stage(stage);
        }
        if let Some(right_id) = right_neighbour {
            let right = &mut self.intervals[right_id];
            right.left_neighbour = left_neighbour;
            right.left_ref = MergeRef::Stage(stage);
        }
        (left_neighbour, right_neighbour)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.intervals.len()
    }
}

impl Index<usize> for IntervalChain {
    type Output = Interval;

    fn index(&self, id: usize) -> &Interval {
        &self.intervals[id]
    }
}

impl IndexMut<usize> for IntervalChain {
    fn index_mut(&mut self, id: usize) -> &mut Interval {
        &mut self.intervals[id]
    }
}

/// Distance between two adjacent singletons separated by `gap`.
fn initial_distance(method: LinkageMethod, gap: f64) -> f64 {
    if method.uses_squared_distances() {
        gap * gap
    } else {
        gap
    }
}
