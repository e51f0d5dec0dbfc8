//! Merge history produced by a clustering run.
//!
//! The layout mirrors what hierarchical-clustering consumers expect: one row
//! per stage naming the two clusters joined, the height of every merge, and a
//! leaf order along which the tree can be drawn without crossing branches.

use std::fmt;

use crate::LinkageMethod;

/// Reference to one side of a merge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MergeRef {
    /// An original point, by its 0-based index in the input.
    Point(usize),
    /// The cluster produced by an earlier stage, numbered from 1.
    Stage(usize),
}

impl MergeRef {
    /// Signed encoding used by merge matrices: `-(i + 1)` for point `i` and
    /// `s` for stage `s`.
    ///
    /// # Examples
    /// ```
    /// use hclust1d_core::MergeRef;
    ///
    /// assert_eq!(MergeRef::Point(0).to_signed(), -1);
    /// assert_eq!(MergeRef::Point(4).to_signed(), -5);
    /// assert_eq!(MergeRef::Stage(3).to_signed(), 3);
    /// ```
    #[must_use]
    pub const fn to_signed(self) -> i64 {
        match self {
            Self::Point(index) => -(index as i64) - 1,
            Self::Stage(stage) => stage as i64,
        }
    }
}

impl fmt::Display for MergeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_signed())
    }
}

/// One agglomeration stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Merge {
    left: MergeRef,
    right: MergeRef,
    height: f64,
}

impl Merge {
    pub(crate) const fn new(left: MergeRef, right: MergeRef, height: f64) -> Self {
        Self {
            left,
            right,
            height,
        }
    }

    /// The cluster on the lower side of the axis.
    #[must_use]
    pub const fn left(&self) -> MergeRef {
        self.left
    }

    /// The cluster on the upper side of the axis.
    #[must_use]
    pub const fn right(&self) -> MergeRef {
        self.right
    }

    /// Linkage distance at which the two clusters were joined.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

/// Complete hierarchical clustering of `n` points.
///
/// Holds `n - 1` merges. Under the centroid-style criteria heights may
/// decrease from one stage to the next; see
/// [`LinkageMethod::has_monotone_heights`].
///
/// # Examples
/// ```
/// use hclust1d_core::{LinkageMethod, hclust1d};
///
/// let tree = hclust1d(&[7.0, 1.0, 4.0, 2.0], LinkageMethod::Single)?;
/// assert_eq!(tree.heights(), vec![1.0, 2.0, 3.0]);
/// assert_eq!(tree.merge_matrix(), vec![[-2, -4], [1, -3], [2, -1]]);
/// assert_eq!(tree.order(), &[1, 3, 2, 0]);
/// assert_eq!(tree.labels(), &["7", "1", "4", "2"]);
/// # Ok::<(), hclust1d_core::Hclust1dError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Dendrogram {
    merges: Vec<Merge>,
    order: Vec<usize>,
    labels: Vec<String>,
    method: LinkageMethod,
}

impl Dendrogram {
    pub(crate) fn new(
        merges: Vec<Merge>,
        order: Vec<usize>,
        labels: Vec<String>,
        method: LinkageMethod,
    ) -> Self {
        debug_assert_eq!(merges.len() + 1, order.len());
        debug_assert_eq!(labels.len(), order.len());
        Self {
            merges,
            order,
            labels,
            method,
        }
    }

    /// Number of clustered points.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.order.len()
    }

    /// Merges in stage order; stage `s` is `merges()[s - 1]`.
    #[must_use]
    pub fn merges(&self) -> &[Merge] {
        &self.merges
    }

    /// Merges in the signed `[left, right]` encoding of
    /// [`MergeRef::to_signed`].
    #[must_use]
    pub fn merge_matrix(&self) -> Vec<[i64; 2]> {
        self.merges
            .iter()
            .map(|merge| [merge.left.to_signed(), merge.right.to_signed()])
            .collect()
    }

    /// Merge heights in stage order.
    #[must_use]
    pub fn heights(&self) -> Vec<f64> {
        self.merges.iter().map(Merge::height).collect()
    }

    /// Returns `true` when no height is smaller than the one before it.
    #[must_use]
    pub fn is_monotone(&self) -> bool {
        self.merges
            .windows(2)
            .all(|pair| pair[0].height <= pair[1].height)
    }

    /// Original point indices (0-based) in ascending coordinate order.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// [`Self::order`] shifted to 1-based indices.
    #[must_use]
    pub fn order_one_based(&self) -> Vec<usize> {
        self.order.iter().map(|index| index + 1).collect()
    }

    /// One label per input point, in input order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Linkage criterion that produced the tree.
    #[must_use]
    pub const fn method(&self) -> LinkageMethod {
        self.method
    }

    /// Original indices of the members of the cluster produced at `stage`,
    /// in ascending coordinate order.
    ///
    /// Returns `None` when `stage` is outside `1..=merges().len()`.
    #[must_use]
    pub fn members(&self, stage: usize) -> Option<Vec<usize>> {
        let merge = self.merges.get(stage.checked_sub(1)?)?;
        let mut members = Vec::new();
        let mut pending = vec![merge.right, merge.left];
        while let Some(side) = pending.pop() {
            match side {
                MergeRef::Point(index) => members.push(index),
                MergeRef::Stage(earlier) => {
                    let inner = self.merges.get(earlier.checked_sub(1)?)?;
                    pending.push(inner.right);
                    pending.push(inner.left);
                }
            }
        }
        Some(members)
    }
}
