//! Recovering 1-D coordinates from a pairwise distance matrix.
//!
//! Distances are supplied in condensed form: the strict upper triangle of the
//! `n × n` matrix, row by row, so entry `(i, j)` with `i < j` sits at
//! `n·i − i(i+1)/2 + (j − i − 1)`.
//!
//! Reconstruction anchors the axis on the widest gap between consecutive
//! points of the input ordering and places every other point on the side of
//! that gap it is closer to. When the distances really are 1-D, the result
//! reproduces them up to translation and reflection, which leaves every
//! linkage unchanged.

use crate::error::DistanceError;

/// Distances whose largest first-subdiagonal entry falls below this value are
/// treated as a single location.
pub const DEGENERATE_SPREAD: f64 = 1e-10;

/// Units of a condensed distance matrix.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DistanceScale {
    /// Plain distances.
    #[default]
    Linear,
    /// Squared distances; square roots are taken before reconstruction.
    Squared,
}

/// Number of entries in the condensed form of an `n × n` distance matrix.
#[must_use]
pub const fn condensed_len(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Position of entry `(i, j)`, `i < j`, in a condensed matrix over `n` points.
const fn condensed_index(n: usize, i: usize, j: usize) -> usize {
    n * i - (i + 1) * i / 2 + j - i - 1
}

/// Returns the element-wise square roots of `squared`.
///
/// # Errors
/// Returns [`DistanceError::NegativeSquaredDistance`] for the first negative
/// entry.
///
/// # Examples
/// ```
/// use hclust1d_core::sqrt_distances;
///
/// assert_eq!(sqrt_distances(&[4.0, 9.0, 0.0])?, vec![2.0, 3.0, 0.0]);
/// assert!(sqrt_distances(&[1.0, -1.0]).is_err());
/// # Ok::<(), hclust1d_core::DistanceError>(())
/// ```
pub fn sqrt_distances(squared: &[f64]) -> Result<Vec<f64>, DistanceError> {
    squared
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if value < 0.0 {
                Err(DistanceError::NegativeSquaredDistance { index, value })
            } else {
                Ok(value.sqrt())
            }
        })
        .collect()
}

/// Reconstructs coordinates for `n` points from their condensed distances.
///
/// # Errors
/// Returns [`DistanceError::TooFewPoints`] when `n < 2`,
/// [`DistanceError::CondensedLengthMismatch`] when `condensed` does not hold
/// `n(n−1)/2` entries, and [`DistanceError::InvalidDistance`] for the first
/// negative or non-finite entry.
///
/// # Examples
/// ```
/// use hclust1d_core::points_from_distances;
///
/// // Points 0, 3 and 1 on a line.
/// let points = points_from_distances(&[3.0, 1.0, 2.0], 3)?;
/// assert_eq!(points, vec![0.0, 3.0, 1.0]);
/// # Ok::<(), hclust1d_core::DistanceError>(())
/// ```
pub fn points_from_distances(condensed: &[f64], n: usize) -> Result<Vec<f64>, DistanceError> {
    if n < 2 {
        return Err(DistanceError::TooFewPoints { got: n });
    }
    let expected = condensed_len(n);
    if condensed.len() != expected {
        return Err(DistanceError::CondensedLengthMismatch {
            len: condensed.len(),
            expected,
        });
    }
    if let Some((index, &value)) = condensed
        .iter()
        .enumerate()
        .find(|(_, value)| !value.is_finite() || **value < 0.0)
    {
        return Err(DistanceError::InvalidDistance { index, value });
    }

    let distance = |i: usize, j: usize| match i.cmp(&j) {
        std::cmp::Ordering::Equal => 0.0,
        std::cmp::Ordering::Less => condensed[condensed_index(n, i, j)],
        std::cmp::Ordering::Greater => condensed[condensed_index(n, j, i)],
    };

    let (first, spread) = (0..n - 1).fold((0, distance(0, 1)), |(best, widest), i| {
        let gap = distance(i, i + 1);
        if gap > widest { (i, gap) } else { (best, widest) }
    });
    if spread < DEGENERATE_SPREAD {
        return Ok(vec![0.0; n]);
    }
    let second = first + 1;

    Ok((0..n)
        .map(|i| {
            let to_first = distance(i, first);
            let to_second = distance(i, second);
            if to_first + to_second > spread + DEGENERATE_SPREAD && to_first < to_second {
                -to_first
            } else {
                to_first
            }
        })
        .collect())
}
