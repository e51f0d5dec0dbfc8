//! Sorting permutations over scalar inputs.
//!
//! The clustering engine never moves the caller's points. It works on ranks
//! instead, so the one thing it needs from sorting is the permutation that
//! lists original indices in ascending value order.

/// Returns the permutation that sorts `values` in ascending order.
///
/// The sort is stable: equal values keep their input order, so ties are
/// broken by the lower original index. `-0.0` and `0.0` count as equal.
/// Values are otherwise compared with [`f64::total_cmp`], which keeps the
/// result deterministic even for inputs the clustering front end would
/// reject (NaN sorts last).
///
/// # Examples
/// ```
/// use hclust1d_core::order;
///
/// assert_eq!(order(&[3.0, 1.0, 2.0, 1.0]), vec![1, 3, 2, 0]);
/// assert!(order(&[]).is_empty());
/// ```
#[must_use]
pub fn order(values: &[f64]) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..values.len()).collect();
    permutation.sort_by(|&left, &right| {
        unsigned_zero(values[left]).total_cmp(&unsigned_zero(values[right]))
    });
    permutation
}

fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
