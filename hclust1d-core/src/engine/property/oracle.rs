//! Brute-force agglomerative clustering used as a reference.
//!
//! Keeps a full dissimilarity matrix, searches every pair of live clusters
//! for the minimum and applies the classic Lance–Williams update. Nothing
//! here relies on the 1-D structure the engine exploits: clusters are
//! arbitrary member sets and the closest pair need not be adjacent.

use crate::LinkageMethod;

/// One stage of the reference clustering.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct OracleMerge {
    /// Height reported for the stage.
    pub height: f64,
    /// Original indices of the merged cluster, ascending.
    pub members: Vec<usize>,
}

/// Clusters `points` by exhaustive search.
pub(super) fn brute_force_linkage(points: &[f64], method: LinkageMethod) -> Vec<OracleMerge> {
    let n = points.len();
    let squared_input = matches!(
        method,
        LinkageMethod::Centroid | LinkageMethod::Median | LinkageMethod::WardD | LinkageMethod::WardD2
    );
    let mut dissimilarity: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    let gap = (points[i] - points[j]).abs();
                    if squared_input { gap * gap } else { gap }
                })
                .collect()
        })
        .collect();
    let mut clusters: Vec<Option<Vec<usize>>> = (0..n).map(|i| Some(vec![i])).collect();
    let mut merges = Vec::with_capacity(n.saturating_sub(1));

    for _ in 1..n {
        let (a, b) = closest_pair(points, method, &clusters, &dissimilarity);
        let d_ab = pair_distance(points, method, &clusters, &dissimilarity, a, b);
        let height = if method == LinkageMethod::WardD2 {
            d_ab.sqrt()
        } else {
            d_ab
        };

        let size_a = member_count(&clusters, a);
        let size_b = member_count(&clusters, b);
        for k in 0..n {
            if k == a || k == b || clusters[k].is_none() {
                continue;
            }
            let size_k = member_count(&clusters, k);
            let updated = lance_williams(
                method,
                [dissimilarity[a][k], dissimilarity[b][k], d_ab],
                [size_a, size_b, size_k],
            );
            dissimilarity[a][k] = updated;
            dissimilarity[k][a] = updated;
        }

        let absorbed = clusters[b].take().unwrap_or_default();
        let members = clusters[a].get_or_insert_with(Vec::new);
        members.extend(absorbed);
        members.sort_unstable();
        merges.push(OracleMerge {
            height,
            members: members.clone(),
        });
    }
    merges
}

fn member_count(clusters: &[Option<Vec<usize>>], slot: usize) -> f64 {
    clusters[slot].as_ref().map_or(0.0, |members| members.len() as f64)
}

fn closest_pair(
    points: &[f64],
    method: LinkageMethod,
    clusters: &[Option<Vec<usize>>],
    dissimilarity: &[Vec<f64>],
) -> (usize, usize) {
    let live: Vec<usize> = (0..clusters.len())
        .filter(|&slot| clusters[slot].is_some())
        .collect();
    let mut best = (live[0], live[1]);
    let mut best_distance = f64::INFINITY;
    for (offset, &a) in live.iter().enumerate() {
        for &b in &live[offset + 1..] {
            let distance = pair_distance(points, method, clusters, dissimilarity, a, b);
            if distance < best_distance {
                best = (a, b);
                best_distance = distance;
            }
        }
    }
    best
}

fn pair_distance(
    points: &[f64],
    method: LinkageMethod,
    clusters: &[Option<Vec<usize>>],
    dissimilarity: &[Vec<f64>],
    a: usize,
    b: usize,
) -> f64 {
    if method != LinkageMethod::TrueMedian {
        return dissimilarity[a][b];
    }
    let median_of = |slot: usize| {
        let mut values: Vec<f64> = clusters[slot]
            .iter()
            .flatten()
            .map(|&index| points[index])
            .collect();
        values.sort_by(f64::total_cmp);
        let middle = values.len() / 2;
        if values.len() % 2 == 1 {
            values[middle]
        } else {
            (values[middle - 1] + values[middle]) / 2.0
        }
    };
    (median_of(a) - median_of(b)).abs()
}

/// Distance from the union of `a` and `b` to `k`, given
/// `[d(a, k), d(b, k), d(a, b)]` and the cluster sizes `[|a|, |b|, |k|]`.
fn lance_williams(method: LinkageMethod, [d_ak, d_bk, d_ab]: [f64; 3], [n_a, n_b, n_k]: [f64; 3]) -> f64 {
    match method {
        LinkageMethod::Single | LinkageMethod::SingleViaHeap => d_ak.min(d_bk),
        LinkageMethod::Complete => d_ak.max(d_bk),
        LinkageMethod::Average => (n_a * d_ak + n_b * d_bk) / (n_a + n_b),
        LinkageMethod::McQuitty => 0.5 * (d_ak + d_bk),
        LinkageMethod::Centroid => {
            let total = n_a + n_b;
            (n_a * d_ak + n_b * d_bk) / total - n_a * n_b * d_ab / (total * total)
        }
        LinkageMethod::Median => 0.5 * d_ak + 0.5 * d_bk - 0.25 * d_ab,
        LinkageMethod::WardD | LinkageMethod::WardD2 => {
            ((n_a + n_k) * d_ak + (n_b + n_k) * d_bk - n_k * d_ab) / (n_a + n_b + n_k)
        }
        LinkageMethod::TrueMedian => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::brute_force_linkage;
    use crate::LinkageMethod;

    fn heights(points: &[f64], method: LinkageMethod) -> Vec<f64> {
        brute_force_linkage(points, method)
            .into_iter()
            .map(|merge| merge.height)
            .collect()
    }

    #[test]
    fn oracle_single_and_complete_on_four_points() {
        let points = [1.0, 2.0, 4.0, 7.0];
        assert_eq!(heights(&points, LinkageMethod::Single), vec![1.0, 2.0, 3.0]);
        assert_eq!(heights(&points, LinkageMethod::Complete), vec![1.0, 3.0, 6.0]);
    }

    #[test]
    fn oracle_ward_matches_closed_form() {
        // {0, 2} then 6 joins: 2 * 2 * 1 / 3 * (6 - 1)^2.
        let merges = brute_force_linkage(&[0.0, 2.0, 6.0], LinkageMethod::WardD);
        assert_eq!(merges[0].height, 4.0);
        assert!((merges[1].height - 100.0 / 3.0).abs() < 1e-12);
        assert_eq!(merges[1].members, vec![0, 1, 2]);
    }

    #[test]
    fn oracle_true_median_tracks_medians() {
        let merges = brute_force_linkage(&[0.0, 1.0, 3.0, 10.0], LinkageMethod::TrueMedian);
        let heights: Vec<f64> = merges.iter().map(|merge| merge.height).collect();
        // {0,1} at 1, then median 0.5 vs 3 at 2.5, then median 1 vs 10 at 9.
        assert_eq!(heights, vec![1.0, 2.5, 9.0]);
    }
}
