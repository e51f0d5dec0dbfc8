//! Property 2: structural invariants of the merge history.
//!
//! These hold for every input, including ones riddled with ties where the
//! merge sequence is not unique:
//!
//! - exactly `n - 1` merges;
//! - every point and every non-final stage is referenced exactly once, and
//!   stages only reference earlier stages;
//! - every merged cluster occupies a contiguous run of the leaf order, with
//!   the left side before the right side;
//! - the leaf order sorts the input;
//! - heights are finite and non-negative, and never decrease for monotone
//!   criteria.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Dendrogram, LinkageMethod, MergeRef, hclust1d};

use super::equivalence::heights_agree;
use super::types::PointsFixture;

/// Runs the structural invariant property for `method` on `fixture`.
pub(super) fn run_structural_invariants_property(
    fixture: &PointsFixture,
    method: LinkageMethod,
) -> TestCaseResult {
    let tree = hclust1d(&fixture.points, method).map_err(|err| {
        TestCaseError::fail(format!("clustering failed: {err} (layout={:?})", fixture.layout))
    })?;
    let n = fixture.points.len();

    if tree.merges().len() + 1 != n || tree.leaf_count() != n {
        return Err(TestCaseError::fail(format!(
            "{method}: {} merges for {n} points",
            tree.merges().len()
        )));
    }
    validate_references(&tree)?;
    validate_order(&tree, &fixture.points)?;
    validate_contiguity(&tree)?;
    validate_heights(&tree, method)?;
    Ok(())
}

fn validate_references(tree: &Dendrogram) -> TestCaseResult {
    let n = tree.leaf_count();
    let mut point_uses = vec![0_usize; n];
    let mut stage_uses = vec![0_usize; n];
    for (offset, merge) in tree.merges().iter().enumerate() {
        let stage = offset + 1;
        for side in [merge.left(), merge.right()] {
            match side {
                MergeRef::Point(index) if index < n => point_uses[index] += 1,
                MergeRef::Stage(earlier) if (1..stage).contains(&earlier) => {
                    stage_uses[earlier] += 1;
                }
                other => {
                    return Err(TestCaseError::fail(format!(
                        "stage {stage} references {other:?}, which does not exist yet"
                    )));
                }
            }
        }
    }
    if let Some(index) = point_uses.iter().position(|&uses| uses != 1) {
        return Err(TestCaseError::fail(format!(
            "point {index} referenced {} times",
            point_uses[index]
        )));
    }
    let last = n - 1;
    if let Some(stage) = (1..last).find(|&stage| stage_uses[stage] != 1) {
        return Err(TestCaseError::fail(format!(
            "stage {stage} referenced {} times",
            stage_uses[stage]
        )));
    }
    if stage_uses[last] != 0 {
        return Err(TestCaseError::fail("final stage must not be referenced"));
    }
    Ok(())
}

fn validate_order(tree: &Dendrogram, points: &[f64]) -> TestCaseResult {
    let mut seen = vec![false; points.len()];
    for &index in tree.order() {
        if index >= points.len() || std::mem::replace(&mut seen[index], true) {
            return Err(TestCaseError::fail(format!(
                "order {:?} is not a permutation",
                tree.order()
            )));
        }
    }
    if tree
        .order()
        .windows(2)
        .any(|pair| points[pair[0]] > points[pair[1]])
    {
        return Err(TestCaseError::fail(format!(
            "order {:?} does not sort {points:?}",
            tree.order()
        )));
    }
    Ok(())
}

fn validate_contiguity(tree: &Dendrogram) -> TestCaseResult {
    let mut rank_of = vec![0_usize; tree.leaf_count()];
    for (rank, &index) in tree.order().iter().enumerate() {
        rank_of[index] = rank;
    }
    let span = |side: MergeRef| -> Vec<usize> {
        let members = match side {
            MergeRef::Point(index) => vec![index],
            MergeRef::Stage(stage) => tree.members(stage).unwrap_or_default(),
        };
        let mut ranks: Vec<usize> = members.into_iter().map(|index| rank_of[index]).collect();
        ranks.sort_unstable();
        ranks
    };

    for (offset, merge) in tree.merges().iter().enumerate() {
        let left = span(merge.left());
        let right = span(merge.right());
        let joined: Vec<usize> = left.iter().chain(&right).copied().collect();
        let contiguous = joined.windows(2).all(|pair| pair[0] + 1 == pair[1]);
        if !contiguous {
            return Err(TestCaseError::fail(format!(
                "stage {} joins ranks {left:?} and {right:?}, which are not adjacent runs",
                offset + 1
            )));
        }
    }
    Ok(())
}

fn validate_heights(tree: &Dendrogram, method: LinkageMethod) -> TestCaseResult {
    let heights = tree.heights();
    if let Some(height) = heights.iter().find(|h| !h.is_finite() || **h < 0.0) {
        return Err(TestCaseError::fail(format!(
            "{method}: invalid height {height}"
        )));
    }
    // Incremental updates may round a tied height a few ulps low.
    let decreasing = heights
        .windows(2)
        .any(|pair| pair[1] < pair[0] && !heights_agree(pair[0], pair[1]));
    if method.has_monotone_heights() && decreasing {
        return Err(TestCaseError::fail(format!(
            "{method}: heights {heights:?} decrease"
        )));
    }
    Ok(())
}
