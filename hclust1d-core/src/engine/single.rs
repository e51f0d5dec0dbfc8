//! Single linkage without a priority queue.
//!
//! Merging never changes the gap between two surviving neighbours, so the
//! merge schedule is simply the gaps in ascending order. Sorting them once
//! replaces every heap operation; the interval chain still tracks which
//! sub-clusters each gap joins.

use crate::{LinkageMethod, Result, dendrogram::Merge, order::order};

use super::chain::{IntervalChain, SortedAxis};

/// Merges adjacent clusters in ascending gap order.
///
/// Equal gaps merge left to right.
pub(crate) fn merge_by_sorted_gaps(axis: &SortedAxis) -> Result<Vec<Merge>> {
    let (mut chain, gaps) = IntervalChain::build(axis, LinkageMethod::Single)?;
    let schedule = order(&gaps);
    let mut merges = Vec::with_capacity(schedule.len());
    for id in schedule {
        let interval = chain[id];
        merges.push(Merge::new(interval.left_ref, interval.right_ref, gaps[id]));
        chain.splice(id, merges.len());
    }
    Ok(merges)
}
