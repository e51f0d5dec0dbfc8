//! Agglomeration loop over the sorted axis.
//!
//! Every linkage except [`LinkageMethod::Single`] runs through
//! [`HeapEngine`]: the closest adjacent pair is popped from an
//! [`IndexedMinHeap`], recorded, and spliced out of the interval chain, and
//! the two neighbouring intervals are re-priced against the merged cluster.
//! Each stage costs O(log n), giving O(n log n) overall after the initial
//! sort.

mod chain;
mod cluster;
mod single;

#[cfg(test)]
mod property;

use crate::{IndexedMinHeap, LinkageMethod, Result, dendrogram::Merge};

use self::{
    chain::{IntervalChain, SortedAxis},
    cluster::ClusterSummary,
};

/// Raw output of one agglomeration.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct LinkageRun {
    /// One merge per stage, in stage order.
    pub(crate) merges: Vec<Merge>,
    /// Original indices in ascending coordinate order.
    pub(crate) order: Vec<usize>,
}

/// Clusters `points` under `method`.
///
/// # Errors
/// Returns [`crate::Hclust1dError::InsufficientPoints`] when fewer than two
/// points are supplied. Finiteness is the caller's responsibility.
pub(crate) fn run(points: &[f64], method: LinkageMethod) -> Result<LinkageRun> {
    let axis = SortedAxis::new(points);
    let merges = match method {
        LinkageMethod::Single => single::merge_by_sorted_gaps(&axis)?,
        _ => HeapEngine::new(&axis, method)?.run(),
    };
    Ok(LinkageRun {
        merges,
        order: axis.into_order(),
    })
}

/// Heap-driven agglomeration state.
struct HeapEngine<'a> {
    axis: &'a SortedAxis,
    method: LinkageMethod,
    chain: IntervalChain,
    heap: IndexedMinHeap,
    merges: Vec<Merge>,
}

impl<'a> HeapEngine<'a> {
    fn new(axis: &'a SortedAxis, method: LinkageMethod) -> Result<Self> {
        let (chain, keys) = IntervalChain::build(axis, method)?;
        let stages = keys.len();
        Ok(Self {
            axis,
            method,
            chain,
            heap: IndexedMinHeap::from_keys(keys),
            merges: Vec::with_capacity(stages),
        })
    }

    fn run(mut self) -> Vec<Merge> {
        while self.step().is_some() {}
        self.merges
    }

    /// Performs one merge stage; returns `None` once the chain is exhausted.
    fn step(&mut self) -> Option<Merge> {
        let (height, id) = self.heap.extract_min()?;
        let interval = self.chain[id];
        let merge = Merge::new(interval.left_ref, interval.right_ref, height);
        self.merges.push(merge);

        let (left_id, right_id) = self.chain.splice(id, self.merges.len());
        let merged = ClusterSummary::merge(self.method, &interval.left, &interval.right, self.axis);
        if let Some(left_id) = left_id {
            let neighbour = &mut self.chain[left_id];
            neighbour.right = merged;
            let key = ClusterSummary::distance(self.method, &neighbour.left, &merged, self.axis);
            self.reprice(left_id, key);
        }
        if let Some(right_id) = right_id {
            let neighbour = &mut self.chain[right_id];
            neighbour.left = merged;
            let key = ClusterSummary::distance(self.method, &merged, &neighbour.right, self.axis);
            self.reprice(right_id, key);
        }
        Some(merge)
    }

    fn reprice(&mut self, id: usize, key: f64) {
        if self.method == LinkageMethod::SingleViaHeap {
            // Gaps between survivors never change under single linkage.
            return;
        }
        let previous = self.heap.update_key(id, key);
        debug_assert!(previous.is_some(), "neighbour {id} must still be queued");
    }
}
