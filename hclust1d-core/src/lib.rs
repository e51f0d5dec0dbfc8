//! One-dimensional agglomerative hierarchical clustering in O(n log n).
//!
//! In one dimension every cluster is a contiguous run of the sorted points,
//! so only adjacent clusters ever need to be compared. The engine keeps the
//! gaps between neighbouring clusters in an [`IndexedMinHeap`] and re-prices
//! just the two neighbours of each merge, supporting single, complete,
//! average, centroid, true median, median (WPGMC), McQuitty, Ward.D and
//! Ward.D2 linkage.
//!
//! # Examples
//! ```
//! use hclust1d_core::{Hclust1dBuilder, LinkageMethod};
//!
//! let runner = Hclust1dBuilder::new()
//!     .with_method(LinkageMethod::Average)
//!     .build()?;
//! let tree = runner.cluster(&[1.0, 2.0, 4.0, 7.0])?;
//! assert_eq!(tree.merges().len(), 3);
//! assert_eq!(tree.merge_matrix()[0], [-1, -2]);
//! # Ok::<(), hclust1d_core::Hclust1dError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod dendrogram;
mod distances;
mod engine;
mod error;
mod hclust1d;
mod heap;
mod linkage;
mod order;


pub use crate::{
    builder::Hclust1dBuilder,
    dendrogram::{Dendrogram, Merge, MergeRef},
    distances::{
        DEGENERATE_SPREAD, DistanceScale, condensed_len, points_from_distances, sqrt_distances,
    },
    error::{DistanceError, DistanceErrorCode, Hclust1dError, Hclust1dErrorCode, Result},
    hclust1d::{Hclust1d, hclust1d},
    heap::IndexedMinHeap,
    linkage::LinkageMethod,
    order::order,
};
