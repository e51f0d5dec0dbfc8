//! Linkage criteria understood by the engine.
//!
//! Method names follow the conventions of R's `hclust`, so a dendrogram can be
//! labelled with the same string a downstream consumer would expect.

use std::{fmt, str::FromStr};

use crate::error::Hclust1dError;

/// Agglomerative linkage criterion.
///
/// Heights for [`Self::Centroid`], [`Self::Median`] and [`Self::WardD`] are
/// squared distances; every other method reports heights in the units of the
/// input points.
///
/// # Examples
/// ```
/// use hclust1d_core::LinkageMethod;
///
/// let method: LinkageMethod = "ward.D2".parse().expect("known method");
/// assert_eq!(method, LinkageMethod::WardD2);
/// assert_eq!(method.to_string(), "ward.D2");
/// assert!("ward".parse::<LinkageMethod>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LinkageMethod {
    /// Nearest-neighbour linkage: the gap between the closest members.
    Single,
    /// Farthest-neighbour linkage: the span between the outermost members.
    Complete,
    /// UPGMA: the mean distance over all cross-cluster pairs.
    Average,
    /// UPGMC: the squared distance between cluster means.
    Centroid,
    /// The distance between cluster medians.
    TrueMedian,
    /// WPGMC: the squared distance between weighted centroids, where a merged
    /// cluster's centroid is the midpoint of its children's centroids.
    Median,
    /// WPGMA: the distance to a merged cluster is the plain mean of the
    /// distances to its two children.
    McQuitty,
    /// Ward's criterion on squared distances (the increase in within-cluster
    /// sum of squares, doubled).
    WardD,
    /// Ward's criterion reported in linear units (square root of
    /// [`Self::WardD`]).
    WardD2,
    /// Single linkage driven through the general heap engine.
    ///
    /// Only kept to compare the heap engine with the dedicated single-linkage
    /// path; it may disappear without notice.
    #[doc(hidden)]
    SingleViaHeap,
}

impl LinkageMethod {
    /// The nine supported linkage criteria, in conventional order.
    pub const ALL: [Self; 9] = [
        Self::Single,
        Self::Complete,
        Self::Average,
        Self::Centroid,
        Self::TrueMedian,
        Self::Median,
        Self::McQuitty,
        Self::WardD,
        Self::WardD2,
    ];

    /// Returns the conventional method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Complete => "complete",
            Self::Average => "average",
            Self::Centroid => "centroid",
            Self::TrueMedian => "true_median",
            Self::Median => "median",
            Self::McQuitty => "mcquitty",
            Self::WardD => "ward.D",
            Self::WardD2 => "ward.D2",
            Self::SingleViaHeap => "single_implemented_by_heap",
        }
    }

    /// Comma-separated list of the supported method names.
    #[must_use]
    pub const fn supported_names() -> &'static str {
        "single, complete, average, centroid, true_median, median, mcquitty, ward.D, ward.D2"
    }

    /// Returns `true` when merge heights never decrease from one stage to the
    /// next under this criterion.
    ///
    /// Centroid-style criteria can produce inversions, which downstream
    /// consumers must tolerate rather than assume away.
    #[must_use]
    pub const fn has_monotone_heights(self) -> bool {
        !matches!(self, Self::Centroid | Self::TrueMedian | Self::Median)
    }

    /// Returns `true` when heights are squared distances.
    #[must_use]
    pub const fn uses_squared_distances(self) -> bool {
        matches!(self, Self::Centroid | Self::Median | Self::WardD)
    }
}

impl fmt::Display for LinkageMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkageMethod {
    type Err = Hclust1dError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .chain(std::iter::once(Self::SingleViaHeap))
            .find(|method| method.as_str() == name)
            .ok_or_else(|| Hclust1dError::UnknownMethod {
                name: name.to_owned(),
            })
    }
}
