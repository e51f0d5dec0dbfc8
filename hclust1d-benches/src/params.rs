//! Benchmark parameter types.
//!
//! Criterion renders these through [`fmt::Display`] as benchmark ids.

use std::fmt;

use hclust1d_core::LinkageMethod;

/// Parameters for a linkage benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct LinkageBenchParams {
    /// Linkage method under test.
    pub method: LinkageMethod,
    /// Number of points in the dataset.
    pub point_count: usize,
}

impl fmt::Display for LinkageBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.method, self.point_count)
    }
}

/// Parameters for benchmarks that only vary the input size.
#[derive(Clone, Copy, Debug)]
pub struct SizeBenchParams {
    /// Number of points, heap entries or matrix rows.
    pub point_count: usize,
}

impl fmt::Display for SizeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.point_count)
    }
}
