//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark inputs
//! so that setup functions can propagate failures with `?` instead of
//! using `.expect()`.

use crate::source::SyntheticError;
use hclust1d_core::{DistanceError, Hclust1dError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic data generation failed.
    #[error("synthetic source generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Building a runner or a warm-up clustering failed.
    #[error("clustering failed: {0}")]
    Clustering(#[from] Hclust1dError),
    /// Converting a condensed distance matrix failed.
    #[error("distance matrix rejected: {0}")]
    Distance(#[from] DistanceError),
}
