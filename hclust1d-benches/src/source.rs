//! Synthetic point sets for benchmarking.
//!
//! Points are drawn from a seeded [`SmallRng`] so every benchmark run sees
//! the same inputs. Three layouts stress different parts of the engine:
//! uniform noise, tight groups separated by wide gaps, and heavily tied
//! integer values.

use std::iter;

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

/// Width of the interval uniform points and cluster centres are drawn from.
pub const SPAN: f64 = 1_000.0;

/// Half-width of the jitter applied around each cluster centre.
const CLUSTER_JITTER: f64 = 1.0;

/// Errors that may occur during synthetic point generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested point count was zero.
    #[error("point count must be greater than zero")]
    ZeroPoints,
    /// A clustered or tied layout asked for zero groups.
    #[error("layout must use at least one group")]
    ZeroGroups,
}

/// Shape of a synthetic point set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointLayout {
    /// Independent draws from `[0, SPAN)`.
    Uniform,
    /// Points jittered around `clusters` random centres.
    Clustered {
        /// Number of centres.
        clusters: usize,
    },
    /// Points drawn from `distinct` consecutive integers.
    Duplicates {
        /// Number of distinct values.
        distinct: usize,
    },
}

/// Configuration for synthetic point generation.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Layout of the generated points.
    pub layout: PointLayout,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates points for `config`, in draw order.
///
/// # Errors
///
/// Returns [`SyntheticError::ZeroPoints`] if `point_count` is zero and
/// [`SyntheticError::ZeroGroups`] if a clustered or tied layout requests
/// zero groups.
///
/// # Examples
///
/// ```
/// use hclust1d_benches::source::{PointLayout, SyntheticConfig, generate_points};
///
/// let config = SyntheticConfig {
///     point_count: 10,
///     layout: PointLayout::Duplicates { distinct: 3 },
///     seed: 7,
/// };
/// let points = generate_points(&config).expect("valid config");
/// assert_eq!(points.len(), 10);
/// assert!(points.iter().all(|p| *p == 0.0 || *p == 1.0 || *p == 2.0));
/// ```
pub fn generate_points(config: &SyntheticConfig) -> Result<Vec<f64>, SyntheticError> {
    if config.point_count == 0 {
        return Err(SyntheticError::ZeroPoints);
    }
    let mut rng = SmallRng::seed_from_u64(config.seed);
    match config.layout {
        PointLayout::Uniform => Ok((0..config.point_count)
            .map(|_| rng.gen_range(0.0..SPAN))
            .collect()),
        PointLayout::Clustered { clusters } => {
            if clusters == 0 {
                return Err(SyntheticError::ZeroGroups);
            }
            let centres: Vec<f64> = (0..clusters).map(|_| rng.gen_range(0.0..SPAN)).collect();
            let mut points = Vec::with_capacity(config.point_count);
            while points.len() < config.point_count {
                let Some(&centre) = centres.choose(&mut rng) else {
                    return Err(SyntheticError::ZeroGroups);
                };
                points.push(centre + rng.gen_range(-CLUSTER_JITTER..CLUSTER_JITTER));
            }
            Ok(points)
        }
        PointLayout::Duplicates { distinct } => {
            if distinct == 0 {
                return Err(SyntheticError::ZeroGroups);
            }
            let values: Vec<f64> = iter::successors(Some(0.0), |value| Some(value + 1.0))
                .take(distinct)
                .collect();
            let mut points = Vec::with_capacity(config.point_count);
            while points.len() < config.point_count {
                let Some(&value) = values.choose(&mut rng) else {
                    return Err(SyntheticError::ZeroGroups);
                };
                points.push(value);
            }
            Ok(points)
        }
    }
}

/// Builds the condensed (upper-triangle, row-major) distance matrix of
/// `points`.
#[must_use]
pub fn condensed_distances(points: &[f64]) -> Vec<f64> {
    points
        .iter()
        .enumerate()
        .flat_map(|(i, &a)| points.iter().skip(i + 1).map(move |&b| (a - b).abs()))
        .collect()
}
