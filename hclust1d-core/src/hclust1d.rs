//! Clustering entry points.
//!
//! [`Hclust1d`] validates caller input, runs the agglomeration engine and
//! assembles the [`Dendrogram`]. [`hclust1d`] is a shorthand for one-off runs
//! with a typed method.

use tracing::{debug, instrument, warn};

use crate::{
    Result,
    dendrogram::Dendrogram,
    distances::{DistanceScale, points_from_distances, sqrt_distances},
    engine,
    error::Hclust1dError,
    linkage::LinkageMethod,
};

/// Runs 1-D hierarchical clustering with a fixed linkage method.
///
/// # Examples
/// ```
/// use hclust1d_core::{Hclust1dBuilder, LinkageMethod};
///
/// let runner = Hclust1dBuilder::new()
///     .with_method(LinkageMethod::Complete)
///     .build()?;
/// let tree = runner.cluster(&[0.0, 1.0, 5.0])?;
/// assert_eq!(tree.merge_matrix(), vec![[-1, -2], [1, -3]]);
/// assert_eq!(tree.heights(), vec![1.0, 5.0]);
/// # Ok::<(), hclust1d_core::Hclust1dError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hclust1d {
    method: LinkageMethod,
}

impl Hclust1d {
    pub(crate) const fn new(method: LinkageMethod) -> Self {
        Self { method }
    }

    /// Returns the linkage method this runner applies.
    #[must_use]
    pub const fn method(&self) -> LinkageMethod {
        self.method
    }

    /// Clusters `points`, labelling each leaf with its coordinate.
    ///
    /// # Errors
    /// Returns [`Hclust1dError::InsufficientPoints`] for fewer than two
    /// points and [`Hclust1dError::NonFinitePoint`] when a coordinate is NaN
    /// or infinite.
    pub fn cluster(&self, points: &[f64]) -> Result<Dendrogram> {
        self.run(points, None)
    }

    /// Clusters `points`, attaching the caller's `labels` to the leaves.
    ///
    /// # Errors
    /// Returns [`Hclust1dError::LabelCountMismatch`] when `labels` and
    /// `points` differ in length, plus every error of [`Self::cluster`].
    ///
    /// # Examples
    /// ```
    /// use hclust1d_core::{Hclust1dBuilder, LinkageMethod};
    ///
    /// let runner = Hclust1dBuilder::new().with_method(LinkageMethod::Single).build()?;
    /// let labels = vec!["a".to_owned(), "b".to_owned()];
    /// let tree = runner.cluster_with_labels(&[2.0, 1.0], labels)?;
    /// assert_eq!(tree.labels(), &["a", "b"]);
    /// assert_eq!(tree.order(), &[1, 0]);
    /// # Ok::<(), hclust1d_core::Hclust1dError>(())
    /// ```
    pub fn cluster_with_labels(&self, points: &[f64], labels: Vec<String>) -> Result<Dendrogram> {
        self.run(points, Some(labels))
    }

    /// Clusters `n` points given as a condensed distance matrix.
    ///
    /// The distances are first turned into coordinates with
    /// [`points_from_distances`], taking square roots beforehand when `scale`
    /// is [`DistanceScale::Squared`]. Leaves are labelled `"1"` to `"n"`.
    ///
    /// # Errors
    /// Returns [`Hclust1dError::Distance`] when the matrix is malformed.
    ///
    /// # Examples
    /// ```
    /// use hclust1d_core::{DistanceScale, Hclust1dBuilder, LinkageMethod};
    ///
    /// let runner = Hclust1dBuilder::new().with_method(LinkageMethod::Single).build()?;
    /// // Squared distances between points 0, 2 and 3.
    /// let tree = runner.cluster_distances(&[4.0, 9.0, 1.0], 3, DistanceScale::Squared)?;
    /// assert_eq!(tree.heights(), vec![1.0, 2.0]);
    /// assert_eq!(tree.labels(), &["1", "2", "3"]);
    /// # Ok::<(), hclust1d_core::Hclust1dError>(())
    /// ```
    #[instrument(
        name = "hclust1d.cluster_distances",
        err,
        skip(self, condensed, n, scale),
        fields(points = n, method = %self.method, scale = ?scale),
    )]
    pub fn cluster_distances(
        &self,
        condensed: &[f64],
        n: usize,
        scale: DistanceScale,
    ) -> Result<Dendrogram> {
        let points = match scale {
            DistanceScale::Linear => points_from_distances(condensed, n),
            DistanceScale::Squared => {
                sqrt_distances(condensed).and_then(|linear| points_from_distances(&linear, n))
            }
        }
        .map_err(|err| {
            warn!(error = %err, "distance input rejected, returning error");
            Hclust1dError::from(err)
        })?;
        let labels = (1..=n).map(|index| index.to_string()).collect();
        self.run(&points, Some(labels))
    }

    #[instrument(
        name = "hclust1d.cluster",
        err,
        skip(self, points, labels),
        fields(points = points.len(), method = %self.method),
    )]
    fn run(&self, points: &[f64], labels: Option<Vec<String>>) -> Result<Dendrogram> {
        validate(points, labels.as_deref())?;
        let run = engine::run(points, self.method)?;
        debug!(stages = run.merges.len(), "agglomeration complete");
        let labels = labels.unwrap_or_else(|| points.iter().map(f64::to_string).collect());
        Ok(Dendrogram::new(run.merges, run.order, labels, self.method))
    }
}

fn validate(points: &[f64], labels: Option<&[String]>) -> Result<()> {
    if points.len() < 2 {
        warn!(
            points = points.len(),
            "clustering requires at least two points, returning error"
        );
        return Err(Hclust1dError::InsufficientPoints { got: points.len() });
    }
    if let Some(labels) = labels.filter(|labels| labels.len() != points.len()) {
        warn!(
            points = points.len(),
            labels = labels.len(),
            "label count does not match point count, returning error"
        );
        return Err(Hclust1dError::LabelCountMismatch {
            points: points.len(),
            labels: labels.len(),
        });
    }
    if let Some((index, &value)) = points
        .iter()
        .enumerate()
        .find(|(_, value)| !value.is_finite())
    {
        warn!(index, value, "non-finite point, returning error");
        return Err(Hclust1dError::NonFinitePoint { index, value });
    }
    Ok(())
}

/// Clusters `points` under `method` with default labels.
///
/// # Errors
/// See [`Hclust1d::cluster`].
///
/// # Examples
/// ```
/// use hclust1d_core::{LinkageMethod, hclust1d};
///
/// let tree = hclust1d(&[0.0, 10.0], LinkageMethod::WardD)?;
/// assert_eq!(tree.heights(), vec![100.0]);
/// # Ok::<(), hclust1d_core::Hclust1dError>(())
/// ```
pub fn hclust1d(points: &[f64], method: LinkageMethod) -> Result<Dendrogram> {
    Hclust1d::new(method).cluster(points)
}
