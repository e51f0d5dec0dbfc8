//! Fixture types for engine property tests.

use test_strategy::Arbitrary;

/// Shape of the generated point cloud.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum PointLayout {
    /// Independent draws from a continuous range; ties are negligible.
    #[weight(3)]
    Uniform,
    /// Tight groups around a handful of well-separated centres.
    #[weight(2)]
    Clustered,
    /// Few distinct values, so many points coincide.
    Duplicates,
    /// Small integers: repeated values and repeated gaps.
    Integers,
}

impl PointLayout {
    /// Returns `true` when the layout makes exact distance ties unlikely, so
    /// the merge sequence is fully determined by the linkage.
    pub(super) fn is_tie_free(self) -> bool {
        matches!(self, Self::Uniform | Self::Clustered)
    }
}

/// Generated input for one property case.
#[derive(Clone, Debug)]
pub(super) struct PointsFixture {
    /// Coordinates in input order.
    pub points: Vec<f64>,
    /// Layout used during generation.
    pub layout: PointLayout,
}
