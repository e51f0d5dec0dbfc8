//! Strategy builders for engine property tests.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::LinkageMethod;

use super::types::{PointLayout, PointsFixture};

/// Smallest generated input.
const MIN_POINTS: usize = 2;
/// Largest generated input; the oracle is cubic, so keep this small.
const MAX_POINTS: usize = 14;

/// Generates fixtures across every [`PointLayout`].
pub(super) fn points_fixture_strategy() -> impl Strategy<Value = PointsFixture> {
    (any::<PointLayout>(), any::<u64>()).prop_map(|(layout, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(layout, &mut rng)
    })
}

/// Generates fixtures whose layout avoids exact ties.
pub(super) fn tie_free_fixture_strategy() -> impl Strategy<Value = PointsFixture> {
    prop_oneof![Just(PointLayout::Uniform), Just(PointLayout::Clustered)].prop_flat_map(
        |layout| {
            any::<u64>().prop_map(move |seed| {
                let mut rng = SmallRng::seed_from_u64(seed);
                generate_fixture(layout, &mut rng)
            })
        },
    )
}

/// Any of the nine public linkage methods.
pub(super) fn method_strategy() -> impl Strategy<Value = LinkageMethod> {
    prop::sample::select(LinkageMethod::ALL.to_vec())
}

/// Generates a fixture for a specific layout.
pub(super) fn generate_fixture(layout: PointLayout, rng: &mut SmallRng) -> PointsFixture {
    let count = rng.gen_range(MIN_POINTS..=MAX_POINTS);
    let points: Vec<f64> = match layout {
        PointLayout::Uniform => (0..count).map(|_| rng.gen_range(0.0..100.0)).collect(),
        PointLayout::Clustered => {
            let centres: Vec<f64> = (0..rng.gen_range(1_u32..=4))
                .map(|group| 50.0 * f64::from(group) + rng.gen_range(-5.0..5.0))
                .collect();
            (0..count)
                .map(|_| centres[rng.gen_range(0..centres.len())] + rng.gen_range(-1.0..1.0))
                .collect()
        }
        PointLayout::Duplicates => {
            let values: Vec<f64> = (0..rng.gen_range(1_usize..=3))
                .map(|_| rng.gen_range(-10.0..10.0))
                .collect();
            (0..count)
                .map(|_| values[rng.gen_range(0..values.len())])
                .collect()
        }
        PointLayout::Integers => (0..count)
            .map(|_| f64::from(rng.gen_range(0_u8..12)))
            .collect(),
    };
    PointsFixture { points, layout }
}
