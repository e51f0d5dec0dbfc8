//! Shared fixtures for the integration tests.
#![expect(dead_code, reason = "each test binary uses a different subset")]

use std::collections::BTreeMap;

use serde::Deserialize;

const REFERENCE_JSON: &str = include_str!("../fixtures/reference.json");

/// Expected clustering for one method.
#[derive(Debug, Deserialize)]
pub struct ExpectedTree {
    pub merge: Vec<[i64; 2]>,
    pub height: Vec<f64>,
}

/// One input with the expected tree under every method.
#[derive(Debug, Deserialize)]
pub struct ReferenceCase {
    pub name: String,
    pub points: Vec<f64>,
    /// Leaf order, 1-based.
    pub order: Vec<usize>,
    pub expected: BTreeMap<String, ExpectedTree>,
}

#[derive(Debug, Deserialize)]
struct ReferenceSet {
    cases: Vec<ReferenceCase>,
}

#[must_use]
pub fn reference_cases() -> Vec<ReferenceCase> {
    serde_json::from_str::<ReferenceSet>(REFERENCE_JSON)
        .expect("reference fixtures must parse")
        .cases
}

/// Compares heights with a relative tolerance.
pub fn assert_heights_close(actual: &[f64], expected: &[f64], context: &str) {
    assert_eq!(actual.len(), expected.len(), "{context}: height count");
    for (stage, (a, e)) in actual.iter().zip(expected).enumerate() {
        let scale = a.abs().max(e.abs()).max(1.0);
        assert!(
            (a - e).abs() <= 1e-12 * scale,
            "{context}: stage {} height {a} != {e}",
            stage + 1
        );
    }
}

/// Builds the condensed distance vector of `points`.
#[must_use]
pub fn condensed(points: &[f64], squared: bool) -> Vec<f64> {
    let n = points.len();
    (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .map(|(i, j)| {
            let gap = (points[i] - points[j]).abs();
            if squared { gap * gap } else { gap }
        })
        .collect()
}
