//! Benchmark support crate for hclust1d.
//!
//! Provides seeded synthetic point sets and parameter types used by the
//! Criterion benchmarks for the linkage engine, the sort-based single
//! linkage path, the indexed heap and distance-matrix reconstruction.

pub mod error;
pub mod params;
pub mod source;
