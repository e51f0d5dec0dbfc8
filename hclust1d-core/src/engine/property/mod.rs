//! Property-based tests for the agglomeration engine.
//!
//! Compares every linkage against a brute-force all-pairs oracle and checks
//! the structural invariants of the merge history on inputs with heavy ties.

mod oracle;
mod strategies;
mod structural;
mod types;
