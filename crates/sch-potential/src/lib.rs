#![deny(missing_docs)]
#![doc = "Potential fields over separable bases: shape evaluation, combination and the potential dump."]

/// Per-axis potential fields and their algebra.
pub mod field;
/// Potential shapes and their single-sample evaluation.
pub mod shape;

pub use field::PotentialField;
pub use shape::{PotentialKind, PotentialShape};
