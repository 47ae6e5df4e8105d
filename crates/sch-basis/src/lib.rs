#![deny(missing_docs)]
#![doc = "Separable coordinate bases: continuous and discrete axes combined into composite domains."]

/// Continuous and discrete sample axes.
pub mod axis;
/// Composite bases, presets and basis algebra.
pub mod composite;
/// JSON snapshots of composite bases.
pub mod serde;

pub use axis::{AxisBasis, ContinuousAxis, DiscreteAxis};
pub use composite::{BasisPreset, BoundaryPolicy, CompositeBasis, CoordinateRows};
pub use serde::{from_json, to_json};
