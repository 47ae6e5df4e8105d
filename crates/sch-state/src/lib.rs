#![deny(missing_docs)]
#![doc = "Quantum states over separable bases: packaging solver output, composite aggregation, tabular display and persistence."]

/// Canonical content hashing for states.
pub mod hash;
/// Numeric dumps of a state's basis, wavefunction and probability.
pub mod persist;
/// JSON and binary snapshots.
pub mod serde;
/// The state entity and composite aggregation.
pub mod state;
/// Tabular display.
pub mod table;

pub use hash::canonical_state_hash;
pub use serde::{from_bytes, from_json, to_bytes, to_json};
pub use state::QuantumState;
pub use table::format_significant;
