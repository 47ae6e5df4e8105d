use sch_core::{ErrorInfo, SchError, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::axis::{ContinuousAxis, DiscreteAxis};
use crate::composite::{BasisPreset, BoundaryPolicy, CompositeBasis};

/// Schema version written into basis snapshots.
pub const BASIS_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

#[derive(Debug, Serialize, Deserialize)]
struct SerializableBasis {
    schema_version: SchemaVersion,
    preset: BasisPreset,
    boundary: BoundaryPolicy,
    continuous: Vec<ContinuousAxis>,
    discrete: Vec<DiscreteAxis>,
}

/// Serializes a basis to a JSON string.
pub fn to_json(basis: &CompositeBasis) -> Result<String, SchError> {
    let payload = SerializableBasis {
        schema_version: BASIS_SCHEMA,
        preset: basis.preset(),
        boundary: basis.boundary(),
        continuous: basis.continuous().to_vec(),
        discrete: basis.discrete().to_vec(),
    };
    serde_json::to_string_pretty(&payload)
        .map_err(|err| SchError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Restores a basis from a JSON string, re-checking the preset's axis count.
pub fn from_json(data: &str) -> Result<CompositeBasis, SchError> {
    let payload: SerializableBasis = serde_json::from_str(data)
        .map_err(|err| SchError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))?;
    if !BASIS_SCHEMA.is_compatible_with(&payload.schema_version) {
        return Err(SchError::Serde(
            ErrorInfo::new("schema-version", "unsupported basis schema")
                .with_context("found", payload.schema_version.major.to_string())
                .with_context("expected", BASIS_SCHEMA.major.to_string()),
        ));
    }
    CompositeBasis::with_preset(payload.preset, payload.continuous, payload.discrete)
}
