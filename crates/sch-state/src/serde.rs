use sch_basis::{BasisPreset, CompositeBasis, ContinuousAxis, DiscreteAxis};
use sch_core::{ErrorInfo, SchError, SchemaVersion};
use sch_potential::{PotentialField, PotentialShape};
use serde::{Deserialize, Serialize};

use crate::hash::canonical_state_hash;
use crate::state::QuantumState;

/// Schema version written into state snapshots.
pub const STATE_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

#[derive(Debug, Serialize, Deserialize)]
struct SerializableState {
    schema_version: SchemaVersion,
    state_hash: String,
    preset: BasisPreset,
    continuous: Vec<ContinuousAxis>,
    discrete: Vec<DiscreteAxis>,
    potential_shape: Option<PotentialShape>,
    potential: Vec<Vec<f64>>,
    wavefunction: Vec<f64>,
    probability: Vec<f64>,
    energy: Option<f64>,
    nbox: Option<usize>,
}

fn serde_error(code: &str, err: impl ToString) -> SchError {
    SchError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serializes a state to a JSON string.
pub fn to_json(state: &QuantumState) -> Result<String, SchError> {
    let basis = state.basis();
    let payload = SerializableState {
        schema_version: STATE_SCHEMA,
        state_hash: canonical_state_hash(state),
        preset: basis.preset(),
        continuous: basis.continuous().to_vec(),
        discrete: basis.discrete().to_vec(),
        potential_shape: state.potential().shape(),
        potential: state.potential().values().to_vec(),
        wavefunction: state.wavefunction().to_vec(),
        probability: state.probability().to_vec(),
        energy: state.energy(),
        nbox: state.nbox(),
    };
    serde_json::to_string_pretty(&payload).map_err(|err| serde_error("json-serialize", err))
}

/// Restores a state from a JSON string and verifies its content hash.
pub fn from_json(data: &str) -> Result<QuantumState, SchError> {
    let payload: SerializableState =
        serde_json::from_str(data).map_err(|err| serde_error("json-deserialize", err))?;
    if !STATE_SCHEMA.is_compatible_with(&payload.schema_version) {
        return Err(SchError::Serde(
            ErrorInfo::new("schema-version", "unsupported state schema")
                .with_context("found", payload.schema_version.major.to_string())
                .with_context("expected", STATE_SCHEMA.major.to_string()),
        ));
    }
    let basis = CompositeBasis::with_preset(payload.preset, payload.continuous, payload.discrete)?;
    let potential = restore_potential(basis.clone(), payload.potential_shape, payload.potential)?;
    let state = QuantumState::from_parts(
        basis,
        potential,
        payload.wavefunction,
        payload.probability,
        payload.energy,
        payload.nbox,
    );
    let actual = canonical_state_hash(&state);
    if actual != payload.state_hash {
        return Err(SchError::Serde(
            ErrorInfo::new("state-hash-mismatch", "snapshot content does not match its hash")
                .with_context("expected", payload.state_hash)
                .with_context("actual", actual),
        ));
    }
    Ok(state)
}

fn restore_potential(
    basis: CompositeBasis,
    shape: Option<PotentialShape>,
    values: Vec<Vec<f64>>,
) -> Result<PotentialField, SchError> {
    match shape {
        Some(shape) if shape != PotentialShape::Custom => {
            let field = PotentialField::evaluate(basis, shape)?;
            if field.values() != values.as_slice() {
                return Err(SchError::Serde(
                    ErrorInfo::new(
                        "potential-mismatch",
                        "stored potential values differ from their shape",
                    )
                    .with_context("shape", shape.kind().to_string()),
                ));
            }
            Ok(field)
        }
        None if values.is_empty() && basis.is_empty() => Ok(PotentialField::default()),
        _ => PotentialField::from_values(basis, values),
    }
}

/// Serializes a state into a binary blob.
pub fn to_bytes(state: &QuantumState) -> Result<Vec<u8>, SchError> {
    let json = to_json(state)?;
    bincode::serialize(&json).map_err(|err| serde_error("bincode-serialize", err))
}

/// Rehydrates a state from a binary blob.
pub fn from_bytes(bytes: &[u8]) -> Result<QuantumState, SchError> {
    let json: String =
        bincode::deserialize(bytes).map_err(|err| serde_error("bincode-deserialize", err))?;
    from_json(&json)
}
