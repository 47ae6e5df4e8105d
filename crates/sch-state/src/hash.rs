use sha2::{Digest, Sha256};

use crate::state::QuantumState;

fn update_floats(hasher: &mut Sha256, values: &[f64]) {
    hasher.update((values.len() as u64).to_le_bytes());
    for value in values {
        hasher.update(value.to_bits().to_le_bytes());
    }
}

/// Computes the canonical content hash of a state.
pub fn canonical_state_hash(state: &QuantumState) -> String {
    let mut hasher = Sha256::new();
    let basis = state.basis();
    hasher.update(basis.preset().to_string().as_bytes());
    hasher.update((basis.continuous().len() as u64).to_le_bytes());
    for axis in basis.continuous() {
        update_floats(&mut hasher, axis.coords());
    }
    hasher.update((basis.discrete().len() as u64).to_le_bytes());
    for axis in basis.discrete() {
        hasher.update((axis.len() as u64).to_le_bytes());
        for coord in axis.coords() {
            hasher.update(coord.to_le_bytes());
        }
    }

    let values = state.potential().values();
    hasher.update((values.len() as u64).to_le_bytes());
    for array in values {
        update_floats(&mut hasher, array);
    }
    hasher.update(state.potential().kind().to_string().as_bytes());

    update_floats(&mut hasher, state.wavefunction());
    update_floats(&mut hasher, state.probability());
    match state.energy() {
        Some(energy) => hasher.update(energy.to_bits().to_le_bytes()),
        None => hasher.update([0xffu8; 8]),
    }
    match state.nbox() {
        Some(nbox) => hasher.update((nbox as u64).to_le_bytes()),
        None => hasher.update([0xffu8; 8]),
    }

    let digest = hasher.finalize();
    digest
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<String>()
}
