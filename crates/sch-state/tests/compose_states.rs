use proptest::prelude::*;
use sch_basis::{BasisPreset, CompositeBasis, ContinuousAxis, DiscreteAxis};
use sch_core::SchError;
use sch_potential::{PotentialField, PotentialShape};
use sch_state::QuantumState;

fn raw_state(coords: &[f64], wavefunction: &[f64], probability: &[f64], energy: f64) -> QuantumState {
    let basis = CompositeBasis::from_continuous(coords.to_vec()).expect("basis");
    let potential = vec![coords.iter().map(|x| x * x).collect()];
    QuantumState::new(
        wavefunction.to_vec(),
        probability.to_vec(),
        potential,
        energy,
        basis,
        coords.len(),
    )
    .expect("state")
}

#[test]
fn composite_wavefunction_is_tensor_sum() {
    let a = raw_state(&[0.0, 1.0], &[1.0, 2.0], &[0.2, 0.8], 0.5);
    let b = raw_state(&[-1.0, 1.0], &[10.0, 20.0], &[0.5, 0.5], 1.5);
    let composite = QuantumState::compose(&[a.clone(), b]).expect("compose");

    assert_eq!(composite.wavefunction(), &[11.0, 21.0, 12.0, 22.0]);
    assert_eq!(composite.probability(), a.probability());
    assert_eq!(composite.energy(), None);
    assert_eq!(composite.nbox(), None);
}

#[test]
fn composite_accumulates_bases_and_potentials_in_order() {
    let a = raw_state(&[0.0, 1.0], &[1.0, 2.0], &[0.5, 0.5], 0.5);
    let b = raw_state(&[2.0, 3.0, 4.0], &[1.0, 1.0, 1.0], &[0.1, 0.1, 0.8], 1.0);
    let composite = QuantumState::compose(&[a.clone(), b.clone()]).expect("compose");

    assert_eq!(composite.basis().dimensions(), 2);
    assert_eq!(composite.basis().continuous()[0], a.basis().continuous()[0]);
    assert_eq!(composite.basis().continuous()[1], b.basis().continuous()[0]);
    assert_eq!(
        composite.potential().values(),
        &[vec![0.0, 1.0], vec![4.0, 9.0, 16.0]]
    );
    assert_eq!(composite.potential().basis(), composite.basis());
    assert_eq!(composite.wavefunction().len(), composite.expected_samples().unwrap());
}

#[test]
fn single_constituent_is_preserved() {
    let a = raw_state(&[0.0, 1.0, 2.0], &[0.1, 0.2, 0.3], &[0.01, 0.04, 0.09], 2.0);
    let composite = QuantumState::compose(std::slice::from_ref(&a)).expect("compose");
    assert_eq!(composite.wavefunction(), a.wavefunction());
    assert_eq!(composite.basis().continuous(), a.basis().continuous());
}

#[test]
fn empty_input_is_invalid_state() {
    let err = QuantumState::compose(&[]).unwrap_err();
    assert!(matches!(err, SchError::State(_)));
    assert_eq!(err.info().code, "state_compose_empty");
}

#[test]
fn composite_energy_is_supplied_separately() {
    let a = raw_state(&[0.0], &[1.0], &[1.0], 0.5);
    let b = raw_state(&[0.0], &[2.0], &[1.0], 1.5);
    let composite = QuantumState::compose(&[a, b]).unwrap().with_energy(2.0);
    assert_eq!(composite.energy(), Some(2.0));
}

#[test]
fn raw_constructor_validates_layout() {
    let basis = CompositeBasis::from_continuous(vec![0.0, 1.0]).unwrap();
    let err = QuantumState::new(vec![1.0, 2.0], vec![1.0], vec![vec![0.0, 0.0]], 0.0, basis.clone(), 2)
        .unwrap_err();
    assert_eq!(err.info().code, "state_layout");
    let err = QuantumState::new(vec![1.0, 2.0], vec![0.5, 0.5], vec![vec![0.0]], 0.0, basis, 2)
        .unwrap_err();
    assert_eq!(err.info().code, "potential_layout");
}

#[test]
fn discrete_constituents_keep_potential_aligned() {
    let spin = CompositeBasis::with_preset(
        BasisPreset::Custom,
        Vec::new(),
        vec![DiscreteAxis::range(0, 1).unwrap()],
    )
    .unwrap();
    let spin_potential = PotentialField::evaluate(spin, PotentialShape::Box).unwrap();
    let spin_state =
        QuantumState::with_potential(vec![0.6, 0.8], vec![0.36, 0.64], spin_potential, 0.0, 2)
            .unwrap();

    let line = CompositeBasis::with_preset(
        BasisPreset::Cartesian,
        vec![ContinuousAxis::linspace(-1.0, 1.0, 3).unwrap()],
        Vec::new(),
    )
    .unwrap();
    let well = PotentialField::evaluate(line, PotentialShape::FiniteWell { width: 1.0, height: 4.0 })
        .unwrap();
    let well_state =
        QuantumState::with_potential(vec![0.0, 1.0, 0.0], vec![0.0, 1.0, 0.0], well, 1.0, 3).unwrap();

    let reordered = [spin_state.clone(), well_state.clone()];
    assert!(!QuantumState::axis_order_aligned(&reordered));
    assert!(QuantumState::axis_order_aligned(&[well_state.clone(), spin_state.clone()]));

    let composite = QuantumState::compose(&reordered).unwrap();
    assert_eq!(composite.basis().axis_lengths(), vec![3, 2]);
    assert_eq!(
        composite.potential().values(),
        &[vec![4.0, 0.0, 4.0], vec![0.0, 0.0]]
    );
    assert_eq!(composite.wavefunction().len(), 6);
}

#[test]
fn continuous_only_constituents_are_aligned() {
    let a = raw_state(&[0.0, 1.0], &[1.0, 2.0], &[0.5, 0.5], 0.5);
    let b = raw_state(&[2.0], &[3.0], &[1.0], 1.0);
    assert!(QuantumState::axis_order_aligned(&[a, b]));
    assert!(QuantumState::axis_order_aligned(&[]));
}

proptest! {
    #[test]
    fn composite_length_is_product(lens in proptest::collection::vec(1usize..5, 1..4)) {
        let states: Vec<QuantumState> = lens
            .iter()
            .enumerate()
            .map(|(i, &n)| {
                let coords: Vec<f64> = (0..n).map(|j| j as f64).collect();
                let wf: Vec<f64> = (0..n).map(|j| (i * 10 + j) as f64).collect();
                raw_state(&coords, &wf, &wf, 0.0)
            })
            .collect();
        let composite = QuantumState::compose(&states).unwrap();
        let expected: usize = lens.iter().product();
        prop_assert_eq!(composite.wavefunction().len(), expected);
        prop_assert_eq!(composite.basis().dimensions(), lens.len());
        prop_assert_eq!(composite.probability(), states[0].probability());
        let first: f64 = states.iter().map(|s| s.wavefunction()[0]).sum();
        prop_assert_eq!(composite.wavefunction()[0], first);
    }
}
