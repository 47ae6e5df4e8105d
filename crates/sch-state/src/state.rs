use log::{debug, warn};
use sch_basis::CompositeBasis;
use sch_core::{cartesian_sums, ErrorInfo, SchError};
use sch_potential::PotentialField;

/// Wavefunction and probability samples bundled with the basis and
/// potential they were computed on.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantumState {
    basis: CompositeBasis,
    potential: PotentialField,
    wavefunction: Vec<f64>,
    probability: Vec<f64>,
    energy: Option<f64>,
    nbox: Option<usize>,
}

impl QuantumState {
    /// Packages externally computed solver output.
    ///
    /// `potential` holds one value array per axis of `basis`; `wavefunction`
    /// and `probability` must have the same length.
    pub fn new(
        wavefunction: Vec<f64>,
        probability: Vec<f64>,
        potential: Vec<Vec<f64>>,
        energy: f64,
        basis: CompositeBasis,
        nbox: usize,
    ) -> Result<Self, SchError> {
        let potential = PotentialField::from_values(basis, potential)?;
        Self::with_potential(wavefunction, probability, potential, energy, nbox)
    }

    /// Like [`QuantumState::new`] with an already built potential; the basis
    /// is taken from the potential.
    pub fn with_potential(
        wavefunction: Vec<f64>,
        probability: Vec<f64>,
        potential: PotentialField,
        energy: f64,
        nbox: usize,
    ) -> Result<Self, SchError> {
        if wavefunction.len() != probability.len() {
            return Err(SchError::Config(
                ErrorInfo::new(
                    "state_layout",
                    "wavefunction and probability must have the same length",
                )
                .with_context("wavefunction", wavefunction.len().to_string())
                .with_context("probability", probability.len().to_string()),
            ));
        }
        Ok(Self {
            basis: potential.basis().clone(),
            potential,
            wavefunction,
            probability,
            energy: Some(energy),
            nbox: Some(nbox),
        })
    }

    pub(crate) fn from_parts(
        basis: CompositeBasis,
        potential: PotentialField,
        wavefunction: Vec<f64>,
        probability: Vec<f64>,
        energy: Option<f64>,
        nbox: Option<usize>,
    ) -> Self {
        Self {
            basis,
            potential,
            wavefunction,
            probability,
            energy,
            nbox,
        }
    }

    /// Aggregates constituent states into one composite state.
    ///
    /// Bases and potentials are accumulated in input order. The composite
    /// wavefunction holds, for every combination enumerated over the
    /// constituents' wavefunctions (last constituent fastest), the sum of the
    /// selected samples. The probability is the first constituent's sequence
    /// as is; energy and `nbox` are left unset.
    ///
    /// The composite basis enumerates all continuous axes before all discrete
    /// axes. When a constituent with discrete axes precedes one with
    /// continuous axes the two orders differ, so coordinate rows no longer
    /// line up with wavefunction samples; see
    /// [`QuantumState::axis_order_aligned`]. A warning is logged in that case.
    pub fn compose(states: &[QuantumState]) -> Result<Self, SchError> {
        let Some(first) = states.first() else {
            return Err(SchError::State(ErrorInfo::new(
                "state_compose_empty",
                "a composite state needs at least one constituent",
            )));
        };

        let mut basis = CompositeBasis::default();
        let mut potential = PotentialField::default();
        for state in states {
            basis += &state.basis;
            potential += &state.potential;
        }

        let wavefunctions: Vec<Vec<f64>> = states
            .iter()
            .map(|state| state.wavefunction.clone())
            .collect();
        if !Self::axis_order_aligned(states) {
            warn!(
                "constituent axis order differs from the composite basis order; \
                 coordinate rows will not line up with wavefunction samples"
            );
        }
        let wavefunction = cartesian_sums(&wavefunctions)?;
        debug!(
            "composed {} states into {} wavefunction samples over {} axes",
            states.len(),
            wavefunction.len(),
            basis.dimensions()
        );

        Ok(Self {
            basis,
            potential,
            wavefunction,
            probability: first.probability.clone(),
            energy: None,
            nbox: None,
        })
    }

    /// Whether the constituents' axes, taken in input order, already follow
    /// the composite basis order (every continuous axis before any discrete
    /// axis).
    pub fn axis_order_aligned(states: &[QuantumState]) -> bool {
        let mut seen_discrete = false;
        for basis in states.iter().map(QuantumState::basis) {
            if seen_discrete && !basis.continuous().is_empty() {
                return false;
            }
            seen_discrete |= !basis.discrete().is_empty();
        }
        true
    }

    /// Returns the state with `energy` set, e.g. on a composite state.
    pub fn with_energy(mut self, energy: f64) -> Self {
        self.energy = Some(energy);
        self
    }

    /// Basis the state is sampled on.
    pub fn basis(&self) -> &CompositeBasis {
        &self.basis
    }

    /// Potential the state was computed in.
    pub fn potential(&self) -> &PotentialField {
        &self.potential
    }

    /// Wavefunction samples.
    pub fn wavefunction(&self) -> &[f64] {
        &self.wavefunction
    }

    /// Probability samples.
    pub fn probability(&self) -> &[f64] {
        &self.probability
    }

    /// Energy eigenvalue, absent on composite states unless supplied.
    pub fn energy(&self) -> Option<f64> {
        self.energy
    }

    /// Discretisation count reported by the solver.
    pub fn nbox(&self) -> Option<usize> {
        self.nbox
    }

    /// Number of wavefunction samples a full product over the basis axes has.
    pub fn expected_samples(&self) -> Result<usize, SchError> {
        self.basis.sample_count()
    }
}
