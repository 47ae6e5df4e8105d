//! Problem files: a basis declaration and the potential shape to evaluate on it.

use std::fs;
use std::path::Path;

use sch_basis::{BasisPreset, CompositeBasis, ContinuousAxis, DiscreteAxis};
use sch_core::{ErrorInfo, SchError};
use sch_potential::PotentialShape;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProblemFile {
    #[serde(default)]
    pub preset: BasisPreset,
    #[serde(default)]
    pub continuous: Vec<ContinuousSpec>,
    #[serde(default)]
    pub discrete: Vec<DiscreteSpec>,
    pub shape: PotentialShape,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ContinuousSpec {
    Samples(Vec<f64>),
    Linspace { linspace: LinspaceSpec },
}

#[derive(Debug, Deserialize)]
pub struct LinspaceSpec {
    pub min: f64,
    pub max: f64,
    pub points: usize,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DiscreteSpec {
    Samples(Vec<i64>),
    Range { range: RangeSpec },
}

#[derive(Debug, Deserialize)]
pub struct RangeSpec {
    pub start: i64,
    pub end: i64,
}

impl ContinuousSpec {
    fn build(self) -> Result<ContinuousAxis, SchError> {
        match self {
            ContinuousSpec::Samples(coords) => ContinuousAxis::new(coords),
            ContinuousSpec::Linspace { linspace } => {
                ContinuousAxis::linspace(linspace.min, linspace.max, linspace.points)
            }
        }
    }
}

impl DiscreteSpec {
    fn build(self) -> Result<DiscreteAxis, SchError> {
        match self {
            DiscreteSpec::Samples(coords) => DiscreteAxis::new(coords),
            DiscreteSpec::Range { range } => DiscreteAxis::range(range.start, range.end),
        }
    }
}

impl ProblemFile {
    pub fn load(path: &Path) -> Result<Self, SchError> {
        let raw = fs::read_to_string(path).map_err(|err| SchError::io("problem_read", path, err))?;
        serde_yaml::from_str(&raw).map_err(|err| {
            SchError::Config(
                ErrorInfo::new("problem_parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Builds the declared basis, returning it with the shape to evaluate.
    pub fn into_parts(self) -> Result<(CompositeBasis, PotentialShape), SchError> {
        let continuous = self
            .continuous
            .into_iter()
            .map(ContinuousSpec::build)
            .collect::<Result<Vec<_>, _>>()?;
        let discrete = self
            .discrete
            .into_iter()
            .map(DiscreteSpec::build)
            .collect::<Result<Vec<_>, _>>()?;
        let basis = CompositeBasis::with_preset(self.preset, continuous, discrete)?;
        Ok((basis, self.shape))
    }
}
