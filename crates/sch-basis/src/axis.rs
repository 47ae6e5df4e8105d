use std::convert::TryFrom;

use sch_core::{ErrorInfo, SchError};
use serde::{Deserialize, Serialize};

fn empty_axis(kind: &str) -> SchError {
    SchError::State(
        ErrorInfo::new("axis_empty", "an axis needs at least one sample")
            .with_context("kind", kind),
    )
}

/// Real-valued coordinate axis. Sample order defines enumeration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ContinuousAxis {
    coords: Vec<f64>,
}

impl ContinuousAxis {
    /// Wraps explicit samples.
    pub fn new(coords: Vec<f64>) -> Result<Self, SchError> {
        if coords.is_empty() {
            return Err(empty_axis("continuous"));
        }
        Ok(Self { coords })
    }

    /// `points` evenly spaced samples from `min` to `max`, both included.
    pub fn linspace(min: f64, max: f64, points: usize) -> Result<Self, SchError> {
        if !(min.is_finite() && max.is_finite()) || min > max {
            return Err(SchError::Config(
                ErrorInfo::new("axis_linspace", "linspace bounds must be finite and ordered")
                    .with_context("min", min.to_string())
                    .with_context("max", max.to_string()),
            ));
        }
        let coords = match points {
            0 => {
                return Err(SchError::Config(
                    ErrorInfo::new("axis_linspace", "linspace needs at least one point")
                        .with_context("points", "0"),
                ))
            }
            1 => vec![min],
            _ => {
                let step = (max - min) / (points - 1) as f64;
                (0..points)
                    .map(|i| if i + 1 == points { max } else { min + step * i as f64 })
                    .collect()
            }
        };
        Self::new(coords)
    }

    /// Sample coordinates.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

impl TryFrom<Vec<f64>> for ContinuousAxis {
    type Error = SchError;

    fn try_from(coords: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(coords)
    }
}

impl From<ContinuousAxis> for Vec<f64> {
    fn from(axis: ContinuousAxis) -> Self {
        axis.coords
    }
}

/// Integer-valued coordinate axis (quantum numbers, lattice sites).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct DiscreteAxis {
    coords: Vec<i64>,
}

impl DiscreteAxis {
    /// Wraps explicit samples.
    pub fn new(coords: Vec<i64>) -> Result<Self, SchError> {
        if coords.is_empty() {
            return Err(empty_axis("discrete"));
        }
        Ok(Self { coords })
    }

    /// Every integer from `start` to `end`, both included.
    pub fn range(start: i64, end: i64) -> Result<Self, SchError> {
        Self::new((start..=end).collect())
    }

    /// Sample coordinates.
    pub fn coords(&self) -> &[i64] {
        &self.coords
    }

    /// Samples converted to floating point.
    pub fn coords_f64(&self) -> Vec<f64> {
        self.coords.iter().map(|&c| c as f64).collect()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

impl TryFrom<Vec<i64>> for DiscreteAxis {
    type Error = SchError;

    fn try_from(coords: Vec<i64>) -> Result<Self, Self::Error> {
        Self::new(coords)
    }
}

impl From<DiscreteAxis> for Vec<i64> {
    fn from(axis: DiscreteAxis) -> Self {
        axis.coords
    }
}

/// Either kind of axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisBasis {
    /// Real-valued samples.
    Continuous(ContinuousAxis),
    /// Integer samples.
    Discrete(DiscreteAxis),
}

impl AxisBasis {
    /// Number of samples.
    pub fn len(&self) -> usize {
        match self {
            AxisBasis::Continuous(axis) => axis.len(),
            AxisBasis::Discrete(axis) => axis.len(),
        }
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples as floating point, discrete values converted.
    pub fn coords_f64(&self) -> Vec<f64> {
        match self {
            AxisBasis::Continuous(axis) => axis.coords().to_vec(),
            AxisBasis::Discrete(axis) => axis.coords_f64(),
        }
    }
}

impl From<ContinuousAxis> for AxisBasis {
    fn from(axis: ContinuousAxis) -> Self {
        AxisBasis::Continuous(axis)
    }
}

impl From<DiscreteAxis> for AxisBasis {
    fn from(axis: DiscreteAxis) -> Self {
        AxisBasis::Discrete(axis)
    }
}
