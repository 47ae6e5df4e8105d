use std::fmt;
use std::str::FromStr;

use sch_core::{ErrorInfo, SchError};
use serde::{Deserialize, Serialize};

/// Tag naming how a potential's per-axis values were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PotentialKind {
    /// Zero everywhere.
    Box,
    /// Quadratic `k * x^2`.
    HarmonicOscillator,
    /// Zero inside an open interval, constant outside.
    FiniteWell,
    /// Values supplied by the caller.
    Custom,
}

impl PotentialKind {
    fn label(&self) -> &'static str {
        match self {
            PotentialKind::Box => "box",
            PotentialKind::HarmonicOscillator => "harmonic-oscillator",
            PotentialKind::FiniteWell => "finite-well",
            PotentialKind::Custom => "custom",
        }
    }
}

impl fmt::Display for PotentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PotentialKind {
    type Err = SchError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "box" => Ok(PotentialKind::Box),
            "harmonic-oscillator" | "ho" => Ok(PotentialKind::HarmonicOscillator),
            "finite-well" => Ok(PotentialKind::FiniteWell),
            "custom" => Ok(PotentialKind::Custom),
            _ => Err(SchError::Config(
                ErrorInfo::new("potential_kind", "unrecognized potential shape")
                    .with_context("shape", raw)
                    .with_hint("expected one of box, harmonic-oscillator, finite-well, custom"),
            )),
        }
    }
}

/// Potential shape together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PotentialShape {
    /// Infinite square well: every sample maps to zero.
    Box,
    /// Every sample `x` maps to `k * x * x`.
    HarmonicOscillator {
        /// Spring constant.
        k: f64,
    },
    /// Samples with `-width/2 < x < width/2` map to zero, all others to `height`.
    FiniteWell {
        /// Full width of the well.
        width: f64,
        /// Value outside the well.
        height: f64,
    },
    /// Precomputed values; never evaluated.
    Custom,
}

impl PotentialShape {
    /// Builds a shape from a tag and the flat parameter set `k`, `width`, `height`.
    ///
    /// Parameters the shape does not use are ignored.
    pub fn from_tag(tag: &str, k: f64, width: f64, height: f64) -> Result<Self, SchError> {
        Ok(match tag.parse::<PotentialKind>()? {
            PotentialKind::Box => PotentialShape::Box,
            PotentialKind::HarmonicOscillator => PotentialShape::HarmonicOscillator { k },
            PotentialKind::FiniteWell => PotentialShape::FiniteWell { width, height },
            PotentialKind::Custom => PotentialShape::Custom,
        })
    }

    /// Tag of this shape.
    pub fn kind(&self) -> PotentialKind {
        match self {
            PotentialShape::Box => PotentialKind::Box,
            PotentialShape::HarmonicOscillator { .. } => PotentialKind::HarmonicOscillator,
            PotentialShape::FiniteWell { .. } => PotentialKind::FiniteWell,
            PotentialShape::Custom => PotentialKind::Custom,
        }
    }

    /// Value at a single sample, `None` for [`PotentialShape::Custom`].
    pub fn value_at(&self, x: f64) -> Option<f64> {
        match *self {
            PotentialShape::Box => Some(0.0),
            PotentialShape::HarmonicOscillator { k } => Some(k * x * x),
            PotentialShape::FiniteWell { width, height } => {
                let half = width / 2.0;
                Some(if x > -half && x < half { 0.0 } else { height })
            }
            PotentialShape::Custom => None,
        }
    }

    /// Fails with [`SchError::Config`] for [`PotentialShape::Custom`].
    pub fn ensure_evaluable(&self) -> Result<(), SchError> {
        if *self == PotentialShape::Custom {
            return Err(SchError::Config(
                ErrorInfo::new("potential_custom_eval", "custom potentials cannot be evaluated")
                    .with_hint("build custom potentials from precomputed per-axis values"),
            ));
        }
        Ok(())
    }

    /// Maps every sample of one axis through the shape.
    pub fn evaluate_axis(&self, samples: &[f64]) -> Result<Vec<f64>, SchError> {
        self.ensure_evaluable()?;
        Ok(samples
            .iter()
            .filter_map(|&x| self.value_at(x))
            .collect())
    }
}
