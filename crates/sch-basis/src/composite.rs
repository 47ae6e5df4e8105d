use std::fmt;
use std::ops::{Add, AddAssign};
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};
use sch_core::sink;
use sch_core::{checked_cartesian_len, CartesianIndices, ErrorInfo, SchError};
use serde::{Deserialize, Serialize};

use crate::axis::{AxisBasis, ContinuousAxis, DiscreteAxis};

/// Coordinate system tag a basis was declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BasisPreset {
    /// Arbitrary axes, any count (including none).
    #[default]
    Custom,
    /// Rectilinear axes.
    Cartesian,
    /// Radial and angular axes, at most three.
    Spherical,
    /// Radial, angular and height axes, at most three.
    Cylindrical,
}

impl BasisPreset {
    /// Inclusive range of total axis counts the preset accepts.
    pub fn axis_bounds(&self) -> (usize, Option<usize>) {
        match self {
            BasisPreset::Custom => (0, None),
            BasisPreset::Cartesian => (1, None),
            BasisPreset::Spherical | BasisPreset::Cylindrical => (1, Some(3)),
        }
    }

    /// Whether a basis with `axes` axes may carry this preset.
    pub fn admits(&self, axes: usize) -> bool {
        let (min, max) = self.axis_bounds();
        axes >= min && max.map_or(true, |max| axes <= max)
    }

    fn label(&self) -> &'static str {
        match self {
            BasisPreset::Custom => "custom",
            BasisPreset::Cartesian => "cartesian",
            BasisPreset::Spherical => "spherical",
            BasisPreset::Cylindrical => "cylindrical",
        }
    }
}

impl fmt::Display for BasisPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BasisPreset {
    type Err = SchError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "custom" => Ok(BasisPreset::Custom),
            "cartesian" => Ok(BasisPreset::Cartesian),
            "spherical" => Ok(BasisPreset::Spherical),
            "cylindrical" => Ok(BasisPreset::Cylindrical),
            _ => Err(SchError::Config(
                ErrorInfo::new("basis_preset", "unrecognized basis preset")
                    .with_context("preset", raw)
                    .with_hint("expected one of custom, cartesian, spherical, cylindrical"),
            )),
        }
    }
}

/// Boundary condition applied at the edges of every axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryPolicy {
    /// The wavefunction vanishes outside the sampled range.
    #[default]
    ZeroEdge,
}

/// Separable multi-dimensional domain built from independent axes.
///
/// Continuous and discrete axes live in separate ordered lists. Every
/// product-shaped view of the basis enumerates continuous axes first, then
/// discrete axes, each list in its stored order, with the last axis varying
/// fastest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CompositeBasis {
    preset: BasisPreset,
    continuous: Vec<ContinuousAxis>,
    discrete: Vec<DiscreteAxis>,
    boundary: BoundaryPolicy,
}

impl CompositeBasis {
    /// One-dimensional basis over a single continuous axis.
    pub fn from_continuous(coords: Vec<f64>) -> Result<Self, SchError> {
        let axis = ContinuousAxis::new(coords)?;
        Ok(Self {
            preset: BasisPreset::Cartesian,
            continuous: vec![axis],
            discrete: Vec::new(),
            boundary: BoundaryPolicy::ZeroEdge,
        })
    }

    /// Basis declared with `preset` over explicit axis lists.
    pub fn with_preset(
        preset: BasisPreset,
        continuous: Vec<ContinuousAxis>,
        discrete: Vec<DiscreteAxis>,
    ) -> Result<Self, SchError> {
        let axes = continuous.len() + discrete.len();
        if !preset.admits(axes) {
            let (min, max) = preset.axis_bounds();
            let mut info = ErrorInfo::new("basis_axis_count", "axis count not valid for preset")
                .with_context("preset", preset.to_string())
                .with_context("axes", axes.to_string())
                .with_context("min", min.to_string());
            if let Some(max) = max {
                info = info.with_context("max", max.to_string());
            }
            return Err(SchError::Config(info));
        }
        info!("initializing {preset} basis with {axes} axes");
        Ok(Self {
            preset,
            continuous,
            discrete,
            boundary: BoundaryPolicy::ZeroEdge,
        })
    }

    /// Like [`CompositeBasis::with_preset`], parsing the preset tag first.
    pub fn with_preset_tag(
        tag: &str,
        continuous: Vec<ContinuousAxis>,
        discrete: Vec<DiscreteAxis>,
    ) -> Result<Self, SchError> {
        Self::with_preset(tag.parse()?, continuous, discrete)
    }

    /// Preset the basis was declared with.
    pub fn preset(&self) -> BasisPreset {
        self.preset
    }

    /// Boundary condition tag.
    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// Number of axes, continuous and discrete together.
    pub fn dimensions(&self) -> usize {
        self.continuous.len() + self.discrete.len()
    }

    /// Whether the basis holds no axes at all.
    pub fn is_empty(&self) -> bool {
        self.dimensions() == 0
    }

    /// Continuous axes in enumeration order.
    pub fn continuous(&self) -> &[ContinuousAxis] {
        &self.continuous
    }

    /// Discrete axes in enumeration order.
    pub fn discrete(&self) -> &[DiscreteAxis] {
        &self.discrete
    }

    /// Appends an axis to the list matching its kind.
    ///
    /// The preset falls back to [`BasisPreset::Custom`] once the axis count
    /// leaves its bounds.
    pub fn push_axis(&mut self, axis: impl Into<AxisBasis>) {
        match axis.into() {
            AxisBasis::Continuous(axis) => self.continuous.push(axis),
            AxisBasis::Discrete(axis) => self.discrete.push(axis),
        }
        self.fit_preset();
    }

    /// Appends `other`'s continuous and discrete axes to this basis.
    ///
    /// The preset falls back to [`BasisPreset::Custom`] once the axis count
    /// leaves its bounds.
    pub fn accumulate(&mut self, other: &CompositeBasis) {
        self.continuous.extend(other.continuous.iter().cloned());
        self.discrete.extend(other.discrete.iter().cloned());
        self.fit_preset();
        debug!(
            "accumulated basis now has {} continuous and {} discrete axes",
            self.continuous.len(),
            self.discrete.len()
        );
    }

    fn fit_preset(&mut self) {
        let axes = self.dimensions();
        if !self.preset.admits(axes) {
            debug!("{} preset does not admit {axes} axes, basis is now custom", self.preset);
            self.preset = BasisPreset::Custom;
        }
    }

    /// New custom basis holding this basis's axes followed by `other`'s.
    pub fn union(&self, other: &CompositeBasis) -> CompositeBasis {
        let discrete = self
            .discrete
            .iter()
            .chain(&other.discrete)
            .cloned()
            .collect();
        let continuous = self
            .continuous
            .iter()
            .chain(&other.continuous)
            .cloned()
            .collect();
        info!(
            "initializing custom basis with {} axes",
            self.dimensions() + other.dimensions()
        );
        CompositeBasis {
            preset: BasisPreset::Custom,
            continuous,
            discrete,
            boundary: BoundaryPolicy::ZeroEdge,
        }
    }

    /// Coordinates of a one-axis basis, discrete samples converted to `f64`.
    ///
    /// Fails with [`SchError::State`] unless the basis holds exactly one axis.
    pub fn coords(&self) -> Result<Vec<f64>, SchError> {
        match (self.continuous.as_slice(), self.discrete.as_slice()) {
            ([axis], []) => Ok(axis.coords().to_vec()),
            ([], [axis]) => Ok(axis.coords_f64()),
            _ => Err(SchError::State(
                ErrorInfo::new(
                    "basis_coords",
                    "coordinates are only defined for a single-axis basis",
                )
                .with_context("continuous", self.continuous.len().to_string())
                .with_context("discrete", self.discrete.len().to_string())
                .with_hint("enumerate coordinate_rows() for multi-axis bases"),
            )),
        }
    }

    /// Per-axis samples as `f64`, continuous axes first.
    pub fn axis_samples(&self) -> Vec<Vec<f64>> {
        self.continuous
            .iter()
            .map(|axis| axis.coords().to_vec())
            .chain(self.discrete.iter().map(DiscreteAxis::coords_f64))
            .collect()
    }

    /// Sample counts per axis, in the order of [`CompositeBasis::axis_samples`].
    pub fn axis_lengths(&self) -> Vec<usize> {
        self.continuous
            .iter()
            .map(ContinuousAxis::len)
            .chain(self.discrete.iter().map(DiscreteAxis::len))
            .collect()
    }

    /// Number of coordinate tuples in the full product of all axes.
    ///
    /// Fails with [`SchError::State`] when the product overflows `usize`.
    pub fn sample_count(&self) -> Result<usize, SchError> {
        checked_cartesian_len(&self.axis_lengths())
    }

    /// Every coordinate tuple over all axes, in enumeration order.
    pub fn coordinate_rows(&self) -> CoordinateRows {
        CoordinateRows::new(self.axis_samples())
    }

    /// Coordinate tuples over the continuous axes only.
    pub fn continuous_rows(&self) -> CoordinateRows {
        CoordinateRows::new(
            self.continuous
                .iter()
                .map(|axis| axis.coords().to_vec())
                .collect(),
        )
    }

    /// Writes the basis dump (continuous rows, one per line).
    pub fn write_dump(&self, path: &Path) -> Result<(), SchError> {
        sink::write_rows(path, self.continuous_rows())
    }
}

/// Renders the basis dump: one line per continuous coordinate tuple.
impl fmt::Display for CompositeBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.continuous_rows() {
            sink::fmt_row(f, &row)?;
        }
        Ok(())
    }
}

impl AddAssign<&CompositeBasis> for CompositeBasis {
    fn add_assign(&mut self, rhs: &CompositeBasis) {
        self.accumulate(rhs);
    }
}

impl Add<&CompositeBasis> for &CompositeBasis {
    type Output = CompositeBasis;

    fn add(self, rhs: &CompositeBasis) -> CompositeBasis {
        self.union(rhs)
    }
}

/// Owning iterator over coordinate tuples of a set of axes.
#[derive(Debug, Clone)]
pub struct CoordinateRows {
    samples: Vec<Vec<f64>>,
    indices: CartesianIndices,
}

impl CoordinateRows {
    fn new(samples: Vec<Vec<f64>>) -> Self {
        let indices = CartesianIndices::from_arrays(&samples);
        Self { samples, indices }
    }
}

impl Iterator for CoordinateRows {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        let indices = self.indices.next()?;
        Some(
            indices
                .iter()
                .zip(&self.samples)
                .map(|(&index, axis)| axis[index])
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}
