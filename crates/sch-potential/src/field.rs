use std::fmt;
use std::ops::{Add, AddAssign};
use std::path::Path;

use log::debug;
use sch_basis::CompositeBasis;
use sch_core::sink;
use sch_core::{cartesian_sums, ErrorInfo, RunContext, SchError};

use crate::shape::{PotentialKind, PotentialShape};

/// Scalar potential sampled separately along every axis of a basis.
///
/// Holds one value array per axis: continuous axes first, then discrete
/// axes, each in basis order. The scalar field at a coordinate tuple is the
/// sum of the selected value on each axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PotentialField {
    basis: CompositeBasis,
    values: Vec<Vec<f64>>,
    shape: Option<PotentialShape>,
}

impl PotentialField {
    /// Wraps precomputed per-axis values.
    ///
    /// `values` must hold one array per axis with the axis's sample count.
    pub fn from_values(basis: CompositeBasis, values: Vec<Vec<f64>>) -> Result<Self, SchError> {
        check_layout(&basis, &values)?;
        Ok(Self {
            basis,
            values,
            shape: Some(PotentialShape::Custom),
        })
    }

    /// Evaluates `shape` on every axis of `basis` without persisting anything.
    ///
    /// [`PotentialShape::Custom`] is rejected whatever the axis count; custom
    /// fields come from [`PotentialField::from_values`].
    pub fn evaluate(basis: CompositeBasis, shape: PotentialShape) -> Result<Self, SchError> {
        shape.ensure_evaluable()?;
        let values = basis
            .axis_samples()
            .iter()
            .map(|samples| shape.evaluate_axis(samples))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            "evaluated {} potential over {} axes",
            shape.kind(),
            values.len()
        );
        Ok(Self {
            basis,
            values,
            shape: Some(shape),
        })
    }

    /// Evaluates `shape` and persists the combined field to the potential sink.
    ///
    /// A sink failure is reported through `ctx`; the field is still returned.
    pub fn from_shape(
        basis: CompositeBasis,
        shape: PotentialShape,
        ctx: &mut RunContext,
    ) -> Result<Self, SchError> {
        let field = Self::evaluate(basis, shape)?;
        if ctx.output().persist_potential {
            let path = ctx.output().potential_path();
            let written = field.write_dump(&path);
            ctx.record(written);
        }
        Ok(field)
    }

    /// Basis the field is sampled on.
    pub fn basis(&self) -> &CompositeBasis {
        &self.basis
    }

    /// Per-axis value arrays.
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Shape the values came from; `None` for an empty field.
    pub fn shape(&self) -> Option<PotentialShape> {
        self.shape
    }

    /// Shape tag, [`PotentialKind::Custom`] for empty or mixed fields.
    pub fn kind(&self) -> PotentialKind {
        self.shape.map_or(PotentialKind::Custom, |shape| shape.kind())
    }

    /// Sum of per-axis values for every coordinate tuple, in enumeration order.
    ///
    /// Fails with [`SchError::State`] when the tuple count overflows `usize`.
    pub fn combined(&self) -> Result<Vec<f64>, SchError> {
        cartesian_sums(&self.values)
    }

    /// Appends `other`'s axes and value arrays.
    ///
    /// Continuous-axis arrays stay ahead of discrete-axis arrays so the
    /// layout keeps matching the grown basis.
    pub fn accumulate(&mut self, other: &PotentialField) {
        self.values = merge_values(&self.basis, &self.values, &other.basis, &other.values);
        self.basis.accumulate(&other.basis);
        self.shape = merge_shape(self.shape, other.shape);
    }

    /// New field over the union of both bases, holding both sets of arrays.
    pub fn union(&self, other: &PotentialField) -> PotentialField {
        PotentialField {
            basis: self.basis.union(&other.basis),
            values: merge_values(&self.basis, &self.values, &other.basis, &other.values),
            shape: merge_shape(self.shape, other.shape),
        }
    }

    /// Writes the combined field, one sum per line.
    pub fn write_dump(&self, path: &Path) -> Result<(), SchError> {
        let combined = self.combined()?;
        sink::write_rows(path, combined.iter().map(std::slice::from_ref))
    }
}

fn check_layout(basis: &CompositeBasis, values: &[Vec<f64>]) -> Result<(), SchError> {
    let lengths = basis.axis_lengths();
    if lengths.len() != values.len() {
        return Err(SchError::Config(
            ErrorInfo::new("potential_layout", "one value array per axis is required")
                .with_context("axes", lengths.len().to_string())
                .with_context("arrays", values.len().to_string()),
        ));
    }
    for (axis, (expected, array)) in lengths.iter().zip(values).enumerate() {
        if *expected != array.len() {
            return Err(SchError::Config(
                ErrorInfo::new("potential_layout", "value array length differs from axis")
                    .with_context("axis", axis.to_string())
                    .with_context("samples", expected.to_string())
                    .with_context("values", array.len().to_string()),
            ));
        }
    }
    Ok(())
}

fn merge_values(
    left_basis: &CompositeBasis,
    left: &[Vec<f64>],
    right_basis: &CompositeBasis,
    right: &[Vec<f64>],
) -> Vec<Vec<f64>> {
    let (left_cont, left_disc) = left.split_at(left_basis.continuous().len().min(left.len()));
    let (right_cont, right_disc) =
        right.split_at(right_basis.continuous().len().min(right.len()));
    left_cont
        .iter()
        .chain(right_cont)
        .chain(left_disc)
        .chain(right_disc)
        .cloned()
        .collect()
}

fn merge_shape(left: Option<PotentialShape>, right: Option<PotentialShape>) -> Option<PotentialShape> {
    match (left, right) {
        (None, shape) | (shape, None) => shape,
        (Some(a), Some(b)) if a == b => Some(a),
        _ => Some(PotentialShape::Custom),
    }
}

/// Renders the potential dump: one combined sum per line.
impl fmt::Display for PotentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.combined().map_err(|_| fmt::Error)? {
            sink::fmt_row(f, &[value])?;
        }
        Ok(())
    }
}

impl AddAssign<&PotentialField> for PotentialField {
    fn add_assign(&mut self, rhs: &PotentialField) {
        self.accumulate(rhs);
    }
}

impl Add<&PotentialField> for &PotentialField {
    type Output = PotentialField;

    fn add(self, rhs: &PotentialField) -> PotentialField {
        self.union(rhs)
    }
}
