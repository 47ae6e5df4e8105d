//! Cartesian enumeration over per-axis arrays.
//!
//! Every product-shaped quantity in the engine (basis coordinate rows, the
//! combined potential field, composite wavefunctions) is produced by walking
//! [`CartesianIndices`]. The walk is lexicographic with the last axis varying
//! fastest, so all three stay aligned index for index.

use std::iter::FusedIterator;

use crate::errors::{ErrorInfo, SchError};

/// Lazy, finite and restartable enumeration of index tuples.
///
/// For lengths `[2, 3]` the sequence is `[0,0] [0,1] [0,2] [1,0] [1,1] [1,2]`.
/// When no lengths are given, or any length is zero, the sequence is empty.
/// A product too large for `usize` still enumerates lazily; its size hint is
/// then `(usize::MAX, None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartesianIndices {
    lengths: Vec<usize>,
    current: Option<Vec<usize>>,
    remaining: Option<usize>,
}

impl CartesianIndices {
    /// Creates an enumeration over axes with the given sample counts.
    pub fn new(lengths: impl Into<Vec<usize>>) -> Self {
        let lengths = lengths.into();
        let remaining = cartesian_len(&lengths);
        let current = (remaining != Some(0)).then(|| vec![0; lengths.len()]);
        Self {
            lengths,
            current,
            remaining,
        }
    }

    /// Creates an enumeration matching the lengths of `arrays`.
    pub fn from_arrays<T>(arrays: &[Vec<T>]) -> Self {
        Self::new(arrays.iter().map(Vec::len).collect::<Vec<_>>())
    }

    /// Axis sample counts this enumeration walks over.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Total number of tuples produced by a fresh enumeration, `None` when
    /// it does not fit in `usize`.
    pub fn total(&self) -> Option<usize> {
        cartesian_len(&self.lengths)
    }

    /// Returns a fresh enumeration over the same lengths.
    pub fn restart(&self) -> Self {
        Self::new(self.lengths.clone())
    }

    fn advance(&self, current: &[usize]) -> Option<Vec<usize>> {
        let mut next = current.to_vec();
        for axis in (0..next.len()).rev() {
            if next[axis] + 1 < self.lengths[axis] {
                next[axis] += 1;
                for trailing in next.iter_mut().skip(axis + 1) {
                    *trailing = 0;
                }
                return Some(next);
            }
        }
        None
    }
}

impl Iterator for CartesianIndices {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        self.current = self.advance(&current);
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for CartesianIndices {}

/// Number of tuples in the product of axes with the given lengths.
///
/// Zero axes yield zero tuples. Returns `None` when the product overflows.
pub fn cartesian_len(lengths: &[usize]) -> Option<usize> {
    if lengths.is_empty() || lengths.contains(&0) {
        return Some(0);
    }
    lengths
        .iter()
        .try_fold(1usize, |total, &len| total.checked_mul(len))
}

/// Like [`cartesian_len`], reporting an overflowing product as [`SchError::State`].
pub fn checked_cartesian_len(lengths: &[usize]) -> Result<usize, SchError> {
    cartesian_len(lengths).ok_or_else(|| {
        SchError::State(
            ErrorInfo::new("cartesian_overflow", "product of axis lengths exceeds usize")
                .with_context(
                    "lengths",
                    lengths
                        .iter()
                        .map(usize::to_string)
                        .collect::<Vec<_>>()
                        .join("x"),
                ),
        )
    })
}

/// Yields one row per enumerated tuple, picking the selected element of each array.
pub fn cartesian_rows<T: Copy>(arrays: &[Vec<T>]) -> impl Iterator<Item = Vec<T>> + '_ {
    CartesianIndices::from_arrays(arrays).map(move |indices| {
        indices
            .iter()
            .zip(arrays)
            .map(|(&index, array)| array[index])
            .collect()
    })
}

/// Sums the selected element of each array for every enumerated tuple.
///
/// Fails with [`SchError::State`] when the number of tuples overflows `usize`.
pub fn cartesian_sums(arrays: &[Vec<f64>]) -> Result<Vec<f64>, SchError> {
    let lengths: Vec<usize> = arrays.iter().map(Vec::len).collect();
    let total = checked_cartesian_len(&lengths)?;
    let mut sums = Vec::with_capacity(total);
    sums.extend(CartesianIndices::new(lengths).map(|indices| {
        indices
            .iter()
            .zip(arrays)
            .map(|(&index, array)| array[index])
            .sum::<f64>()
    }));
    Ok(sums)
}
