//! # Sparse matrix
//!
//! Wrapping a `HashMap<(usize, usize), _>`, fixed shape.
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::fmt::Display;
use std::iter::FusedIterator;

use itertools::Itertools;
use log::{debug, trace};

use crate::data::linear_algebra::SparseTriplet;
use crate::data::linear_algebra::error::{LinearAlgebraError, Position, Shape};
use crate::data::linear_algebra::traits::Element;

/// A sparse matrix using a `HashMap` with `(row, column)` keys as back-end. Indices start at `0`.
///
/// Values that were never written are not stored and read as zero.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Sparse<F> {
    data: HashMap<(usize, usize), F>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F> Sparse<F> {
    /// Create a matrix of `nr_rows` by `nr_columns` without any stored values.
    #[must_use]
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: HashMap::new(),
            nr_rows,
            nr_columns,
        }
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Number of rows and columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.nr_rows, self.nr_columns)
    }

    /// Get the number of values stored in this matrix.
    pub fn nr_stored(&self) -> usize {
        self.data.len()
    }

    /// Iterate over the stored `((row, column), value)` triplets.
    ///
    /// The order is unspecified.
    pub fn iter(&self) -> Iter<'_, F> {
        Iter { inner: self.data.iter() }
    }

    fn error_shape(&self) -> Shape {
        Shape::Matrix(self.nr_rows, self.nr_columns)
    }
}

impl<F: Element> Sparse<F> {
    /// Create a matrix from stored `((row, column), value)` triplets.
    ///
    /// When a coordinate appears more than once, the last value is kept.
    ///
    /// # Errors
    ///
    /// `OutOfRange` when a coordinate lies outside of the `nr_rows` by `nr_columns` shape.
    pub fn from_triplets(
        data: Vec<SparseTriplet<F>>,
        nr_rows: usize,
        nr_columns: usize,
    ) -> Result<Self, LinearAlgebraError> {
        let mut matrix = Self::new(nr_rows, nr_columns);
        for ((row, column), value) in data {
            matrix.set(row, column, value)?;
        }

        Ok(matrix)
    }

    /// Get a mutable reference to the value at coordinate (`row`, `column`).
    ///
    /// A zero is stored first if there is no value at that coordinate yet, regardless of whether the
    /// reference is used for writing.
    ///
    /// # Errors
    ///
    /// `OutOfRange` when `row` or `column` lies outside of the matrix.
    pub fn get_mut(&mut self, row: usize, column: usize) -> Result<&mut F, LinearAlgebraError> {
        if row >= self.nr_rows || column >= self.nr_columns {
            return Err(LinearAlgebraError::OutOfRange {
                position: Position::Coordinate(row, column),
                shape: self.error_shape(),
            });
        }

        Ok(self.data.entry((row, column)).or_insert_with(|| {
            trace!("Materializing zero at ({}, {})", row, column);
            F::zero()
        }))
    }

    /// Get a copy of the value at coordinate (`row`, `column`).
    ///
    /// Zero if no value is stored there. Coordinates are not checked against the shape.
    pub fn get(&self, row: usize, column: usize) -> F {
        self.data.get(&(row, column)).cloned().unwrap_or_else(F::zero)
    }

    /// Set the value at coordinate (`row`, `column`) to `value`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` when `row` or `column` lies outside of the matrix.
    pub fn set(&mut self, row: usize, column: usize, value: F) -> Result<(), LinearAlgebraError> {
        *self.get_mut(row, column)? = value;
        Ok(())
    }

    /// Create the transpose of this matrix.
    ///
    /// Every stored value moves from (`row`, `column`) to (`column`, `row`), nothing is computed.
    #[must_use]
    pub fn transpose(&self) -> Self {
        debug!(
            "Transposing {} x {} matrix with {} stored values",
            self.nr_rows, self.nr_columns, self.nr_stored(),
        );

        Self {
            data: self.data.iter()
                .map(|(&(row, column), value)| ((column, row), value.clone()))
                .collect(),
            nr_rows: self.nr_columns,
            nr_columns: self.nr_rows,
        }
    }

    /// Add another matrix of the same shape to this one.
    ///
    /// Starts from a copy of the values stored in this matrix and adds each value stored in `other`
    /// to it. Only stored values are visited.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the shapes of the two matrices differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        if self.shape() != other.shape() {
            return Err(LinearAlgebraError::DimensionMismatch {
                left: self.error_shape(),
                right: other.error_shape(),
            });
        }
        debug!(
            "Adding {} x {} matrices with {} and {} stored values",
            self.nr_rows, self.nr_columns, self.nr_stored(), other.nr_stored(),
        );

        let mut result = self.clone();
        for (&coordinate, value) in &other.data {
            *result.data.entry(coordinate).or_insert_with(F::zero) += value.clone();
        }

        Ok(result)
    }
}

/// Iterator over the stored values of a sparse matrix.
///
/// Created by `Sparse::iter`.
#[derive(Clone, Debug)]
pub struct Iter<'a, F> {
    inner: hash_map::Iter<'a, (usize, usize), F>,
}

impl<'a, F> Iterator for Iter<'a, F> {
    type Item = ((usize, usize), &'a F);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&coordinate, value)| (coordinate, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<F> ExactSizeIterator for Iter<'_, F> {}
impl<F> FusedIterator for Iter<'_, F> {}

impl<'a, F> IntoIterator for &'a Sparse<F> {
    type Item = ((usize, usize), &'a F);
    type IntoIter = Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One line per stored value, row by row.
impl<F: Display> Display for Sparse<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for ((row, column), value) in self.iter().sorted_unstable_by_key(|&(coordinate, _)| coordinate) {
            writeln!(f, "Element ({}, {}) = {}", row, column, value)?;
        }

        Ok(())
    }
}
