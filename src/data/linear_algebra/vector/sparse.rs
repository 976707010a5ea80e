//! # Sparse vector
//!
//! Wrapping a `HashMap<usize, _>`, fixed size.
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::fmt::Display;
use std::iter::FusedIterator;

use itertools::Itertools;
use log::{debug, trace};

use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_algebra::error::{LinearAlgebraError, Position, Shape};
use crate::data::linear_algebra::traits::Element;

/// A sparse vector using a `HashMap` with index keys as back-end. Indices start at `0`.
///
/// Only values that were written are stored. Any other index reads as zero.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Sparse<F> {
    data: HashMap<usize, F>,
    len: usize,
}

impl<F> Sparse<F> {
    /// Create a vector of length `len` without any stored values.
    ///
    /// A length of zero is allowed; such a vector can't store anything.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            data: HashMap::new(),
            len,
        }
    }

    /// The length of this vector.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this vector has zero length.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of values stored (and not the length of the represented vector).
    pub fn nr_stored(&self) -> usize {
        self.data.len()
    }

    /// Iterate over the stored `(index, value)` pairs.
    ///
    /// The order is unspecified and may differ between two vectors with the same values.
    pub fn iter(&self) -> Iter<'_, F> {
        Iter { inner: self.data.iter() }
    }

    fn shape(&self) -> Shape {
        Shape::Vector(self.len)
    }
}

impl<F: Element> Sparse<F> {
    /// Create a vector of length `len` from stored `(index, value)` pairs.
    ///
    /// When an index appears more than once, the last value is kept.
    ///
    /// # Errors
    ///
    /// `OutOfRange` when one of the indices is not smaller than `len`.
    pub fn from_tuples(data: Vec<SparseTuple<F>>, len: usize) -> Result<Self, LinearAlgebraError> {
        let mut vector = Self::new(len);
        for (index, value) in data {
            vector.set(index, value)?;
        }

        Ok(vector)
    }

    /// Get a mutable reference to the value at `index`.
    ///
    /// If there is no value stored at `index` yet, a zero is inserted first. This happens also when
    /// the reference is only used for reading, use `get` to read without changing the storage.
    ///
    /// # Errors
    ///
    /// `OutOfRange` when `index` is not smaller than the length of this vector.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut F, LinearAlgebraError> {
        if index >= self.len {
            return Err(LinearAlgebraError::OutOfRange {
                position: Position::Index(index),
                shape: self.shape(),
            });
        }

        Ok(self.data.entry(index).or_insert_with(|| {
            trace!("Materializing zero at index {}", index);
            F::zero()
        }))
    }

    /// Retrieve a copy of the value at `index`.
    ///
    /// Returns zero when nothing is stored at `index`. The index is not checked against the length
    /// of the vector and the storage is never changed.
    pub fn get(&self, index: usize) -> F {
        self.data.get(&index).cloned().unwrap_or_else(F::zero)
    }

    /// Set the value at `index` to `value`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` when `index` is not smaller than the length of this vector.
    pub fn set(&mut self, index: usize, value: F) -> Result<(), LinearAlgebraError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Calculate the inner product between two vectors.
    ///
    /// Only the values stored in this vector are visited. An index that is stored in `other` but
    /// not in `self` would be multiplied with a zero, so it can be skipped.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the two vectors don't have the same length.
    pub fn dot_product(&self, other: &Self) -> Result<F, LinearAlgebraError> {
        if self.len != other.len {
            return Err(LinearAlgebraError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        debug!(
            "Dot product of length {} with {} and {} stored values",
            self.len, self.nr_stored(), other.nr_stored(),
        );

        let mut total = F::zero();
        for (index, value) in &self.data {
            if let Some(other_value) = other.data.get(index) {
                total += value.clone() * other_value.clone();
            }
        }

        Ok(total)
    }
}

/// Iterator over the stored values of a sparse vector.
///
/// Created by `Sparse::iter`.
#[derive(Clone, Debug)]
pub struct Iter<'a, F> {
    inner: hash_map::Iter<'a, usize, F>,
}

impl<'a, F> Iterator for Iter<'a, F> {
    type Item = (usize, &'a F);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&index, value)| (index, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<F> ExactSizeIterator for Iter<'_, F> {}
impl<F> FusedIterator for Iter<'_, F> {}

impl<'a, F> IntoIterator for &'a Sparse<F> {
    type Item = (usize, &'a F);
    type IntoIter = Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One line per stored value, by increasing index.
impl<F: Display> Display for Sparse<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, value) in self.iter().sorted_unstable_by_key(|&(index, _)| index) {
            writeln!(f, "Element [{}] = {}", index, value)?;
        }

        Ok(())
    }
}
