//! # Linear algebra primitives
//!
//! Linear algebra primitives used to represent data in a sparse format. Both the vector and the
//! matrix are backed by a `HashMap`, so iteration over the stored values happens in no particular
//! order.

pub mod error;
pub mod matrix;
pub mod traits;
pub mod vector;

/// A stored value of a sparse vector, together with its index.
pub type SparseTuple<F> = (usize, F);

/// A stored value of a sparse matrix, together with its `(row, column)` coordinate.
pub type SparseTriplet<F> = ((usize, usize), F);
