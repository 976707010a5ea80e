//! # Vector types
//!
//! A sparse vector, storing only the values that were written to it.
pub use sparse::Iter as SparseVectorIter;
pub use sparse::Sparse as SparseVector;

mod sparse;
