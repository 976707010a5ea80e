//! # Sparse vectors and matrices
//!
//! Containers that only store the entries that were explicitly assigned. Every position that was
//! never written to reads as zero.
#![warn(missing_docs)]

pub mod data;

#[cfg(test)]
mod tests;
