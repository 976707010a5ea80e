//! # Storing of sparse numeric data in memory
//!
//! This module provides the data structures used to represent sparse vectors and matrices in
//! memory.

pub mod linear_algebra;
