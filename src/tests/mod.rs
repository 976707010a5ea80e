//! # Integration tests that require a look inside the crate.
//!
//! Each module sets up a small set of vectors and matrices and checks the results of all
//! operations on them, inspecting the stored values directly.
