//! # Traits for elements in sparse datastructures
//!
//! Values that are not stored are read as zero, so the element type needs to know what zero is.
//! Beyond that, the algorithms on the sparse types only need to add values into an accumulator and
//! multiply two values.
use std::fmt::{Debug, Display};
use std::ops::{AddAssign, Mul};

use num_traits::Zero;

/// Element of a `SparseVector` or `SparseMatrix`.
///
/// Zero plays the role of the default value: it is what is read at positions without an entry, it
/// is what a new entry is initialized to before being handed out for writing and it is where
/// accumulations start.
///
/// This trait has a blanket implementation, so there is no need to implement it by hand.
pub trait Element:
    Zero +
    Clone +
    AddAssign +
    Mul<Output=Self> +
    Display +
    Debug +
{
}

impl<T> Element for T
where
    T: Zero + Clone + AddAssign + Mul<Output=T> + Display + Debug,
{
}
