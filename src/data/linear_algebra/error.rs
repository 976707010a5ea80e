//! # Error reporting for sparse vectors and matrices
//!
//! Accessing a position outside of a container, or combining containers that don't have the same
//! shape, is reported with a `LinearAlgebraError`. Nothing is ever clamped or resized to avoid the
//! error.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// A `LinearAlgebraError` is created when an operation on a sparse container can't be carried out.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum LinearAlgebraError {
    /// A position was used for writing that lies outside of the container.
    OutOfRange {
        /// The position that was requested.
        position: Position,
        /// The shape of the container that was accessed.
        shape: Shape,
    },
    /// Two containers were combined that don't have the same shape.
    DimensionMismatch {
        /// Shape of the left-hand side operand.
        left: Shape,
        /// Shape of the right-hand side operand.
        right: Shape,
    },
}

/// A location in a vector or a matrix.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum Position {
    /// Index into a vector.
    Index(usize),
    /// `(row, column)` coordinate into a matrix.
    Coordinate(usize, usize),
}

/// Dimensions of a vector or a matrix.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum Shape {
    /// Length of a vector.
    Vector(usize),
    /// Number of rows and number of columns of a matrix.
    Matrix(usize, usize),
}

impl Display for LinearAlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinearAlgebraError::OutOfRange { position, shape } => {
                write!(f, "OutOfRange: {} is out of range for {}", position, shape)
            },
            LinearAlgebraError::DimensionMismatch { left, right } => {
                write!(f, "DimensionMismatch: {} and {} must be of the same size", left, right)
            },
        }
    }
}

impl Error for LinearAlgebraError {}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Position::Index(index) => write!(f, "index {}", index),
            Position::Coordinate(row, column) => write!(f, "coordinate ({}, {})", row, column),
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Shape::Vector(len) => write!(f, "vector of length {}", len),
            Shape::Matrix(nr_rows, nr_columns) => write!(f, "{} x {} matrix", nr_rows, nr_columns),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::error::{LinearAlgebraError, Position, Shape};

    #[test]
    fn display() {
        let error = LinearAlgebraError::OutOfRange {
            position: Position::Index(7),
            shape: Shape::Vector(5),
        };
        assert_eq!(error.to_string(), "OutOfRange: index 7 is out of range for vector of length 5");

        let error = LinearAlgebraError::OutOfRange {
            position: Position::Coordinate(3, 0),
            shape: Shape::Matrix(3, 3),
        };
        assert_eq!(error.to_string(), "OutOfRange: coordinate (3, 0) is out of range for 3 x 3 matrix");

        let error = LinearAlgebraError::DimensionMismatch {
            left: Shape::Matrix(2, 3),
            right: Shape::Matrix(3, 2),
        };
        assert_eq!(
            error.to_string(),
            "DimensionMismatch: 2 x 3 matrix and 3 x 2 matrix must be of the same size",
        );
    }

    #[test]
    fn is_error() {
        let error: Box<dyn std::error::Error> = Box::new(LinearAlgebraError::DimensionMismatch {
            left: Shape::Vector(1),
            right: Shape::Vector(2),
        });
        assert!(std::error::Error::source(&*error).is_none());
    }
}
