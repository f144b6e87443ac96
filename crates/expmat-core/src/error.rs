use std::error::Error;
use std::fmt;

/// Custom error type for linear-algebra kernel failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinAlgError {
    NotSquare { rows: usize, cols: usize },
    ShapeMismatch { left: (usize, usize), right: (usize, usize) },
    Singular { pivot: usize },
}

impl fmt::Display for LinAlgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinAlgError::NotSquare { rows, cols } => {
                write!(f, "Expected a square matrix, got shape ({}, {})", rows, cols)
            }
            LinAlgError::ShapeMismatch { left, right } => write!(
                f,
                "Incompatible shapes ({}, {}) and ({}, {})",
                left.0, left.1, right.0, right.1
            ),
            LinAlgError::Singular { pivot } => {
                write!(f, "Matrix is singular: zero pivot at column {}", pivot)
            }
        }
    }
}

impl Error for LinAlgError {}
