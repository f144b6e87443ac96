//! Dense row-major container types for the numeric kernels.
pub mod matrix;
pub mod vector;

pub use matrix::{Matrix, ShapeError};
pub use vector::Vector;
