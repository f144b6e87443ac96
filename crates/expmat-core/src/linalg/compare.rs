//! Tolerance-based comparison of scalars, vectors, and matrices.
use crate::math::{Matrix, Vector};

/// Default absolute tolerance for f64 comparisons.
pub const F64_ATOL: f64 = 1000.0 * f64::EPSILON;
/// Default relative tolerance for f64 comparisons.
pub const F64_RTOL: f64 = 10000.0 * f64::EPSILON;

pub fn close_scalar(x: f64, y: f64, atol: f64, rtol: f64) -> bool {
    (x - y).abs() <= atol + rtol * y.abs()
}

pub fn close_vector(a: &Vector<f64>, b: &Vector<f64>, atol: f64, rtol: f64) -> bool {
    assert_eq!(a.len(), b.len(), "Comparison requires equal length vectors");
    a.iter()
        .zip(b.iter())
        .all(|(x, y)| close_scalar(*x, *y, atol, rtol))
}

pub fn close_matrix(a: &Matrix<f64>, b: &Matrix<f64>, atol: f64, rtol: f64) -> bool {
    assert_eq!(
        a.shape(),
        b.shape(),
        "Comparison requires equally shaped matrices"
    );
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .all(|(x, y)| close_scalar(*x, *y, atol, rtol))
}
