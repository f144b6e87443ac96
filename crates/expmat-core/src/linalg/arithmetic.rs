//! Elementwise helpers shared by the factorization and exponential kernels.
use crate::math::{Matrix, Vector};

/// Scale every entry of `mat` in place.
pub fn scale(alpha: f64, mat: &mut Matrix<f64>) {
    for value in mat.as_mut_slice() {
        *value *= alpha;
    }
}

pub fn scale_vector(alpha: f64, vec: &mut Vector<f64>) {
    for value in vec.as_mut_slice() {
        *value *= alpha;
    }
}

/// Accumulate `y += alpha * x` for equally shaped matrices.
pub fn add_scaled(x: &Matrix<f64>, y: &mut Matrix<f64>, alpha: f64) {
    assert_eq!(
        x.shape(),
        y.shape(),
        "Scaled addition requires equally shaped matrices"
    );
    for (lhs, rhs) in y.as_mut_slice().iter_mut().zip(x.as_slice()) {
        *lhs += alpha * rhs;
    }
}

pub fn dot(a: &Vector<f64>, b: &Vector<f64>) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "Dot product requires equal length vectors"
    );
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Euclidean norm of a vector.
pub fn norm(v: &Vector<f64>) -> f64 {
    dot(v, v).sqrt()
}

/// Matrix infinity norm: the maximum absolute row sum.
pub fn inf_norm(mat: &Matrix<f64>) -> f64 {
    let mut value: f64 = 0.0;
    for row in 0..mat.nrows() {
        let row_sum: f64 = mat.row_slice(row).iter().map(|v| v.abs()).sum();
        value = value.max(row_sum);
    }
    value
}
