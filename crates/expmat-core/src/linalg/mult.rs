//! Dense matrix products.
use crate::error::LinAlgError;
use crate::math::{Matrix, Vector};

/// Matrix product `a * b`.
pub fn matmul(a: &Matrix<f64>, b: &Matrix<f64>) -> Result<Matrix<f64>, LinAlgError> {
    if a.ncols() != b.nrows() {
        return Err(LinAlgError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    let mut out = Matrix::from_elem(a.nrows(), b.ncols(), 0.0);
    for i in 0..a.nrows() {
        let row = a.row_slice(i);
        for (k, &aik) in row.iter().enumerate() {
            if aik == 0.0 {
                continue;
            }
            let b_row = b.row_slice(k);
            for j in 0..b.ncols() {
                out[(i, j)] += aik * b_row[j];
            }
        }
    }
    Ok(out)
}

/// Matrix-vector product `a * x`.
pub fn matvec(a: &Matrix<f64>, x: &Vector<f64>) -> Result<Vector<f64>, LinAlgError> {
    if a.ncols() != x.len() {
        return Err(LinAlgError::ShapeMismatch {
            left: a.shape(),
            right: (x.len(), 1),
        });
    }
    let mut out = Vector::zeros(a.nrows());
    for i in 0..a.nrows() {
        out[i] = a
            .row_slice(i)
            .iter()
            .zip(x.iter())
            .map(|(m, v)| m * v)
            .sum();
    }
    Ok(out)
}
