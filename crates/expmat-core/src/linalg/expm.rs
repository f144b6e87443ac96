//! Matrix exponential by scaling and squaring.
use crate::error::LinAlgError;
use crate::linalg::arithmetic::{add_scaled, inf_norm, scale};
use crate::linalg::lu;
use crate::linalg::mult::matmul;
use crate::linalg::special::identity;
use crate::math::Matrix;

/// Order of the diagonal Pade approximant.
const PADE_ORDER: u32 = 6;

/// Compute exp(alpha * A) for a square matrix `A`.
///
/// Scales the matrix by 2^-s so its infinity norm is below one, evaluates
/// the order-6 diagonal Pade approximant (the denominator system is solved
/// through the LU kernel), then squares the result s times.
pub fn expm(a: &Matrix<f64>, alpha: f64) -> Result<Matrix<f64>, LinAlgError> {
    if !a.is_square() {
        return Err(LinAlgError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    let n = a.nrows();

    let mut a2 = a.clone();
    scale(alpha, &mut a2);

    let a_norm = inf_norm(&a2);
    let squarings = if a_norm == 0.0 {
        0
    } else {
        let ee = a_norm.log2().trunc() as i32 + 1;
        (ee + 1).max(0) as u32
    };
    log::debug!("expm: norm {}, {} squarings", a_norm, squarings);
    scale(0.5f64.powi(squarings as i32), &mut a2);

    let mut x = a2.clone();
    let mut c = 0.5;
    let mut numer = identity(n);
    add_scaled(&a2, &mut numer, c);
    let mut denom = identity(n);
    add_scaled(&a2, &mut denom, -c);

    let q = PADE_ORDER;
    let mut positive = true;
    for k in 2..=q {
        c = c * (q - k + 1) as f64 / (k * (2 * q - k + 1)) as f64;
        x = matmul(&a2, &x)?;
        add_scaled(&x, &mut numer, c);
        add_scaled(&x, &mut denom, if positive { c } else { -c });
        positive = !positive;
    }

    let mut result = lu::solve(&denom, &numer)?;
    for _ in 0..squarings {
        result = matmul(&result, &result)?;
    }
    Ok(result)
}
