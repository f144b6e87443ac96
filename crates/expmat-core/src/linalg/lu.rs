//! LU factorization with partial pivoting, plus the solves built on it.
use crate::error::LinAlgError;
use crate::linalg::special::identity;
use crate::math::{Matrix, Vector};

/// Packed LU factors of a square matrix.
///
/// The unit-diagonal L multipliers sit below the diagonal of `lu`, U on and
/// above it. `ipiv[k]` records the row swapped into position `k` while
/// eliminating column `k`.
#[derive(Debug, Clone)]
pub struct LuFactors {
    lu: Matrix<f64>,
    ipiv: Vec<usize>,
    sign: f64,
}

/// Factor `a` as P*L*U. An exactly zero pivot yields [`LinAlgError::Singular`].
pub fn factor(a: &Matrix<f64>) -> Result<LuFactors, LinAlgError> {
    if !a.is_square() {
        return Err(LinAlgError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    let n = a.nrows();
    let mut lu = a.clone();
    let mut ipiv = Vec::with_capacity(n);
    let mut sign = 1.0;

    for col in 0..n {
        let mut pivot_row = col;
        let mut pivot_mag = lu[(col, col)].abs();
        for row in col + 1..n {
            let mag = lu[(row, col)].abs();
            if mag > pivot_mag {
                pivot_row = row;
                pivot_mag = mag;
            }
        }
        if pivot_mag == 0.0 {
            return Err(LinAlgError::Singular { pivot: col });
        }
        if pivot_row != col {
            swap_rows(&mut lu, col, pivot_row);
            sign = -sign;
        }
        ipiv.push(pivot_row);

        let pivot = lu[(col, col)];
        for row in col + 1..n {
            let factor = lu[(row, col)] / pivot;
            lu[(row, col)] = factor;
            for c in col + 1..n {
                lu[(row, c)] -= factor * lu[(col, c)];
            }
        }
    }

    Ok(LuFactors { lu, ipiv, sign })
}

impl LuFactors {
    pub fn dim(&self) -> usize {
        self.lu.nrows()
    }

    /// Solve `A * X = B` for a matrix of right-hand sides.
    pub fn solve_matrix(&self, b: &Matrix<f64>) -> Result<Matrix<f64>, LinAlgError> {
        let n = self.dim();
        if b.nrows() != n {
            return Err(LinAlgError::ShapeMismatch {
                left: self.lu.shape(),
                right: b.shape(),
            });
        }
        let n_rhs = b.ncols();
        let mut x = b.clone();

        for (col, &p) in self.ipiv.iter().enumerate() {
            if p != col {
                swap_rows(&mut x, col, p);
            }
        }

        // forward substitution with the unit-diagonal L factors
        for col in 0..n {
            for row in col + 1..n {
                let factor = self.lu[(row, col)];
                if factor != 0.0 {
                    for c in 0..n_rhs {
                        let update = factor * x[(col, c)];
                        x[(row, c)] -= update;
                    }
                }
            }
        }

        // back substitution with U
        for col in (0..n).rev() {
            let pivot = self.lu[(col, col)];
            for c in 0..n_rhs {
                x[(col, c)] /= pivot;
            }
            for row in 0..col {
                let factor = self.lu[(row, col)];
                if factor != 0.0 {
                    for c in 0..n_rhs {
                        let update = factor * x[(col, c)];
                        x[(row, c)] -= update;
                    }
                }
            }
        }

        Ok(x)
    }

    /// Solve `A * x = b` for a single right-hand side.
    pub fn solve_vector(&self, b: &Vector<f64>) -> Result<Vector<f64>, LinAlgError> {
        let n = self.dim();
        if b.len() != n {
            return Err(LinAlgError::ShapeMismatch {
                left: self.lu.shape(),
                right: (b.len(), 1),
            });
        }
        let mut column = Matrix::from_elem(n, 1, 0.0);
        for (i, &value) in b.iter().enumerate() {
            column[(i, 0)] = value;
        }
        let solved = self.solve_matrix(&column)?;
        Ok(solved.to_vec().into())
    }

    /// Determinant recovered from the factorization.
    pub fn determinant(&self) -> f64 {
        let mut det = self.sign;
        for i in 0..self.dim() {
            det *= self.lu[(i, i)];
        }
        det
    }
}

/// Solve `A * X = B` in one shot.
pub fn solve(a: &Matrix<f64>, b: &Matrix<f64>) -> Result<Matrix<f64>, LinAlgError> {
    factor(a)?.solve_matrix(b)
}

/// Determinant of a square matrix. Singular input gives 0 rather than an error.
pub fn determinant(a: &Matrix<f64>) -> Result<f64, LinAlgError> {
    match factor(a) {
        Ok(factors) => Ok(factors.determinant()),
        Err(LinAlgError::Singular { .. }) => Ok(0.0),
        Err(e) => Err(e),
    }
}

/// Inverse via LU solve against the identity.
pub fn invert(a: &Matrix<f64>) -> Result<Matrix<f64>, LinAlgError> {
    factor(a)?.solve_matrix(&identity(a.nrows()))
}

fn swap_rows(mat: &mut Matrix<f64>, a: usize, b: usize) {
    for col in 0..mat.ncols() {
        let tmp = mat[(a, col)];
        mat[(a, col)] = mat[(b, col)];
        mat[(b, col)] = tmp;
    }
}
