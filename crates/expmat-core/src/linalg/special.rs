//! Constructors for frequently used matrices and vectors.
use num_traits::{One, Zero};
use rand::Rng;

use crate::math::{Matrix, Vector};

pub fn zeros_matrix<T: Clone + Zero>(rows: usize, cols: usize) -> Matrix<T> {
    Matrix::from_elem(rows, cols, T::zero())
}

pub fn ones_matrix<T: Clone + One>(rows: usize, cols: usize) -> Matrix<T> {
    Matrix::from_elem(rows, cols, T::one())
}

/// Square identity matrix of dimension `n`.
pub fn identity<T: Clone + Zero + One>(n: usize) -> Matrix<T> {
    let mut mat = zeros_matrix(n, n);
    for i in 0..n {
        mat[(i, i)] = T::one();
    }
    mat
}

/// Square matrix with `values` placed on the diagonal shifted by `offset`
/// (positive above the main diagonal, negative below).
pub fn diag<T: Clone + Zero>(values: &Vector<T>, offset: i64) -> Matrix<T> {
    let shift = offset.unsigned_abs() as usize;
    let dim = values.len() + shift;
    let mut mat = zeros_matrix(dim, dim);
    for (i, value) in values.iter().enumerate() {
        if offset < 0 {
            mat[(i + shift, i)] = value.clone();
        } else {
            mat[(i, i + shift)] = value.clone();
        }
    }
    mat
}

/// `n` evenly spaced samples from `a` to `b` inclusive.
pub fn linspace(a: f64, b: f64, n: usize) -> Vector<f64> {
    if n == 0 {
        return Vector::from_vec(Vec::new());
    }
    if n == 1 {
        return Vector::from_vec(vec![a]);
    }
    let step = (b - a) / (n - 1) as f64;
    (0..n).map(|i| a + step * i as f64).collect()
}

/// Matrix with entries drawn uniformly from [-1, 1).
pub fn random_matrix<R: Rng>(rng: &mut R, rows: usize, cols: usize) -> Matrix<f64> {
    let mut mat = zeros_matrix(rows, cols);
    for value in mat.as_mut_slice() {
        *value = rng.gen_range(-1.0..1.0);
    }
    mat
}

/// Vector with entries drawn uniformly from [-1, 1).
pub fn random_vector<R: Rng>(rng: &mut R, len: usize) -> Vector<f64> {
    let mut vec = Vector::zeros(len);
    for value in vec.as_mut_slice() {
        *value = rng.gen_range(-1.0..1.0);
    }
    vec
}
