//! Numeric kernels over the dense container types.
//!
//! Free functions in the style of a BLAS-ish toolkit: constructors in
//! [`special`], elementwise helpers in [`arithmetic`], products in
//! [`mult`], factorization/solves in [`lu`], and the scaling-and-squaring
//! matrix exponential in [`expm`]. Shape mismatches between same-kind
//! operands are programming errors and assert; numeric failure modes
//! (singular pivots, non-square exponential input) are typed errors.
pub mod arithmetic;
pub mod compare;
pub mod expm;
pub mod lu;
pub mod mult;
pub mod special;

pub use arithmetic::{add_scaled, dot, inf_norm, norm, scale};
pub use compare::{close_matrix, close_scalar, close_vector, F64_ATOL, F64_RTOL};
pub use expm::expm;
pub use lu::{determinant, factor, invert, solve, LuFactors};
pub use mult::{matmul, matvec};
pub use special::{diag, identity, linspace, random_matrix, random_vector};
