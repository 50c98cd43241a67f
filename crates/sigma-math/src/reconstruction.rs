//! Reconstruction of a matrix from its SVD factors.

use crate::decomposition::SingularValues;
use crate::matrix2::Matrix2x2;

/// A = U · diag(S) · Vᵗ.
///
/// Pure algebra: `u` and `vt` are not required to be orthogonal and `s`
/// is not required to be sorted, so callers can edit any factor on its own
/// and recombine.
#[inline]
pub fn reconstruct(u: &Matrix2x2, s: &SingularValues, vt: &Matrix2x2) -> Matrix2x2 {
    u.mul_mat(&s.as_matrix()).mul_mat(vt)
}
