//! Closed-form singular value decomposition of a 2×2 matrix.
//!
//! A = U · diag(s0, s1) · Vᵗ, derived from the eigen-decomposition of the
//! symmetric Gram matrix AᵗA. No iteration: the 2×2 symmetric eigenproblem
//! has an exact solution, and the degenerate configurations (diagonal Gram
//! matrix, vanishing singular values) are handled by explicit branches
//! recorded in [`DecompositionCase`].

use serde::{Deserialize, Serialize};
use sigma_types::Scalar;

use crate::matrix2::Matrix2x2;
use crate::reconstruction::reconstruct;
use crate::tolerance::Tolerances;
use crate::Point2;

/// Singular values in descending order: `s0 ≥ s1 ≥ 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SingularValues {
    pub s0: Scalar,
    pub s1: Scalar,
}

impl SingularValues {
    #[inline]
    pub const fn new(s0: Scalar, s1: Scalar) -> Self {
        Self { s0, s1 }
    }

    /// Σ as a 2×2 diagonal matrix.
    #[inline]
    pub fn as_matrix(&self) -> Matrix2x2 {
        Matrix2x2::diagonal(self.s0, self.s1)
    }

    /// `s0 ≥ s1 ≥ 0`.
    #[inline]
    pub fn is_descending(&self) -> bool {
        self.s0 >= self.s1 && self.s1 >= 0.0
    }
}

impl From<(Scalar, Scalar)> for SingularValues {
    fn from((s0, s1): (Scalar, Scalar)) -> Self {
        Self { s0, s1 }
    }
}

/// How the right singular vectors (columns of V) were chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RightBasis {
    /// AᵗA has a non-negligible off-diagonal term; V comes from its eigenvector.
    Generic,
    /// AᵗA is diagonal with e ≥ g (including the isotropic tie): V = I.
    DiagonalMajorX,
    /// AᵗA is diagonal with e < g: V = [[0, −1], [1, 0]].
    DiagonalMajorY,
}

/// How the left singular vectors (columns of U) were chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeftBasis {
    /// Both singular values are non-zero; both columns follow from A·V.
    Generic,
    /// s1 ≈ 0: u1 is the 90° rotation of u0.
    SecondSingularZero,
    /// s0 ≈ 0 (and hence s1 ≈ 0): U = I.
    BothSingularZero,
}

/// The branches taken by one decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecompositionCase {
    pub right: RightBasis,
    pub left: LeftBasis,
}

impl DecompositionCase {
    /// Neither basis needed a fallback.
    pub fn is_generic(&self) -> bool {
        self.right == RightBasis::Generic && self.left == LeftBasis::Generic
    }
}

/// Result of a 2×2 SVD: A = U · diag(S) · Vᵗ.
///
/// `vt` is always `v.transpose()`; both are carried so callers can use
/// whichever orientation they need.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SvdResult {
    /// Left singular vectors (columns), orthogonal.
    pub u: Matrix2x2,
    /// Singular values, descending.
    pub s: SingularValues,
    /// Right singular vectors (columns), orthogonal.
    pub v: Matrix2x2,
    /// Transpose of `v`.
    pub vt: Matrix2x2,
    /// Which degenerate branches produced `u` and `v`.
    pub case: DecompositionCase,
}

impl SvdResult {
    /// Assembles a result, deriving `vt` from `v`.
    pub fn new(u: Matrix2x2, s: SingularValues, v: Matrix2x2, case: DecompositionCase) -> Self {
        Self {
            u,
            s,
            v,
            vt: v.transpose(),
            case,
        }
    }

    /// U · diag(S) · Vᵗ.
    pub fn reconstruct(&self) -> Matrix2x2 {
        reconstruct(&self.u, &self.s, &self.vt)
    }
}

/// Gram matrix AᵗA = [[e, f], [f, g]], returned as `[e, f, g]`.
#[inline]
pub fn gram(a: &Matrix2x2) -> [Scalar; 3] {
    let c0 = a.col(0);
    let c1 = a.col(1);
    [c0.dot(c0), c0.dot(c1), c1.dot(c1)]
}

/// Decompose `a` with the default [`Tolerances`].
pub fn decompose(a: &Matrix2x2) -> SvdResult {
    decompose_with(a, &Tolerances::default())
}

/// Decompose `a` into U · diag(s0, s1) · Vᵗ.
///
/// 1. Form AᵗA = [[e, f], [f, g]] of `a` scaled to unit largest entry.
/// 2. Its eigenvalues λ0 ≥ λ1 ≥ 0 in closed form; s = scale · sqrt(λ).
/// 3. V from the eigenvector of λ0 and its 90° rotation (det V = +1).
/// 4. U from A·V / s, with fallbacks when a singular value vanishes.
///
/// The off-diagonal tolerance applies to the scaled Gram matrix, so the
/// diagonal test does not depend on the magnitude of `a`. Singular value
/// tolerances apply to the unscaled values.
///
/// Total over finite input. Non-finite entries propagate NaN without panicking.
pub fn decompose_with(a: &Matrix2x2, tol: &Tolerances) -> SvdResult {
    let scale = match a.max_abs() {
        m if m > 0.0 && m.is_finite() => m,
        _ => 1.0,
    };
    let unit = Matrix2x2::from_rows(a.rows.map(|row| row.map(|v| v / scale)));
    let [e, f, g] = gram(&unit);

    let disc = ((e - g) * (e - g) + 4.0 * f * f).sqrt();
    let lambda0 = (0.5 * (e + g + disc)).max(0.0);
    let lambda1 = (0.5 * (e + g - disc)).max(0.0);

    let s0 = scale * lambda0.sqrt();
    // λ0·λ1 = det(AᵗA) = det(A)², so s1 = |det A| / s0 without the
    // cancellation in e + g − disc.
    let s1 = if s0 > tol.singular_value {
        (a.determinant().abs() / s0).min(s0)
    } else {
        (scale * lambda1.sqrt()).min(s0)
    };

    let (v0, v1, right) = right_basis(e, f, g, lambda0, tol);
    let (u0, u1, left) = left_basis(a, v0, v1, s0, s1, tol);

    let case = DecompositionCase { right, left };
    if !case.is_generic() {
        tracing::debug!(?case, s0, s1, "degenerate 2x2 decomposition branch");
    }

    SvdResult::new(
        Matrix2x2::from_cols(u0, u1),
        SingularValues::new(s0, s1),
        Matrix2x2::from_cols(v0, v1),
        case,
    )
}

fn right_basis(
    e: Scalar,
    f: Scalar,
    g: Scalar,
    lambda0: Scalar,
    tol: &Tolerances,
) -> (Point2, Point2, RightBasis) {
    if f.abs() < tol.off_diagonal {
        return if e >= g {
            (Point2::X, Point2::Y, RightBasis::DiagonalMajorX)
        } else {
            (Point2::Y, Point2::NEG_X, RightBasis::DiagonalMajorY)
        };
    }

    // Either row of (AᵗA − λ0·I) yields the eigenvector; take the
    // better-conditioned one. The sign(f) factor keeps both pointing
    // the same way as (f, λ0 − e).
    let from_first_row = Point2::new(f, lambda0 - e);
    let from_second_row = Point2::new(lambda0 - g, f) * f.signum();
    let v0 = if from_first_row.length_squared() >= from_second_row.length_squared() {
        from_first_row
    } else {
        from_second_row
    }
    .normalize();

    (v0, v0.perp(), RightBasis::Generic)
}

fn left_basis(
    a: &Matrix2x2,
    v0: Point2,
    v1: Point2,
    s0: Scalar,
    s1: Scalar,
    tol: &Tolerances,
) -> (Point2, Point2, LeftBasis) {
    if s0 <= tol.singular_value {
        return (Point2::X, Point2::Y, LeftBasis::BothSingularZero);
    }

    let u0 = a.mul_point(v0) / s0;
    if s1 <= tol.singular_value {
        return (u0, u0.perp(), LeftBasis::SecondSingularZero);
    }

    let u1 = a.mul_point(v1) / s1;
    (u0, u1, LeftBasis::Generic)
}
