//! Numeric tolerances shared by the decomposition core.
//!
//! These are the defaults behind `sigma_math::Tolerances`; call sites
//! read them from there instead of repeating the literals.

use crate::Scalar;

/// Off-diagonal magnitude of AᵗA below which the Gram matrix is treated as diagonal.
pub const OFF_DIAGONAL_TOLERANCE: Scalar = 1.0e-10;

/// Singular values at or below this are treated as zero.
pub const SINGULAR_VALUE_TOLERANCE: Scalar = 1.0e-9;

/// Tolerance for unit-length and perpendicularity checks on U and V.
pub const ORTHOGONALITY_TOLERANCE: Scalar = 1.0e-9;

/// Per-entry tolerance for `reconstruct(decompose(A)) ≈ A`.
pub const RECONSTRUCTION_TOLERANCE: Scalar = 1.0e-6;
