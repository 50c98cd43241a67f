//! # sigma-math
//!
//! Closed-form singular value decomposition of 2×2 real matrices.
//!
//! Provides:
//! - `Matrix2x2` value type (row-major) and `Point2` (re-exported `glam::DVec2`)
//! - Decomposition A = U · Σ · Vᵗ with explicit degenerate-branch tracking
//! - Reconstruction from (U, Σ, Vᵗ)
//! - Rotation matrix ↔ angle conversion
//! - Point transforms, including the per-factor stages of an SVD
//!
//! Every function is pure: no shared state, no allocation beyond the
//! returned values, safe to call from any thread.

pub mod decomposition;
pub mod matrix2;
pub mod reconstruction;
pub mod rotation;
pub mod tolerance;
pub mod transform;

pub use decomposition::{
    decompose, decompose_with, gram, DecompositionCase, LeftBasis, RightBasis, SingularValues,
    SvdResult,
};
pub use matrix2::Matrix2x2;
pub use reconstruction::reconstruct;
pub use rotation::{angle_of, angle_of_degrees, rotation_of, rotation_of_degrees};
pub use tolerance::Tolerances;
pub use transform::{apply, apply_all, unit_square, TransformStages};

/// 2D point / column vector. `glam`'s double-precision vector is the canonical type.
pub type Point2 = glam::DVec2;
