//! Scalar type alias for the decomposition core.
//!
//! The degeneracy thresholds sit at 1e-9 and 1e-10, well below what
//! `f32` can resolve around unit magnitude, so the core runs in `f64`.

/// The floating-point type used for every matrix entry, singular value and angle.
pub type Scalar = f64;
