//! Conversion between pure rotation matrices and signed angles.
//!
//! Convention: R(θ) = [[cos θ, −sin θ], [sin θ, cos θ]], counter-clockwise
//! positive, angles in radians unless the function name says degrees.

use std::f64::consts::PI;

use sigma_types::Scalar;

use crate::matrix2::Matrix2x2;

/// Angle of a rotation matrix, in `(−π, π]`.
///
/// Reads only `r[1][0]` and `r[0][0]`; the other entries are ignored and
/// orthogonality is not checked. For a non-rotation the result is the
/// angle of the first column.
#[inline]
pub fn angle_of(r: &Matrix2x2) -> Scalar {
    let theta = r.get(1, 0).atan2(r.get(0, 0));
    // atan2(−0.0, x < 0) lands on −π, outside the half-open range.
    if theta == -PI {
        PI
    } else {
        theta
    }
}

/// Rotation matrix for `theta` radians. Defined for every real angle.
#[inline]
pub fn rotation_of(theta: Scalar) -> Matrix2x2 {
    let (sin, cos) = theta.sin_cos();
    Matrix2x2::new(cos, -sin, sin, cos)
}

/// [`angle_of`] in degrees, in `(−180, 180]`.
#[inline]
pub fn angle_of_degrees(r: &Matrix2x2) -> Scalar {
    angle_of(r).to_degrees()
}

/// [`rotation_of`] for an angle given in degrees.
#[inline]
pub fn rotation_of_degrees(degrees: Scalar) -> Matrix2x2 {
    rotation_of(degrees.to_radians())
}
