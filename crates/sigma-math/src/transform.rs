//! Applying linear maps to points.
//!
//! The visualization shows a shape at each stage of A = U · Σ · Vᵗ:
//! the input, after Vᵗ, after Σ·Vᵗ, and after the full product.

use serde::{Deserialize, Serialize};

use crate::decomposition::SvdResult;
use crate::matrix2::Matrix2x2;
use crate::Point2;

/// p' = A · p.
#[inline]
pub fn apply(a: &Matrix2x2, p: Point2) -> Point2 {
    a.mul_point(p)
}

/// Applies `a` to every point.
pub fn apply_all(a: &Matrix2x2, points: &[Point2]) -> Vec<Point2> {
    points.iter().map(|&p| apply(a, p)).collect()
}

/// A point set carried through each factor of an SVD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformStages {
    /// Input points.
    pub original: Vec<Point2>,
    /// Vᵗ · p.
    pub rotated: Vec<Point2>,
    /// Σ · Vᵗ · p.
    pub scaled: Vec<Point2>,
    /// U · Σ · Vᵗ · p, equal to A · p up to rounding.
    pub transformed: Vec<Point2>,
}

impl TransformStages {
    /// Pushes `points` through Vᵗ, then Σ, then U.
    pub fn compute(svd: &SvdResult, points: &[Point2]) -> Self {
        let rotated = apply_all(&svd.vt, points);
        let scaled = apply_all(&svd.s.as_matrix(), &rotated);
        let transformed = apply_all(&svd.u, &scaled);
        Self {
            original: points.to_vec(),
            rotated,
            scaled,
            transformed,
        }
    }
}

/// Corners of the unit square, counter-clockwise from the origin.
pub fn unit_square() -> [Point2; 4] {
    [Point2::ZERO, Point2::X, Point2::ONE, Point2::Y]
}
