//! 2×2 matrix value type.
//!
//! Stored row-major as `[[a, b], [c, d]]`, the layout callers edit
//! entries in. Every operation returns a new value; nothing aliases.

use serde::{Deserialize, Serialize};
use sigma_types::{Scalar, SigmaError, SigmaResult};

use crate::Point2;

/// A 2×2 row-major matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix2x2 {
    /// `rows[row][col]`.
    pub rows: [[Scalar; 2]; 2],
}

impl Matrix2x2 {
    /// The zero matrix.
    pub const ZERO: Self = Self {
        rows: [[0.0, 0.0], [0.0, 0.0]],
    };

    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [[1.0, 0.0], [0.0, 1.0]],
    };

    /// Creates `[[a, b], [c, d]]`.
    #[inline]
    pub const fn new(a: Scalar, b: Scalar, c: Scalar, d: Scalar) -> Self {
        Self {
            rows: [[a, b], [c, d]],
        }
    }

    #[inline]
    pub const fn from_rows(rows: [[Scalar; 2]; 2]) -> Self {
        Self { rows }
    }

    /// Creates a matrix whose columns are `col0` and `col1`.
    #[inline]
    pub fn from_cols(col0: Point2, col1: Point2) -> Self {
        Self::new(col0.x, col1.x, col0.y, col1.y)
    }

    /// `diag(s0, s1)`.
    #[inline]
    pub const fn diagonal(s0: Scalar, s1: Scalar) -> Self {
        Self::new(s0, 0.0, 0.0, s1)
    }

    /// Entry at `(row, col)`. Panics if either index is outside `{0, 1}`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Scalar {
        self.rows[row][col]
    }

    #[inline]
    pub fn row(&self, i: usize) -> Point2 {
        Point2::new(self.rows[i][0], self.rows[i][1])
    }

    #[inline]
    pub fn col(&self, j: usize) -> Point2 {
        Point2::new(self.rows[0][j], self.rows[1][j])
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        let [[a, b], [c, d]] = self.rows;
        Self::new(a, c, b, d)
    }

    #[inline]
    pub fn determinant(&self) -> Scalar {
        let [[a, b], [c, d]] = self.rows;
        a * d - b * c
    }

    /// Matrix product `self · rhs`.
    #[inline]
    pub fn mul_mat(&self, rhs: &Self) -> Self {
        let x = &self.rows;
        let y = &rhs.rows;
        let mut out = [[0.0; 2]; 2];
        for (i, out_row) in out.iter_mut().enumerate() {
            for (j, entry) in out_row.iter_mut().enumerate() {
                *entry = x[i][0] * y[0][j] + x[i][1] * y[1][j];
            }
        }
        Self { rows: out }
    }

    /// Linear map `self · p`.
    #[inline]
    pub fn mul_point(&self, p: Point2) -> Point2 {
        let [[a, b], [c, d]] = self.rows;
        Point2::new(a * p.x + b * p.y, c * p.x + d * p.y)
    }

    /// Frobenius norm squared: sum of the squared entries.
    #[inline]
    pub fn frobenius_norm_sq(&self) -> Scalar {
        self.rows.iter().flatten().map(|v| v * v).sum()
    }

    /// Largest absolute entry. NaN entries are skipped.
    pub fn max_abs(&self) -> Scalar {
        self.rows.iter().flatten().map(|v| v.abs()).fold(0.0, Scalar::max)
    }

    /// Largest absolute entry-wise difference to `other`.
    pub fn max_abs_diff(&self, other: &Self) -> Scalar {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, Scalar::max)
    }

    /// Fails with the position of the first NaN or infinite entry.
    ///
    /// The decomposition itself does not validate its input; callers that
    /// accept untrusted entries run this first.
    pub fn ensure_finite(&self) -> SigmaResult<()> {
        for (row, entries) in self.rows.iter().enumerate() {
            for (col, &value) in entries.iter().enumerate() {
                if !value.is_finite() {
                    return Err(SigmaError::NonFinite { row, col, value });
                }
            }
        }
        Ok(())
    }

    /// True when both columns are unit length and perpendicular within `tol`.
    pub fn is_orthogonal(&self, tol: Scalar) -> bool {
        let c0 = self.col(0);
        let c1 = self.col(1);
        (c0.length() - 1.0).abs() <= tol
            && (c1.length() - 1.0).abs() <= tol
            && c0.dot(c1).abs() <= tol
    }
}

impl std::ops::Mul for Matrix2x2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl std::ops::Mul<Point2> for Matrix2x2 {
    type Output = Point2;
    #[inline]
    fn mul(self, rhs: Point2) -> Point2 {
        self.mul_point(rhs)
    }
}

impl std::ops::Mul<Scalar> for Matrix2x2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Scalar) -> Self {
        let [[a, b], [c, d]] = self.rows;
        Self::new(a * rhs, b * rhs, c * rhs, d * rhs)
    }
}

