//! Decomposition tolerances.
//!
//! Thresholds that select the degenerate branches of the closed-form SVD:
//! when the Gram matrix counts as diagonal, and when a singular value
//! counts as zero.

use serde::{Deserialize, Serialize};
use sigma_types::constants::{OFF_DIAGONAL_TOLERANCE, SINGULAR_VALUE_TOLERANCE};
use sigma_types::{Scalar, SigmaError, SigmaResult};

/// Configuration for the decomposer's degeneracy tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// |f| of AᵗA = [[e, f], [f, g]] below which AᵗA is treated as diagonal.
    pub off_diagonal: Scalar,

    /// Singular values at or below this are treated as zero.
    pub singular_value: Scalar,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            off_diagonal: OFF_DIAGONAL_TOLERANCE,
            singular_value: SINGULAR_VALUE_TOLERANCE,
        }
    }
}

impl Tolerances {
    /// Tighter thresholds: fewer inputs are routed to the degenerate branches.
    pub fn strict() -> Self {
        Self {
            off_diagonal: 1e-14,
            singular_value: 1e-12,
        }
    }

    /// Looser thresholds for inputs that carry visible noise (hand-edited entries).
    pub fn loose() -> Self {
        Self {
            off_diagonal: 1e-6,
            singular_value: 1e-6,
        }
    }

    /// Both thresholds must be finite and strictly positive.
    pub fn validate(&self) -> SigmaResult<()> {
        for (name, value) in [
            ("off_diagonal", self.off_diagonal),
            ("singular_value", self.singular_value),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SigmaError::InvalidTolerance(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}
