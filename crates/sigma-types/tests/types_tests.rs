//! Integration tests for sigma-types.

use sigma_types::constants::{
    OFF_DIAGONAL_TOLERANCE, ORTHOGONALITY_TOLERANCE, RECONSTRUCTION_TOLERANCE,
    SINGULAR_VALUE_TOLERANCE,
};
use sigma_types::{Scalar, SigmaError, SigmaResult};

// ─── Constant Tests ───────────────────────────────────────────

#[test]
fn tolerances_are_positive() {
    for tol in [
        OFF_DIAGONAL_TOLERANCE,
        SINGULAR_VALUE_TOLERANCE,
        ORTHOGONALITY_TOLERANCE,
        RECONSTRUCTION_TOLERANCE,
    ] {
        assert!(tol > 0.0);
    }
}

#[test]
fn off_diagonal_tighter_than_singular_value() {
    assert!(OFF_DIAGONAL_TOLERANCE < SINGULAR_VALUE_TOLERANCE);
}

#[test]
fn scalar_resolves_tolerances() {
    // 1 + tol must be distinguishable from 1 in the working precision.
    let one: Scalar = 1.0;
    assert!(one + SINGULAR_VALUE_TOLERANCE > one);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn non_finite_display() {
    let err = SigmaError::NonFinite {
        row: 1,
        col: 0,
        value: f64::NAN,
    };
    let msg = err.to_string();
    assert!(msg.contains("(1, 0)"));
    assert!(msg.contains("NaN"));
}

#[test]
fn invalid_tolerance_display() {
    let err = SigmaError::InvalidTolerance("off_diagonal must be positive".into());
    assert!(err.to_string().contains("off_diagonal"));
}

#[test]
fn io_error_converts() {
    fn read_missing() -> SigmaResult<()> {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "tolerances.toml");
        Err::<(), _>(io)?;
        Ok(())
    }
    let err = read_missing().unwrap_err();
    assert!(matches!(err, SigmaError::Io(_)));
    assert!(err.to_string().contains("tolerances.toml"));
}
