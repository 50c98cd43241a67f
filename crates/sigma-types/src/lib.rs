//! # sigma-types
//!
//! Shared scalar type, numeric tolerances, and error types
//! for the sigma 2×2 decomposition workspace.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that the math core and the CLI share.

pub mod constants;
pub mod error;
pub mod scalar;

pub use error::{SigmaError, SigmaResult};
pub use scalar::Scalar;
