//! Error type for exact lattice, cone and polynomial computations.

use thiserror::Error;

/// Errors raised by `tropix-math`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Two vectors, or a vector and a cone, live in different ambient spaces.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension required by the receiver.
        expected: usize,
        /// Dimension actually supplied.
        found: usize,
    },
    /// Groebner basis input without a non-zero generator.
    #[error("empty generator set")]
    EmptyGeneratorSet,
}

/// Result type for `tropix-math` operations.
pub type Result<T> = std::result::Result<T, MathError>;
