//! Error types for Groebner cone computations

use thiserror::Error;
use tropix_math::MathError;

/// Violations of the `flip_cone` input contract
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlipInputError {
    /// Point or normal live in a different space than the cone
    #[error("dimension mismatch: cone has ambient dimension {expected}, got {found}")]
    DimensionMismatch {
        /// Ambient dimension of the cone
        expected: usize,
        /// Length of the offending vector
        found: usize,
    },
    /// The facet point is outside the cone
    #[error("point is not in the cone")]
    PointNotInCone,
    /// The facet point is in the relative interior, not on the boundary
    #[error("point lies in the relative interior of the cone")]
    PointInRelativeInterior,
    /// The face containing the point is not a facet
    #[error("point lies on a face of dimension {face_dimension}, the cone has dimension {cone_dimension}")]
    PointNotOnFacet {
        /// Dimension of the face containing the point
        face_dimension: usize,
        /// Dimension of the cone
        cone_dimension: usize,
    },
    /// The normal is not orthogonal to the facet
    #[error("normal vector is not orthogonal to the facet")]
    NormalNotOrthogonalToFacet,
    /// The normal does not point out of the cone
    #[error("normal vector does not point outwards")]
    NormalNotOutward,
}

/// Error type for tropix-core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TropicalError {
    /// Error from the arithmetic layer
    #[error(transparent)]
    Math(#[from] MathError),
    /// Polynomial text could not be parsed
    #[error("parse error at byte {position}: {message}")]
    Parse {
        /// Byte offset into the input
        position: usize,
        /// What went wrong
        message: String,
    },
    /// A ring without variables
    #[error("polynomial ring has no variables")]
    EmptyRing,
    /// A variable name used twice in one ring
    #[error("duplicate variable: {0}")]
    DuplicateVariable(String),
    /// A name that is not a ring variable
    #[error("unknown variable: {0}")]
    UnknownVariable(String),
    /// A generator that is not homogeneous
    #[error("generator is not homogeneous: {0}")]
    NotHomogeneous(String),
    /// An ideal without non-zero generators
    #[error("ideal has no non-zero generators")]
    EmptyIdeal,
    /// Operation on a placeholder cone
    #[error("operation on an empty Groebner cone")]
    EmptyCone,
    /// Invalid facet point or normal passed to a flip
    #[error("invalid flip input: {0}")]
    FlipInput(#[from] FlipInputError),
    /// Traversal produced more cones than allowed
    #[error("traversal exceeded the limit of {0} cones")]
    TraversalLimitExceeded(usize),
}

/// Result type for tropix-core operations
pub type Result<T> = std::result::Result<T, TropicalError>;
