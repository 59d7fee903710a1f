//! Geometry error types

use thiserror::Error;

/// Error type for geometry construction and queries
#[derive(Debug, Clone, Error)]
pub enum GeometryError {
    #[error("{kind} needs at least {needed} coordinates, got {got}")]
    TooFewCoordinates {
        kind: &'static str,
        needed: usize,
        got: usize,
    },

    #[error("non-finite coordinate at index {0}")]
    NonFiniteCoordinate(usize),

    #[error("radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),
}

/// Result type for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;
