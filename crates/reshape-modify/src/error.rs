//! Modify error types

use thiserror::Error;
use uuid::Uuid;

/// Error type for pivot analysis and modify sessions
#[derive(Debug, Clone, Error)]
pub enum ModifyError {
    #[error("geometry has no coordinates to derive a center from")]
    EmptyGeometry,

    #[error("geometry contains non-finite coordinates")]
    NonFiniteGeometry,

    #[error("no modify session for feature {0}")]
    SessionNotFound(Uuid),
}

/// Result type for modify operations
pub type ModifyResult<T> = Result<T, ModifyError>;
