//! Scale/Rotate Vertex Editing Core
//!
//! Reinterprets a single-vertex drag as a uniform scale plus rotation of the
//! whole geometry about a computed pivot:
//! - Pivot analysis: stable center and deadband radius for a geometry
//! - ModifySession: per-drag state that derives each frame from the original snapshot
//! - SessionMap: sessions keyed by the id of the feature being edited

mod error;
mod pivot;
mod registry;
mod session;

pub use error::*;
pub use pivot::*;
pub use registry::*;
pub use session::*;
