//! 2D Vector Geometry Model
//!
//! This crate contains the geometry data model used by the reshape editor core:
//! - Geometry: closed variant set of editable shapes (polygon, line string, circle, box)
//! - Extent: axis-aligned bounding box
//! - Similarity transforms (uniform scale and rotation about an origin)

mod error;
mod extent;
mod geometry;

pub use error::*;
pub use extent::*;
pub use geometry::*;
