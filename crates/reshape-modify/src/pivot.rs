//! Pivot analysis
//!
//! Computes the reference center and deadband radius a modify session scales
//! and rotates about. Pure and deterministic; run once per drag on the
//! original geometry.

use glam::DVec2;
use reshape_geom::Geometry;
use serde::{Deserialize, Serialize};

use crate::{ModifyError, ModifyResult};

/// Divisor turning the distance of the farthest vertex into the deadband radius
///
/// Empirical constant: large enough to suppress jitter near the pivot, small
/// enough not to disable transforms on small shapes. Changing it changes
/// interaction feel, so treat it as a product tunable.
pub const DEADBAND_DIVISOR: f64 = 3.0;

/// Pivot data for one modify session, immutable once computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotInfo {
    /// Point the session scales and rotates about
    pub center: DVec2,
    /// Deadband radius: anchors at most this far from the center never transform
    pub min_radius: f64,
    /// Vertices the center was derived from (absent for bbox-only geometries)
    pub reference_coordinates: Option<Vec<DVec2>>,
    /// Squared distance of each reference coordinate to the center
    pub sq_distances: Option<Vec<f64>>,
}

impl PivotInfo {
    /// Reference coordinates far enough from the center to drive a transform
    ///
    /// Hosts typically render these as the grabbable handles; vertices inside
    /// the deadband are omitted because dragging them leaves the shape frozen.
    pub fn transform_handles(&self) -> Vec<DVec2> {
        let (Some(coordinates), Some(sq_distances)) =
            (&self.reference_coordinates, &self.sq_distances)
        else {
            return Vec::new();
        };
        let radius_sq = self.min_radius * self.min_radius;
        coordinates
            .iter()
            .zip(sq_distances)
            .filter(|&(_, &sq)| sq > radius_sq)
            .map(|(coordinate, _)| *coordinate)
            .collect()
    }
}

/// Compute the pivot for a geometry
///
/// Center selection by capability:
/// - polygon: arithmetic mean of the ring vertices (closing duplicate excluded)
/// - line string: point at fraction 0.5 of the arc length
/// - anything else: midpoint of the bounding box
///
/// A geometry whose vertices all coincide gets `min_radius = 0` and will simply
/// never transform; that is not an error. A geometry with no coordinates or
/// non-finite coordinates is rejected here so no NaN ever reaches a session.
pub fn analyze(geometry: &Geometry) -> ModifyResult<PivotInfo> {
    if !geometry.is_finite() {
        return Err(ModifyError::NonFiniteGeometry);
    }

    if let Some(ring) = geometry.ring_coordinates() {
        if ring.is_empty() {
            return Err(ModifyError::EmptyGeometry);
        }
        let sum = ring.iter().fold(DVec2::ZERO, |sum, &point| sum + point);
        from_reference(sum / ring.len() as f64, ring.to_vec())
    } else if let Some(coordinates) = geometry.linear_coordinates() {
        let center = geometry
            .coordinate_at(0.5)
            .ok_or(ModifyError::EmptyGeometry)?;
        from_reference(center, coordinates.to_vec())
    } else {
        // bbox-only fallback, deadband sized from the larger extent side
        let extent = geometry.extent().ok_or(ModifyError::EmptyGeometry)?;
        Ok(PivotInfo {
            center: extent.center(),
            min_radius: extent.width().max(extent.height()) / DEADBAND_DIVISOR,
            reference_coordinates: None,
            sq_distances: None,
        })
    }
}

fn from_reference(center: DVec2, coordinates: Vec<DVec2>) -> ModifyResult<PivotInfo> {
    if !center.is_finite() {
        return Err(ModifyError::NonFiniteGeometry);
    }
    let sq_distances: Vec<f64> = coordinates
        .iter()
        .map(|&coordinate| coordinate.distance_squared(center))
        .collect();
    let max_sq = sq_distances.iter().copied().fold(0.0, f64::max);
    Ok(PivotInfo {
        center,
        min_radius: max_sq.sqrt() / DEADBAND_DIVISOR,
        reference_coordinates: Some(coordinates),
        sq_distances: Some(sq_distances),
    })
}
