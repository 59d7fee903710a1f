//! Editable geometry variants
//!
//! A closed set of shape kinds the modify tooling knows how to reshape.
//! Polygons carry their outer ring with an explicit closing duplicate of the
//! first vertex; `ring_coordinates` strips it so each vertex is counted once.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::{Extent, GeometryError, GeometryResult};

/// A 2D vector geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// A closed polygon (outer ring only, last coordinate repeats the first)
    Polygon(Vec<DVec2>),

    /// An open polyline with at least two coordinates
    LineString(Vec<DVec2>),

    /// A circle, exposing only its bounding box to the modify tooling
    Circle {
        /// Center of the circle
        center: DVec2,
        /// Radius, finite and non-negative
        radius: f64,
    },

    /// An axis-aligned box; rotation turns it into a `Polygon`
    Rectangle(Extent),
}

impl Geometry {
    /// Create a polygon from a ring of vertices
    ///
    /// Accepts the ring either open or closed and normalizes it to the closed
    /// form. At least three vertices are required (closing duplicate not
    /// counted).
    pub fn polygon(mut ring: Vec<DVec2>) -> GeometryResult<Self> {
        check_finite(&ring)?;
        // a fully collapsed ring like [p, p, p] is a valid degenerate polygon,
        // so a matching endpoint only counts as the closing duplicate when
        // stripping it still leaves three vertices
        let closed = ring.len() >= 4 && ring.first() == ring.last();
        let vertex_count = if closed { ring.len() - 1 } else { ring.len() };
        if vertex_count < 3 {
            return Err(GeometryError::TooFewCoordinates {
                kind: "polygon",
                needed: 3,
                got: vertex_count,
            });
        }
        if !closed {
            ring.push(ring[0]);
        }
        Ok(Geometry::Polygon(ring))
    }

    /// Create a line string from an ordered coordinate list
    pub fn line_string(coordinates: Vec<DVec2>) -> GeometryResult<Self> {
        check_finite(&coordinates)?;
        if coordinates.len() < 2 {
            return Err(GeometryError::TooFewCoordinates {
                kind: "line string",
                needed: 2,
                got: coordinates.len(),
            });
        }
        Ok(Geometry::LineString(coordinates))
    }

    /// Create a circle
    pub fn circle(center: DVec2, radius: f64) -> GeometryResult<Self> {
        if !center.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate(0));
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Geometry::Circle { center, radius })
    }

    /// Create an axis-aligned box from two opposite corners
    pub fn rectangle(a: DVec2, b: DVec2) -> GeometryResult<Self> {
        if !a.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate(0));
        }
        if !b.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate(1));
        }
        Ok(Geometry::Rectangle(Extent::from_corners(a, b)))
    }

    /// Get the type name of this geometry
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Polygon(_) => "Polygon",
            Geometry::LineString(_) => "LineString",
            Geometry::Circle { .. } => "Circle",
            Geometry::Rectangle(_) => "Rectangle",
        }
    }

    /// Ring vertices with the closing duplicate stripped, if this is a polygon
    pub fn ring_coordinates(&self) -> Option<&[DVec2]> {
        match self {
            Geometry::Polygon(ring) => {
                if ring.len() >= 2 && ring.first() == ring.last() {
                    Some(&ring[..ring.len() - 1])
                } else {
                    // tolerate rings built without the closing duplicate
                    Some(ring)
                }
            }
            _ => None,
        }
    }

    /// Ordered coordinates, if this is a line string
    pub fn linear_coordinates(&self) -> Option<&[DVec2]> {
        match self {
            Geometry::LineString(coordinates) => Some(coordinates),
            _ => None,
        }
    }

    /// Bounding box of the geometry
    ///
    /// Returns `None` for a polygon or line string without coordinates.
    pub fn extent(&self) -> Option<Extent> {
        match self {
            Geometry::Polygon(ring) => Extent::from_points(ring.iter().copied()),
            Geometry::LineString(coordinates) => Extent::from_points(coordinates.iter().copied()),
            Geometry::Circle { center, radius } => Some(Extent::new(
                *center - DVec2::splat(*radius),
                *center + DVec2::splat(*radius),
            )),
            Geometry::Rectangle(extent) => Some(*extent),
        }
    }

    /// Point at `fraction` of the arc length along a line string
    ///
    /// The fraction is clamped to `[0, 1]`. A zero-length line yields its
    /// first coordinate. Returns `None` for non-linear geometries.
    pub fn coordinate_at(&self, fraction: f64) -> Option<DVec2> {
        let coordinates = self.linear_coordinates()?;
        let first = *coordinates.first()?;
        let fraction = fraction.clamp(0.0, 1.0);

        let total: f64 = coordinates
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum();
        if total == 0.0 {
            return Some(first);
        }

        let mut remaining = fraction * total;
        for pair in coordinates.windows(2) {
            let segment = pair[0].distance(pair[1]);
            if remaining <= segment && segment > 0.0 {
                return Some(pair[0].lerp(pair[1], remaining / segment));
            }
            remaining -= segment;
        }
        coordinates.last().copied()
    }

    /// Uniformly scale the geometry about `origin`
    ///
    /// `factor` must be non-negative; the modify session only ever produces
    /// non-negative factors (it is a ratio of two radii).
    pub fn scale_about(&mut self, factor: f64, origin: DVec2) {
        match self {
            Geometry::Polygon(ring) => {
                for point in ring {
                    *point = origin + (*point - origin) * factor;
                }
            }
            Geometry::LineString(coordinates) => {
                for point in coordinates {
                    *point = origin + (*point - origin) * factor;
                }
            }
            Geometry::Circle { center, radius } => {
                *center = origin + (*center - origin) * factor;
                *radius *= factor;
            }
            Geometry::Rectangle(extent) => {
                let min = origin + (extent.min - origin) * factor;
                let max = origin + (extent.max - origin) * factor;
                *extent = Extent::from_corners(min, max);
            }
        }
    }

    /// Rotate the geometry about `origin` by `angle` radians
    ///
    /// A rectangle loses its axis alignment and is replaced by the polygon of
    /// its rotated corners (a zero angle is a no-op and keeps the variant).
    pub fn rotate_about(&mut self, angle: f64, origin: DVec2) {
        if angle == 0.0 {
            return;
        }
        let rotor = DVec2::from_angle(angle);
        match self {
            Geometry::Polygon(ring) => {
                for point in ring {
                    *point = origin + rotor.rotate(*point - origin);
                }
            }
            Geometry::LineString(coordinates) => {
                for point in coordinates {
                    *point = origin + rotor.rotate(*point - origin);
                }
            }
            Geometry::Circle { center, .. } => {
                *center = origin + rotor.rotate(*center - origin);
            }
            Geometry::Rectangle(extent) => {
                let mut ring: Vec<DVec2> = extent
                    .corners()
                    .iter()
                    .map(|&corner| origin + rotor.rotate(corner - origin))
                    .collect();
                ring.push(ring[0]);
                *self = Geometry::Polygon(ring);
            }
        }
    }

    /// Translate the geometry by `delta`
    pub fn translate(&mut self, delta: DVec2) {
        match self {
            Geometry::Polygon(ring) => {
                for point in ring {
                    *point += delta;
                }
            }
            Geometry::LineString(coordinates) => {
                for point in coordinates {
                    *point += delta;
                }
            }
            Geometry::Circle { center, .. } => *center += delta,
            Geometry::Rectangle(extent) => {
                extent.min += delta;
                extent.max += delta;
            }
        }
    }

    /// Check that every coordinate of the geometry is finite
    pub fn is_finite(&self) -> bool {
        match self {
            Geometry::Polygon(ring) => ring.iter().all(|p| p.is_finite()),
            Geometry::LineString(coordinates) => coordinates.iter().all(|p| p.is_finite()),
            Geometry::Circle { center, radius } => center.is_finite() && radius.is_finite(),
            Geometry::Rectangle(extent) => extent.is_finite(),
        }
    }
}

fn check_finite(coordinates: &[DVec2]) -> GeometryResult<()> {
    if let Some(index) = coordinates.iter().position(|p| !p.is_finite()) {
        return Err(GeometryError::NonFiniteCoordinate(index));
    }
    Ok(())
}
