//! Axis-aligned bounding box

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in map coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Lower-left corner
    pub min: DVec2,
    /// Upper-right corner
    pub max: DVec2,
}

impl Extent {
    /// Create an extent from already-ordered corners
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Create an extent from two arbitrary opposite corners
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest extent containing all the given points
    ///
    /// Returns `None` if the iterator yields no points.
    pub fn from_points(points: impl IntoIterator<Item = DVec2>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut extent = Self::new(first, first);
        for point in points {
            extent.min = extent.min.min(point);
            extent.max = extent.max.max(point);
        }
        Some(extent)
    }

    /// Width of the extent
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the extent
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Midpoint of the extent
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// The four corners in counter-clockwise order, starting at `min`
    pub fn corners(&self) -> [DVec2; 4] {
        [
            self.min,
            DVec2::new(self.max.x, self.min.y),
            self.max,
            DVec2::new(self.min.x, self.max.y),
        ]
    }

    /// Check that both corners are finite
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_orders_coordinates() {
        let extent = Extent::from_corners(DVec2::new(5.0, -1.0), DVec2::new(-2.0, 3.0));
        assert_eq!(extent.min, DVec2::new(-2.0, -1.0));
        assert_eq!(extent.max, DVec2::new(5.0, 3.0));
    }

    #[test]
    fn test_from_points() {
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(4.0, -2.0),
            DVec2::new(1.0, 7.0),
        ];
        let extent = Extent::from_points(points).unwrap();
        assert_eq!(extent.min, DVec2::new(0.0, -2.0));
        assert_eq!(extent.max, DVec2::new(4.0, 7.0));
        assert_eq!(extent.width(), 4.0);
        assert_eq!(extent.height(), 9.0);

        assert!(Extent::from_points([]).is_none());
    }

    #[test]
    fn test_center() {
        let extent = Extent::new(DVec2::new(0.0, 0.0), DVec2::new(4.0, 2.0));
        assert_eq!(extent.center(), DVec2::new(2.0, 1.0));
    }
}
