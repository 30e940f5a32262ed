//! Geographic bounding box for a decoded grid.

use serde::{Deserialize, Serialize};

/// A geographic bounding box in degrees.
///
/// Always normalized so that `min_lat <= max_lat` and `min_lon <= max_lon`,
/// regardless of the corner order in the source bytes. Coordinate
/// reconstruction must therefore not use these fields (it needs the raw
/// first corner, which the grid record keeps separately).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// Create a bounding box directly from already-ordered extents.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Build a normalized bounding box from two raw grid corners.
    pub fn from_corners(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Self {
        Self {
            min_lat: lat1.min(lat2),
            max_lat: lat1.max(lat2),
            min_lon: lon1.min(lon2),
            max_lon: lon1.max(lon2),
        }
    }

    /// Latitudinal extent in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Longitudinal extent in degrees.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Check whether a point falls inside (inclusive) this box.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_corners_normalizes_order() {
        // North-to-south grid: first corner is the northern edge
        let b = Bounds::from_corners(-31.0, 145.0, -44.0, 157.0);
        assert_eq!(b.min_lat, -44.0);
        assert_eq!(b.max_lat, -31.0);
        assert_eq!(b.min_lon, 145.0);
        assert_eq!(b.max_lon, 157.0);
    }

    #[test]
    fn contains_is_inclusive_at_edges() {
        let b = Bounds::from_corners(-31.0, 145.0, -44.0, 157.0);
        assert!(b.contains(-31.0, 145.0));
        assert!(b.contains(-44.0, 157.0));
        assert!(b.contains(-34.0, 151.0));
        assert!(!b.contains(-30.9, 151.0));
        assert!(!b.contains(-34.0, 144.9));
    }

    #[test]
    fn extents() {
        let b = Bounds::from_corners(-31.0, 145.0, -44.0, 157.0);
        assert!((b.height() - 13.0).abs() < 1e-9);
        assert!((b.width() - 12.0).abs() < 1e-9);
    }
}
