//! # Polygon Rings
//!
//! A `Polygon` here is a single ring of `(lat, lon)` points, the shape handed
//! to point-in-polygon tests. GeoJSON stores positions as `[lon, lat]`; the
//! swap happens once, in [`LatLon::from_position`].
//!
//! ## Table of Contents
//! 1. LatLon — Point in lat/lon order
//! 2. Polygon — One ring
//! 3. Containment

use geo::{Contains, LineString, Point};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// 1. LatLon — Point in lat/lon order
// ============================================================================

/// A geographic point, latitude first
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Convert a GeoJSON `[lon, lat, ...]` position. Only the first two
    /// ordinates are read, so altitude may be anything. Returns `None` for
    /// fewer than 2 ordinates or a non-numeric lon/lat.
    pub fn from_position(position: &[Value]) -> Option<Self> {
        match position {
            [lon, lat, ..] => Some(Self::new(lat.as_f64()?, lon.as_f64()?)),
            _ => None,
        }
    }

    /// As a `geo` point (x = lon, y = lat)
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl From<(f64, f64)> for LatLon {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

// ============================================================================
// 2. Polygon — One ring
// ============================================================================

/// One ring, points in input order. No closing point is added, so an
/// unclosed input ring stays unclosed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<LatLon>,
}

impl Polygon {
    pub fn new(points: Vec<LatLon>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[LatLon] {
        &self.points
    }

    pub fn push(&mut self, point: LatLon) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point equals last point
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    pub fn into_points(self) -> Vec<LatLon> {
        self.points
    }
}

impl FromIterator<LatLon> for Polygon {
    fn from_iter<I: IntoIterator<Item = LatLon>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ============================================================================
// 3. Containment
// ============================================================================

impl Polygon {
    /// Whether `point` lies strictly inside this ring.
    ///
    /// The ring is treated as a lone exterior; `geo` closes it for the test
    /// without touching `self`. Points on the boundary are not contained.
    pub fn contains(&self, point: LatLon) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        let exterior: LineString<f64> = self.points.iter().map(|p| (p.lon, p.lat)).collect();
        geo::Polygon::new(exterior, vec![]).contains(&point.to_point())
    }
}
