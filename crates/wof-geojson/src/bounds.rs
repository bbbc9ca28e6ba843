//! # Bounds Derivation
//!
//! Turns the top-level `bbox` member (`[minLon, minLat, maxLon, maxLat]`)
//! into an axis-aligned `Rect` used as the spatial index key.
//!
//! ## Table of Contents
//! 1. Rect — Origin + extent rectangle
//! 2. bbox → Rect

use rstar::AABB;
use serde::{Deserialize, Serialize};

use crate::config::BoundsPolicy;
use crate::document::FeatureDocument;
use crate::error::{Result, WofError};

// ============================================================================
// 1. Rect — Origin + extent rectangle
// ============================================================================

/// Axis-aligned rectangle in lon/lat degrees. `origin_x`/`origin_y` are the
/// min longitude/latitude.
///
/// `width` and `height` are non-negative for a well-ordered bbox only; an
/// inverted bbox yields negative extent unless rejected by `BoundsPolicy`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Self {
        Self { origin_x, origin_y, width, height }
    }

    /// Corner opposite the origin
    pub fn far_corner(&self) -> (f64, f64) {
        (self.origin_x + self.width, self.origin_y + self.height)
    }

    /// Whether either dimension is negative
    pub fn is_inverted(&self) -> bool {
        self.width < 0.0 || self.height < 0.0
    }

    /// R-tree envelope. `AABB::from_corners` orders the corners, so an
    /// inverted rect still covers the same area.
    pub fn to_aabb(&self) -> AABB<[f64; 2]> {
        let (far_x, far_y) = self.far_corner();
        AABB::from_corners([self.origin_x, self.origin_y], [far_x, far_y])
    }
}

// ============================================================================
// 2. bbox → Rect
// ============================================================================

/// Derive the bounding rectangle from the document's `bbox`.
///
/// Ordering is not checked: a reversed bbox gives negative width/height.
pub fn bounds(doc: &FeatureDocument) -> Result<Rect> {
    Ok(rect_from_bbox(read_bbox(doc)?))
}

/// Like [`bounds`], but applies the policy's ordering check.
pub fn bounds_with_policy(doc: &FeatureDocument, policy: &BoundsPolicy) -> Result<Rect> {
    let bbox @ [min_lon, min_lat, max_lon, max_lat] = read_bbox(doc)?;
    if policy.reject_inverted && (max_lon < min_lon || max_lat < min_lat) {
        return Err(WofError::MalformedBounds(format!(
            "inverted bbox [{}, {}, {}, {}]",
            min_lon, min_lat, max_lon, max_lat
        )));
    }
    Ok(rect_from_bbox(bbox))
}

fn rect_from_bbox([min_lon, min_lat, max_lon, max_lat]: [f64; 4]) -> Rect {
    let rect = Rect::new(min_lon, min_lat, max_lon - min_lon, max_lat - min_lat);
    if rect.is_inverted() {
        tracing::warn!(
            "bbox [{}, {}, {}, {}] is inverted; rect has negative extent ({} x {})",
            min_lon, min_lat, max_lon, max_lat, rect.width, rect.height
        );
    }
    rect
}

fn read_bbox(doc: &FeatureDocument) -> Result<[f64; 4]> {
    let entries = doc
        .body()
        .get("bbox")
        .ok_or_else(|| WofError::MalformedBounds("missing bbox".to_string()))?
        .as_array()
        .ok_or_else(|| WofError::MalformedBounds("bbox is not an array".to_string()))?;

    let values = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            entry.as_f64().ok_or_else(|| {
                WofError::MalformedBounds(format!("entry {} is not a number: {}", i, entry))
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    <[f64; 4]>::try_from(values).map_err(|values| {
        WofError::MalformedBounds(format!("expected 4 entries, found {}", values.len()))
    })
}
