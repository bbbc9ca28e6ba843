//! # Geometry Decomposition
//!
//! Decodes a feature's `geometry` into a closed set of variants and flattens
//! area geometries into independent rings for containment testing.
//!
//! Every ring becomes its own [`Polygon`], interior rings (holes) included.
//! Outer boundaries and holes are not told apart, so a point inside a hole
//! will still match the hole ring. Callers that care about holes must not
//! rely on this flattening alone.
//!
//! ## Table of Contents
//! 1. Geometry — Decoded variants
//! 2. Decoding
//! 3. Ring flattening

use serde_json::Value;

use crate::document::FeatureDocument;
use crate::error::{Result, WofError};
use crate::polygon::{LatLon, Polygon};

// ============================================================================
// 1. Geometry — Decoded variants
// ============================================================================

/// A feature geometry, as far as containment testing is concerned
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Rings of a single polygon, in input order
    Polygon(Vec<Polygon>),
    /// Members of a multipolygon, each a list of rings
    MultiPolygon(Vec<Vec<Polygon>>),
    /// Anything else; carries the `type` string (empty if absent)
    Other(String),
}

impl Geometry {
    pub fn kind(&self) -> &str {
        match self {
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::Other(kind) => kind,
        }
    }
}

// ============================================================================
// 2. Decoding
// ============================================================================

/// Decode `geometry` from the document.
///
/// A missing geometry, a missing `type`, or any type other than Polygon and
/// MultiPolygon decodes as [`Geometry::Other`]. For Polygon/MultiPolygon only
/// `coordinates` is read, and of each position only the first two
/// ordinates; other members are ignored. A shape mismatch in what is read
/// is [`WofError::MalformedGeometry`].
pub fn decode(doc: &FeatureDocument) -> Result<Geometry> {
    let Some(geometry) = doc.path("geometry") else {
        return Ok(Geometry::Other(String::new()));
    };

    let kind = match geometry.get("type").and_then(Value::as_str) {
        Some("Polygon") => "Polygon",
        Some("MultiPolygon") => "MultiPolygon",
        other => return Ok(Geometry::Other(other.unwrap_or_default().to_string())),
    };

    let coordinates = geometry
        .get("coordinates")
        .ok_or_else(|| malformed(kind, "missing coordinates".to_string()))?;

    match kind {
        "Polygon" => Ok(Geometry::Polygon(decode_rings(kind, coordinates)?)),
        _ => {
            let members = as_array(kind, coordinates, "coordinates")?
                .iter()
                .map(|rings| decode_rings(kind, rings))
                .collect::<Result<Vec<_>>>()?;
            Ok(Geometry::MultiPolygon(members))
        }
    }
}

fn decode_rings(kind: &'static str, rings: &Value) -> Result<Vec<Polygon>> {
    as_array(kind, rings, "polygon")?
        .iter()
        .map(|ring| decode_ring(kind, ring))
        .collect()
}

fn decode_ring(kind: &'static str, ring: &Value) -> Result<Polygon> {
    as_array(kind, ring, "ring")?
        .iter()
        .map(|position| {
            let ordinates = as_array(kind, position, "position")?;
            LatLon::from_position(ordinates).ok_or_else(|| {
                malformed(kind, format!("position {} needs numeric lon and lat", position))
            })
        })
        .collect()
}

fn as_array<'a>(kind: &'static str, value: &'a Value, what: &str) -> Result<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| malformed(kind, format!("{} is not an array: {}", what, value)))
}

fn malformed(kind: &'static str, reason: String) -> WofError {
    WofError::MalformedGeometry { kind, reason }
}

// ============================================================================
// 3. Ring flattening
// ============================================================================

impl Geometry {
    /// Flatten into independent rings: member order, then ring order.
    /// `Other` yields nothing.
    pub fn into_polygons(self) -> Vec<Polygon> {
        match self {
            Geometry::Polygon(rings) => rings,
            Geometry::MultiPolygon(members) => members.into_iter().flatten().collect(),
            Geometry::Other(_) => Vec::new(),
        }
    }
}

/// Rings for containment testing. Never fails: unsupported types give an
/// empty list, and malformed Polygon/MultiPolygon coordinates are logged and
/// also give an empty list. Use [`decode`] to see the error.
pub fn polygons(doc: &FeatureDocument) -> Vec<Polygon> {
    match decode(doc) {
        Ok(geometry) => {
            let kind = geometry.kind().to_string();
            let polygons = geometry.into_polygons();
            tracing::debug!("Decomposed {} geometry into {} rings", kind, polygons.len());
            polygons
        }
        Err(e) => {
            tracing::warn!("Skipping geometry: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc_with_geometry(geometry: Value) -> FeatureDocument {
        FeatureDocument::from_value(json!({ "type": "Feature", "geometry": geometry }))
    }

    fn ring(points: &[(f64, f64)]) -> Polygon {
        points.iter().copied().map(LatLon::from).collect()
    }

    #[test]
    fn test_polygon_single_ring_swaps_to_lat_lon() {
        let doc = doc_with_geometry(json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]]],
        }));

        let polygons = polygons(&doc);
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0], ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]));
    }

    #[test]
    fn test_polygon_holes_become_independent_rings() {
        let doc = doc_with_geometry(json!({
            "type": "Polygon",
            "coordinates": [
                [[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
                [[4, 4], [6, 4], [6, 6], [4, 6], [4, 4]],
            ],
        }));

        let polygons = polygons(&doc);
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[1].points()[1], LatLon::new(4.0, 6.0));
        // A point inside the hole still hits both rings
        let in_hole = LatLon::new(5.0, 5.0);
        assert!(polygons.iter().all(|p| p.contains(in_hole)));
    }

    #[test]
    fn test_multipolygon_flattens_in_encounter_order() {
        let doc = doc_with_geometry(json!({
            "type": "MultiPolygon",
            "coordinates": [
                [[[0, 0], [0, 1], [1, 1], [0, 0]]],
                [[[5, 5], [5, 6], [6, 6], [5, 5]]],
            ],
        }));

        let polygons = polygons(&doc);
        assert_eq!(polygons, vec![
            ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
            ring(&[(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 5.0)]),
        ]);
    }

    #[test]
    fn test_multipolygon_member_then_ring_order() {
        let doc = doc_with_geometry(json!({
            "type": "MultiPolygon",
            "coordinates": [
                [
                    [[0, 0], [0, 3], [3, 3], [0, 0]],
                    [[1, 1], [1, 2], [2, 2], [1, 1]],
                ],
                [[[10, 10], [10, 11], [11, 11], [10, 10]]],
            ],
        }));

        let geometry = decode(&doc).unwrap();
        assert!(matches!(&geometry, Geometry::MultiPolygon(members) if members.len() == 2));

        let polygons = geometry.into_polygons();
        let firsts: Vec<LatLon> = polygons.iter().map(|p| p.points()[0]).collect();
        assert_eq!(firsts, vec![LatLon::new(0.0, 0.0), LatLon::new(1.0, 1.0), LatLon::new(10.0, 10.0)]);
    }

    #[test]
    fn test_unclosed_ring_is_not_closed() {
        let doc = doc_with_geometry(json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [0, 1], [1, 1]]],
        }));

        let polygons = polygons(&doc);
        assert_eq!(polygons[0].len(), 3);
        assert!(!polygons[0].is_closed());
    }

    #[test]
    fn test_other_types_yield_nothing() {
        let point = doc_with_geometry(json!({ "type": "Point", "coordinates": [1.0, 2.0] }));
        assert_eq!(decode(&point).unwrap(), Geometry::Other("Point".to_string()));
        assert!(polygons(&point).is_empty());

        let line = doc_with_geometry(json!({ "type": "LineString", "coordinates": [[0, 0], [1, 1]] }));
        assert!(polygons(&line).is_empty());

        let collection = doc_with_geometry(json!({
            "type": "GeometryCollection",
            "geometries": [{ "type": "Polygon", "coordinates": [[[0, 0], [0, 1], [1, 1], [0, 0]]] }],
        }));
        assert!(polygons(&collection).is_empty());
    }

    #[test]
    fn test_missing_geometry_or_type_yields_nothing() {
        let doc = FeatureDocument::from_value(json!({ "type": "Feature" }));
        assert_eq!(decode(&doc).unwrap(), Geometry::Other(String::new()));
        assert!(polygons(&doc).is_empty());

        let doc = doc_with_geometry(json!({ "coordinates": [[[0, 0], [0, 1], [1, 1], [0, 0]]] }));
        assert!(polygons(&doc).is_empty());

        let doc = doc_with_geometry(Value::Null);
        assert!(polygons(&doc).is_empty());
    }

    #[test]
    fn test_malformed_coordinates_are_typed_errors() {
        let not_nested = doc_with_geometry(json!({
            "type": "Polygon",
            "coordinates": [[0, 0], [0, 1], [1, 1]],
        }));
        assert!(matches!(
            decode(&not_nested),
            Err(WofError::MalformedGeometry { kind: "Polygon", .. })
        ));
        assert!(polygons(&not_nested).is_empty());

        let short_position = doc_with_geometry(json!({
            "type": "MultiPolygon",
            "coordinates": [[[[0, 0], [1], [1, 1], [0, 0]]]],
        }));
        assert!(matches!(
            decode(&short_position),
            Err(WofError::MalformedGeometry { kind: "MultiPolygon", .. })
        ));
        assert!(polygons(&short_position).is_empty());

        let string_lat = doc_with_geometry(json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [1, "1"], [1, 0], [0, 0]]],
        }));
        assert!(matches!(
            decode(&string_lat),
            Err(WofError::MalformedGeometry { kind: "Polygon", .. })
        ));

        let no_coordinates = doc_with_geometry(json!({ "type": "MultiPolygon" }));
        assert!(matches!(
            decode(&no_coordinates),
            Err(WofError::MalformedGeometry { kind: "MultiPolygon", .. })
        ));
    }

    #[test]
    fn test_unread_geometry_members_are_ignored() {
        let doc = doc_with_geometry(json!({
            "type": "Polygon",
            "bbox": "x",
            "crs": 7,
            "coordinates": [[[0, 0], [0, 1], [1, 1], [0, 0]]],
        }));

        let polygons = polygons(&doc);
        assert_eq!(polygons, vec![ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)])]);
    }

    #[test]
    fn test_non_numeric_altitude_is_dropped() {
        let doc = doc_with_geometry(json!({
            "type": "MultiPolygon",
            "coordinates": [[[[0, 0, null], [1, 1, null], [0, 1, "high"], [0, 0, null]]]],
        }));

        let polygons = polygons(&doc);
        assert_eq!(polygons, vec![ring(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)])]);
    }

    #[test]
    fn test_empty_coordinates() {
        let doc = doc_with_geometry(json!({ "type": "MultiPolygon", "coordinates": [] }));
        assert_eq!(decode(&doc).unwrap(), Geometry::MultiPolygon(vec![]));
        assert!(polygons(&doc).is_empty());
    }
}
