//! # Spatial Index
//!
//! R-tree of feature summaries for point-in-polygon lookups via the `rstar`
//! crate. A lookup is two passes: bbox candidates from the tree, then a
//! containment test against each candidate's rings.
//!
//! ## Table of Contents
//! 1. SpatialIndex — R-tree of features
//! 2. IndexedFeature — R-tree entry
//! 3. Query methods

use rstar::{RTree, RTreeObject, AABB};

use crate::config::ExtractionConfig;
use crate::document::FeatureDocument;
use crate::geometry;
use crate::polygon::{LatLon, Polygon};
use crate::summary::SpatialSummary;

// ============================================================================
// 1. SpatialIndex — R-tree of features
// ============================================================================

/// R-tree of indexed features, keyed by each feature's bbox
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<IndexedFeature>,
}

impl SpatialIndex {
    /// Create a new empty spatial index
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load features into the R-tree (much faster than individual inserts)
    pub fn bulk_load(features: Vec<IndexedFeature>) -> Self {
        Self {
            tree: RTree::bulk_load(features),
        }
    }

    /// Summarize and decompose each document, then bulk-load.
    ///
    /// Documents with a malformed bbox are skipped with a warning.
    pub fn from_documents<'a>(
        docs: impl IntoIterator<Item = &'a FeatureDocument>,
        config: &ExtractionConfig,
    ) -> Self {
        let mut features = Vec::new();
        let mut skipped = 0usize;

        for doc in docs {
            match SpatialSummary::from_document(doc, config) {
                Ok(summary) => features.push(IndexedFeature::new(summary, geometry::polygons(doc))),
                Err(e) => {
                    skipped += 1;
                    tracing::warn!("Not indexing feature: {}", e);
                }
            }
        }

        tracing::info!("Indexed {} features ({} skipped)", features.len(), skipped);
        Self::bulk_load(features)
    }

    /// Insert a single feature
    pub fn insert(&mut self, summary: SpatialSummary, polygons: Vec<Polygon>) {
        self.tree.insert(IndexedFeature::new(summary, polygons));
    }

    /// Number of indexed features
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

// ============================================================================
// 2. IndexedFeature — R-tree entry
// ============================================================================

/// A feature entry in the spatial index: its summary plus the rings used
/// for containment refinement.
#[derive(Debug, Clone)]
pub struct IndexedFeature {
    pub summary: SpatialSummary,
    pub polygons: Vec<Polygon>,
}

impl IndexedFeature {
    pub fn new(summary: SpatialSummary, polygons: Vec<Polygon>) -> Self {
        Self { summary, polygons }
    }

    /// Whether any ring contains the point. Rings are tested independently,
    /// so a point inside a hole ring still counts.
    pub fn contains(&self, point: LatLon) -> bool {
        self.polygons.iter().any(|polygon| polygon.contains(point))
    }
}

impl RTreeObject for IndexedFeature {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.summary.envelope()
    }
}

// ============================================================================
// 3. Query methods
// ============================================================================

impl SpatialIndex {
    /// Features whose bbox covers the point (boundary inclusive)
    pub fn candidates(&self, point: LatLon) -> Vec<&IndexedFeature> {
        let envelope = AABB::from_point([point.lon, point.lat]);
        self.tree.locate_in_envelope_intersecting(&envelope).collect()
    }

    /// Features with a ring containing the point. Features without rings
    /// (non-area geometries) never match.
    pub fn containing(&self, point: LatLon) -> Vec<&IndexedFeature> {
        self.candidates(point)
            .into_iter()
            .filter(|feature| feature.contains(point))
            .collect()
    }

    /// Features whose bbox intersects the given rect corners (lon, lat)
    pub fn query_rect(&self, min: LatLon, max: LatLon) -> Vec<&IndexedFeature> {
        let envelope = AABB::from_corners([min.lon, min.lat], [max.lon, max.lat]);
        self.tree.locate_in_envelope_intersecting(&envelope).collect()
    }

    /// Look up a feature by `wof:id`. Linear scan.
    pub fn get(&self, id: i64) -> Option<&IndexedFeature> {
        self.tree.iter().find(|feature| feature.summary.id == id)
    }
}
