//! # Spatial Summary
//!
//! The minimal per-feature record inserted into a spatial index: id, name,
//! placetype and bounding rectangle.

use rstar::{RTreeObject, AABB};
use serde::{Deserialize, Serialize};

use crate::bounds::{bounds_with_policy, Rect};
use crate::config::ExtractionConfig;
use crate::document::FeatureDocument;
use crate::error::Result;
use crate::metadata::Metadata;

/// Index entry for one feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialSummary {
    pub id: i64,
    pub name: String,
    pub placetype: String,
    pub bounds: Rect,
}

impl SpatialSummary {
    /// Build a summary, applying the config's metadata defaults and bounds
    /// policy. Fails only when the bbox is malformed.
    pub fn from_document(doc: &FeatureDocument, config: &ExtractionConfig) -> Result<Self> {
        let bounds = bounds_with_policy(doc, &config.bounds)?;
        let metadata = Metadata::extract(doc).resolve(&config.metadata);

        Ok(Self {
            id: metadata.id,
            name: metadata.name,
            placetype: metadata.placetype,
            bounds,
        })
    }

    /// [`from_document`](Self::from_document) with the default config
    pub fn from_document_default(doc: &FeatureDocument) -> Result<Self> {
        Self::from_document(doc, &ExtractionConfig::default())
    }
}

impl RTreeObject for SpatialSummary {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.bounds.to_aabb()
    }
}
