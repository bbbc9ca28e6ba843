//! # WOF GeoJSON — Spatial Summaries and Containment Rings
//!
//! Reads a single Who's On First GeoJSON feature and derives the two things a
//! point-in-polygon service needs from it: a compact summary (id, name,
//! placetype, bbox rectangle) for R-tree insertion, and a flat list of
//! polygon rings for containment tests.
//!
//! ## Modules
//! - `document` — Parsed feature tree with dotted-path lookup
//! - `metadata` — `wof:id` / `wof:name` / `wof:placetype` accessors
//! - `bounds` — `bbox` → `Rect`
//! - `geometry` — Polygon/MultiPolygon decoding and ring flattening
//! - `polygon` — Rings in lat/lon order with containment tests
//! - `summary` — `SpatialSummary` for index insertion
//! - `spatial_index` — R-tree wrapper for point-in-polygon lookups
//! - `config` — Extraction policy (metadata defaults, bbox strictness)
//! - `error` — Error types
//!
//! ## Example
//! ```no_run
//! use wof_geojson::{geometry, FeatureDocument, LatLon, SpatialSummary};
//!
//! let doc = FeatureDocument::from_file("85922583.geojson")?;
//! let summary = SpatialSummary::from_document_default(&doc)?;
//! let inside = geometry::polygons(&doc)
//!     .iter()
//!     .any(|ring| ring.contains(LatLon::new(37.76, -122.42)));
//! println!("{} ({}): {}", summary.name, summary.id, inside);
//! # Ok::<(), wof_geojson::WofError>(())
//! ```

pub mod bounds;
pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod metadata;
pub mod polygon;
pub mod spatial_index;
pub mod summary;

pub use bounds::{bounds, bounds_with_policy, Rect};
pub use config::{BoundsPolicy, ExtractionConfig, MetadataPolicy};
pub use document::FeatureDocument;
pub use error::{Result, WofError};
pub use geometry::{polygons, Geometry};
pub use metadata::{Metadata, ResolvedMetadata};
pub use polygon::{LatLon, Polygon};
pub use spatial_index::{IndexedFeature, SpatialIndex};
pub use summary::SpatialSummary;
