//! # Feature Metadata
//!
//! Reads the identifying `wof:*` properties. Accessors return `None` for
//! absent or mistyped fields; `Metadata::resolve` applies the caller's
//! `MetadataPolicy` to fill them in.

use serde_json::Value;

use crate::config::MetadataPolicy;
use crate::document::FeatureDocument;

const ID_PATH: &str = "properties.wof:id";
const NAME_PATH: &str = "properties.wof:name";
const PLACETYPE_PATH: &str = "properties.wof:placetype";

/// `properties.wof:id`. Integers are taken as-is, floats are truncated
/// toward zero.
pub fn id(doc: &FeatureDocument) -> Option<i64> {
    match doc.path(ID_PATH)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        _ => None,
    }
}

/// `properties.wof:name`, if it is a string.
pub fn name(doc: &FeatureDocument) -> Option<&str> {
    doc.path(NAME_PATH)?.as_str()
}

/// `properties.wof:placetype`, if it is a string.
pub fn placetype(doc: &FeatureDocument) -> Option<&str> {
    doc.path(PLACETYPE_PATH)?.as_str()
}

/// Identifying metadata as found in the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub placetype: Option<String>,
}

/// Metadata with every field filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMetadata {
    pub id: i64,
    pub name: String,
    pub placetype: String,
}

impl Metadata {
    pub fn extract(doc: &FeatureDocument) -> Self {
        Self {
            id: id(doc),
            name: name(doc).map(str::to_string),
            placetype: placetype(doc).map(str::to_string),
        }
    }

    /// Substitute the policy's defaults for anything missing. Never fails.
    pub fn resolve(self, policy: &MetadataPolicy) -> ResolvedMetadata {
        ResolvedMetadata {
            id: self.id.unwrap_or(policy.default_id),
            name: self.name.unwrap_or_else(|| policy.default_name.clone()),
            placetype: self.placetype.unwrap_or_else(|| policy.default_placetype.clone()),
        }
    }
}
