//! # Feature Document
//!
//! Immutable handle over a parsed GeoJSON feature. The tree is kept as a
//! generic `serde_json::Value` so partially-populated or non-standard
//! documents still load; typed decoding happens in the layers above.
//!
//! ## Table of Contents
//! 1. FeatureDocument — Parsed document tree
//! 2. Loading (bytes, text, file)
//! 3. Path lookup and serialization

use serde_json::Value;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, WofError};

// ============================================================================
// 1. FeatureDocument — Parsed document tree
// ============================================================================

/// A parsed feature document. Read-only after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureDocument {
    body: Value,
}

// ============================================================================
// 2. Loading (bytes, text, file)
// ============================================================================

impl FeatureDocument {
    /// Parse a feature document from raw bytes
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let body: Value = serde_json::from_slice(bytes)?;
        Ok(Self { body })
    }

    /// Read and parse a feature document from a file path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| WofError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let doc = Self::parse(&bytes)?;
        tracing::info!("Loaded feature document from {} ({} bytes)", path.display(), bytes.len());
        Ok(doc)
    }

    /// Wrap an already-parsed tree
    pub fn from_value(body: Value) -> Self {
        Self { body }
    }
}

impl FromStr for FeatureDocument {
    type Err = WofError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}

// ============================================================================
// 3. Path lookup and serialization
// ============================================================================

impl FeatureDocument {
    /// Root of the document tree
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Look up a value by dotted path, e.g. `"properties.wof:id"`.
    ///
    /// Only object members are traversed; a segment that lands on an array
    /// or scalar yields `None`. Keys may contain `:` but not `.`.
    pub fn path(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.body, |node, key| node.as_object()?.get(key))
    }

    /// Re-render the tree as compact JSON.
    ///
    /// Round-tripping is semantic only: key order and number formatting may
    /// differ from the original bytes.
    pub fn serialize(&self) -> String {
        self.body.to_string()
    }
}
