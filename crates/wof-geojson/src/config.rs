//! # Extraction Configuration
//!
//! Policy knobs for turning a feature document into a spatial summary.
//! Can be built in code or parsed from a TOML file such as `wof.toml`:
//!
//! ```toml
//! [metadata]
//! default_id = -1
//! default_name = ""
//! default_placetype = "unknown"
//!
//! [bounds]
//! reject_inverted = false
//! ```
//!
//! ## Table of Contents
//! 1. ExtractionConfig — Top-level config
//! 2. MetadataPolicy — Sentinels for absent metadata
//! 3. BoundsPolicy — bbox strictness
//! 4. Parsing

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, WofError};

// ============================================================================
// 1. ExtractionConfig — Top-level config
// ============================================================================

/// Top-level extraction configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Defaults substituted for missing metadata
    #[serde(default)]
    pub metadata: MetadataPolicy,
    /// Bounding box validation
    #[serde(default)]
    pub bounds: BoundsPolicy,
}

// ============================================================================
// 2. MetadataPolicy — Sentinels for absent metadata
// ============================================================================

/// Values used when `wof:id`, `wof:name` or `wof:placetype` is absent or
/// has the wrong JSON type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataPolicy {
    #[serde(default = "default_id")]
    pub default_id: i64,
    #[serde(default)]
    pub default_name: String,
    #[serde(default = "default_placetype")]
    pub default_placetype: String,
}

impl Default for MetadataPolicy {
    fn default() -> Self {
        Self {
            default_id: default_id(),
            default_name: String::new(),
            default_placetype: default_placetype(),
        }
    }
}

fn default_id() -> i64 { -1 }
fn default_placetype() -> String { "unknown".to_string() }

// ============================================================================
// 3. BoundsPolicy — bbox strictness
// ============================================================================

/// Bounding box validation policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundsPolicy {
    /// Reject a bbox whose max is below its min on either axis.
    /// Off by default: an inverted bbox yields a rect with negative extent.
    #[serde(default)]
    pub reject_inverted: bool,
}

// ============================================================================
// 4. Parsing
// ============================================================================

impl ExtractionConfig {
    /// Load an ExtractionConfig from a TOML file path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| WofError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ExtractionConfig = toml::from_str(&content).map_err(|source| WofError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded extraction config from {}", path.display());
        Ok(config)
    }
}
