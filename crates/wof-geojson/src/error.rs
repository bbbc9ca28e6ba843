//! # Errors
//!
//! Error types for feature loading, bounds derivation and geometry decoding.
//! Missing metadata and unsupported geometry types are not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading a feature document or deriving from it.
#[derive(Error, Debug)]
pub enum WofError {
    // ========================================================================
    // Document Errors
    // ========================================================================

    /// Document bytes could not be read from storage.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is not well-formed JSON.
    #[error("Failed to parse feature document: {0}")]
    Parse(#[from] serde_json::Error),

    // ========================================================================
    // Derivation Errors
    // ========================================================================

    /// `bbox` is missing, has the wrong arity, holds a non-numeric entry,
    /// or is inverted while the strict bounds policy is on.
    #[error("Malformed bounding box: {0}")]
    MalformedBounds(String),

    /// Polygon or MultiPolygon coordinates do not have the expected shape.
    #[error("Malformed {kind} geometry: {reason}")]
    MalformedGeometry { kind: &'static str, reason: String },

    // ========================================================================
    // Config Errors
    // ========================================================================

    /// Config file could not be read.
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for `ExtractionConfig`.
    #[error("Failed to parse config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result type for feature operations.
pub type Result<T> = std::result::Result<T, WofError>;
