//! Error types for the recommender
//!
//! Catalog loading is the only fallible library operation. Sample
//! validation is offered to callers but never required by the scorer.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to build a catalog from a data file
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File exists but could not be read
    #[error("Failed to read catalog file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not a valid list of plant records
    #[error("Failed to parse catalog file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Caller-side rejection of a water sample
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}
