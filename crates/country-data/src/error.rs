//! Error types for country-data.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the upstream World Bank API.
///
/// These never reach callers of [`crate::CountryDirectory`]; they are logged
/// and turned into a [`crate::FallbackReason`].
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP request failed (connect, timeout, body read or decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status.
    #[error("World Bank API returned status {0}")]
    Status(u16),
}

/// Errors when building a fallback table.
#[derive(Debug, Error)]
pub enum DataError {
    /// Fallback file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fallback file is not a JSON array of records.
    #[error("Invalid fallback JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two records share the same id.
    #[error("Duplicate country id in fallback table: {0}")]
    DuplicateId(String),

    /// Record has a blank id.
    #[error("Fallback record has an empty id")]
    EmptyId,

    /// Table has no records.
    #[error("Fallback table is empty")]
    Empty,
}
