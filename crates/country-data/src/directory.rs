//! Country directory adapter with fallback.
//!
//! [`CountryDirectory`] is the only entry point page handlers use. It issues
//! one request per call and never returns an error: transport failures,
//! bad statuses, malformed bodies, and empty results all degrade to the
//! fallback table, and the returned [`FetchOutcome`] records why.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::client::CountrySource;
use crate::fallback::FallbackTable;
use crate::model::CountryRecord;
use crate::normalize::normalize;

/// Why fallback data was served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FallbackReason {
    /// The remote call failed (transport, status, or decode error).
    Unavailable(String),
    /// The remote call succeeded but returned no usable records.
    NoData,
    /// The remote source has no record for the requested code.
    NotFound,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::Unavailable(err) => write!(f, "remote source unavailable: {}", err),
            FallbackReason::NoData => write!(f, "remote source returned no data"),
            FallbackReason::NotFound => write!(f, "not found in remote source"),
        }
    }
}

/// Result of a directory lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    /// Data came from the remote source.
    Remote(T),
    /// Data came from the fallback table.
    Fallback { value: T, reason: FallbackReason },
}

impl<T> FetchOutcome<T> {
    /// Borrow the data regardless of origin.
    pub fn value(&self) -> &T {
        match self {
            FetchOutcome::Remote(value) => value,
            FetchOutcome::Fallback { value, .. } => value,
        }
    }

    /// Take the data regardless of origin.
    pub fn into_value(self) -> T {
        match self {
            FetchOutcome::Remote(value) => value,
            FetchOutcome::Fallback { value, .. } => value,
        }
    }

    /// Whether the fallback table was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self, FetchOutcome::Fallback { .. })
    }

    /// "remote" or "fallback", for logs and API responses.
    pub fn origin(&self) -> &'static str {
        match self {
            FetchOutcome::Remote(_) => "remote",
            FetchOutcome::Fallback { .. } => "fallback",
        }
    }

    /// The fallback reason, if any.
    pub fn reason(&self) -> Option<&FallbackReason> {
        match self {
            FetchOutcome::Remote(_) => None,
            FetchOutcome::Fallback { reason, .. } => Some(reason),
        }
    }

    /// Transform the data, keeping the origin.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Remote(value) => FetchOutcome::Remote(f(value)),
            FetchOutcome::Fallback { value, reason } => FetchOutcome::Fallback {
                value: f(value),
                reason,
            },
        }
    }
}

/// Remote country source paired with a fallback table.
#[derive(Clone)]
pub struct CountryDirectory {
    source: Arc<dyn CountrySource>,
    fallback: FallbackTable,
}

impl CountryDirectory {
    /// Create a directory over the given source and fallback table.
    pub fn new(source: impl CountrySource + 'static, fallback: FallbackTable) -> Self {
        Self {
            source: Arc::new(source),
            fallback,
        }
    }

    /// The fallback table.
    pub fn fallback(&self) -> &FallbackTable {
        &self.fallback
    }

    /// All countries, aggregates excluded, ids unique (first occurrence kept).
    pub async fn fetch_all(&self) -> FetchOutcome<Vec<CountryRecord>> {
        let upstream = match self.source.list_countries().await {
            Ok(upstream) => upstream,
            Err(err) => {
                warn!(source = %self.source.name(), error = %err, "Country list fetch failed, using fallback table");
                return self.fallback_all(FallbackReason::Unavailable(err.to_string()));
            }
        };

        let total = upstream.len();
        let mut seen = HashSet::new();
        let records: Vec<CountryRecord> = upstream
            .iter()
            .filter(|raw| !raw.is_aggregate())
            .map(normalize)
            .filter(|record| !record.id.is_empty() && seen.insert(record.id.clone()))
            .collect();

        if records.is_empty() {
            warn!(source = %self.source.name(), total, "Country list is empty, using fallback table");
            return self.fallback_all(FallbackReason::NoData);
        }

        debug!(total, countries = records.len(), "Fetched country list");
        FetchOutcome::Remote(records)
    }

    /// One country by code. The code is trimmed and upper-cased.
    ///
    /// Remote misses and failures fall back to a search of the fallback table;
    /// a code found in neither yields `None` inside the outcome.
    pub async fn fetch_one(&self, code: &str) -> FetchOutcome<Option<CountryRecord>> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return self.fallback_one(&code, FallbackReason::NotFound);
        }

        match self.source.get_country(&code).await {
            Ok(Some(raw)) if !raw.is_aggregate() => FetchOutcome::Remote(Some(normalize(&raw))),
            Ok(_) => {
                debug!(code = %code, "Country not in remote source, searching fallback table");
                self.fallback_one(&code, FallbackReason::NotFound)
            }
            Err(err) => {
                warn!(code = %code, source = %self.source.name(), error = %err, "Country fetch failed, using fallback table");
                self.fallback_one(&code, FallbackReason::Unavailable(err.to_string()))
            }
        }
    }

    fn fallback_all(&self, reason: FallbackReason) -> FetchOutcome<Vec<CountryRecord>> {
        FetchOutcome::Fallback {
            value: self.fallback.records().to_vec(),
            reason,
        }
    }

    fn fallback_one(&self, code: &str, reason: FallbackReason) -> FetchOutcome<Option<CountryRecord>> {
        FetchOutcome::Fallback {
            value: self.fallback.find(code).cloned(),
            reason,
        }
    }
}
