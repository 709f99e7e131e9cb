//! Local fallback table.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::DataError;
use crate::model::CountryRecord;
use crate::normalize::or_not_available;
use crate::region::canonical_region;

/// Built-in records: (id, name, region, capital, income level).
const BUILTIN: &[(&str, &str, &str, &str, &str)] = &[
    ("IND", "India", "Middle East & South Asia", "New Delhi", "Lower middle income"),
    ("USA", "United States", "North America", "Washington D.C.", "High income"),
    ("BRA", "Brazil", "Latin America & Caribbean", "Brasilia", "Upper middle income"),
    ("GBR", "United Kingdom", "Europe & Central Asia", "London", "High income"),
    ("ARG", "Argentina", "Latin America & Caribbean", "Buenos Aires", "Upper middle income"),
    ("ZAF", "South Africa", "Sub-Saharan Africa", "Pretoria", "Upper middle income"),
    ("CHN", "China", "East Asia & Pacific", "Beijing", "Upper middle income"),
    ("JPN", "Japan", "East Asia & Pacific", "Tokyo", "High income"),
    ("AUS", "Australia", "East Asia & Pacific", "Canberra", "High income"),
    ("DEU", "Germany", "Europe & Central Asia", "Berlin", "High income"),
];

/// Read-only country list served when the World Bank API is unavailable.
///
/// Cloning is cheap; all clones share the same records. Ids are unique and
/// region labels are canonical.
#[derive(Debug, Clone)]
pub struct FallbackTable {
    records: Arc<[CountryRecord]>,
}

impl FallbackTable {
    /// Build a table, rejecting empty input and duplicate ids.
    ///
    /// Region labels are passed through [`canonical_region`]; blank capitals
    /// and income levels become `N/A`.
    pub fn new(records: Vec<CountryRecord>) -> Result<Self, DataError> {
        if records.is_empty() {
            return Err(DataError::Empty);
        }

        let mut seen = HashSet::new();
        let mut cleaned = Vec::with_capacity(records.len());
        for mut record in records {
            record.id = record.id.trim().to_uppercase();
            if record.id.is_empty() {
                return Err(DataError::EmptyId);
            }
            if !seen.insert(record.id.clone()) {
                return Err(DataError::DuplicateId(record.id));
            }
            record.name = record.name.trim().to_string();
            record.region = canonical_region(&record.region);
            record.capital = or_not_available(Some(record.capital.as_str()));
            record.income_level = or_not_available(Some(record.income_level.as_str()));
            cleaned.push(record);
        }

        Ok(Self {
            records: cleaned.into(),
        })
    }

    /// The ten-country table shipped with the site.
    pub fn builtin() -> Self {
        let records = BUILTIN
            .iter()
            .map(|&(id, name, region, capital, income)| {
                CountryRecord::new(id, name, region, capital, income)
            })
            .collect::<Vec<_>>();

        Self {
            records: records.into(),
        }
    }

    /// Load a table from a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let records: Vec<CountryRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load a table from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&json)?;
        debug!(path = %path.display(), count = table.len(), "Loaded fallback table");
        Ok(table)
    }

    /// All records in table order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Linear search by id.
    pub fn find(&self, id: &str) -> Option<&CountryRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed table; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self::builtin()
    }
}
