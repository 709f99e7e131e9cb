//! In-memory search and filtering over country lists.

use std::collections::BTreeSet;

use crate::model::CountryRecord;

/// Records whose id, name, capital, or region contains `query`, case-insensitive.
///
/// A blank query matches everything. Input order is preserved.
pub fn search<'a>(records: &'a [CountryRecord], query: &str) -> Vec<&'a CountryRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| {
            [&record.id, &record.name, &record.capital, &record.region]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Records in the given region (exact label, case-insensitive).
pub fn in_region<'a>(records: &'a [CountryRecord], region: &str) -> Vec<&'a CountryRecord> {
    let region = region.trim();
    records
        .iter()
        .filter(|record| record.region.eq_ignore_ascii_case(region))
        .collect()
}

/// Distinct region labels, sorted.
pub fn regions(records: &[CountryRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.region.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
