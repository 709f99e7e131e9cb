//! Country directory (home) page.

use askama::Template;
use axum::extract::{Query, State};
use country_data::{in_region, regions, search, CountryRecord};
use serde::Deserialize;
use tracing::debug;

use super::fallback_notice;
use super::overview::{Featured, FEATURED};
use crate::seo::{website_schema, PageMeta};
use crate::state::AppState;

/// Directory page template.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub meta: PageMeta,
    pub countries: Vec<CountryRecord>,
    pub total: usize,
    pub query: String,
    pub regions: Vec<RegionOption>,
    pub featured: &'static [Featured],
    pub notice: Option<String>,
}

/// Entry in the region filter.
pub struct RegionOption {
    pub label: String,
    pub selected: bool,
}

/// Search and region filter parameters.
#[derive(Debug, Default, Deserialize)]
pub struct DirectoryQuery {
    pub q: Option<String>,
    pub region: Option<String>,
}

impl DirectoryQuery {
    fn text(&self) -> &str {
        self.q.as_deref().map(str::trim).unwrap_or("")
    }

    fn region(&self) -> Option<&str> {
        self.region.as_deref().map(str::trim).filter(|r| !r.is_empty())
    }
}

/// Apply the region filter, then the text search.
pub(crate) fn apply_filters(records: &[CountryRecord], query: &DirectoryQuery) -> Vec<CountryRecord> {
    let scoped: Vec<CountryRecord> = match query.region() {
        Some(region) => in_region(records, region).into_iter().cloned().collect(),
        None => records.to_vec(),
    };

    search(&scoped, query.text()).into_iter().cloned().collect()
}

/// Render the directory page.
pub async fn index_page(
    State(state): State<AppState>,
    Query(query): Query<DirectoryQuery>,
) -> IndexTemplate {
    let outcome = state.directory.fetch_all().await;
    let notice = fallback_notice(outcome.reason());
    let all = outcome.into_value();

    let selected = query.region().map(str::to_lowercase);
    let regions = regions(&all)
        .into_iter()
        .map(|label| RegionOption {
            selected: selected.as_deref() == Some(label.to_lowercase().as_str()),
            label,
        })
        .collect();

    let countries = apply_filters(&all, &query);
    debug!(total = all.len(), shown = countries.len(), "Rendering directory");

    let base_url = state.page_url("/");
    let meta = PageMeta::new(
        "Country Economic Profiles",
        "Browse economic profiles for countries worldwide: region, capital city, and income classification based on World Bank data.",
        base_url.clone(),
    )
    .with_schema(website_schema(&base_url));

    IndexTemplate {
        meta,
        total: all.len(),
        countries,
        query: query.text().to_string(),
        regions,
        featured: FEATURED,
        notice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use country_data::FallbackTable;

    fn query(q: Option<&str>, region: Option<&str>) -> DirectoryQuery {
        DirectoryQuery {
            q: q.map(str::to_string),
            region: region.map(str::to_string),
        }
    }

    #[test]
    fn test_apply_filters() {
        let table = FallbackTable::builtin();
        let records = table.records();

        assert_eq!(apply_filters(records, &DirectoryQuery::default()).len(), 10);
        assert_eq!(apply_filters(records, &query(Some("  "), Some(""))).len(), 10);

        let asia = apply_filters(records, &query(None, Some("East Asia & Pacific")));
        assert_eq!(asia.len(), 3);

        let tokyo = apply_filters(records, &query(Some("tok"), Some("east asia & pacific")));
        assert_eq!(tokyo.len(), 1);
        assert_eq!(tokyo[0].id, "JPN");

        assert!(apply_filters(records, &query(Some("tokyo"), Some("Sub-Saharan Africa"))).is_empty());
    }
}
