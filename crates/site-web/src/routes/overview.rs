//! Featured economic overview pages.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use country_data::CountryRecord;

use super::{fallback_notice, not_found_page};
use crate::seo::PageMeta;
use crate::state::AppState;

/// A hand-picked overview page linked from the home page.
pub struct Featured {
    pub slug: &'static str,
    pub code: &'static str,
    pub label: &'static str,
}

pub const FEATURED: &[Featured] = &[
    Featured {
        slug: "india_economic_overview",
        code: "IND",
        label: "India Economic Overview",
    },
    Featured {
        slug: "us_economic_overview",
        code: "USA",
        label: "United States Economic Overview",
    },
    Featured {
        slug: "argentina_economic_overview",
        code: "ARG",
        label: "Argentina Economic Overview",
    },
];

/// Overview page template.
#[derive(Template)]
#[template(path = "overview.html")]
pub struct OverviewTemplate {
    pub meta: PageMeta,
    pub country: CountryRecord,
    pub notice: Option<String>,
}

fn find_featured(slug: &str) -> Option<&'static Featured> {
    FEATURED.iter().find(|page| page.slug == slug)
}

fn overview_meta(state: &AppState, slug: &str, country: &CountryRecord) -> PageMeta {
    let name = &country.name;
    PageMeta::new(
        format!("{} Economic Overview", name),
        format!(
            "{} economic overview including capital city, region, and income classification.",
            name
        ),
        state.page_url(&format!("/seo/{}", slug)),
    )
    .with_keywords(format!(
        "{name} economy, {name} capital, {name} income level, economic overview"
    ))
}

/// Render a featured overview page.
pub async fn overview_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let path = format!("/seo/{}", slug);
    let Some(featured) = find_featured(&slug) else {
        return not_found_page(&state, &path, "That overview page does not exist.".to_string());
    };

    let outcome = state.directory.fetch_one(featured.code).await;
    let notice = fallback_notice(outcome.reason());

    match outcome.into_value() {
        Some(country) => OverviewTemplate {
            meta: overview_meta(&state, featured.slug, &country),
            country,
            notice,
        }
        .into_response(),
        None => not_found_page(
            &state,
            &path,
            format!("Data for {} is not available right now.", featured.label),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_featured() {
        assert_eq!(find_featured("argentina_economic_overview").map(|p| p.code), Some("ARG"));
        assert_eq!(find_featured("us_economic_overview").map(|p| p.code), Some("USA"));
        assert!(find_featured("atlantis_economic_overview").is_none());
    }

    #[test]
    fn test_featured_codes_in_builtin_fallback() {
        let table = country_data::FallbackTable::builtin();
        for page in FEATURED {
            assert!(table.find(page.code).is_some(), "{}", page.code);
        }
    }
}
