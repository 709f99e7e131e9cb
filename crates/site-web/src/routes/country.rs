//! Country detail page.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use country_data::CountryRecord;

use super::{fallback_notice, not_found_page};
use crate::seo::{country_schema, PageMeta};
use crate::state::AppState;

/// Country detail template.
#[derive(Template)]
#[template(path = "country.html")]
pub struct CountryTemplate {
    pub meta: PageMeta,
    pub country: CountryRecord,
    pub notice: Option<String>,
}

/// Title and description for a country detail page.
fn country_meta(state: &AppState, country: &CountryRecord) -> PageMeta {
    let url = state.page_url(&format!("/country/{}", country.id));
    let title = format!("{} Economic Overview & Statistics", country.name);
    let description = format!(
        "Discover comprehensive economic data for {}. Explore regional insights, its capital {}, and current income classification: {}.",
        country.name, country.capital, country.income_level
    );
    let schema = country_schema(country, &description, &url);

    PageMeta::new(title, description, url)
        .with_type("article")
        .with_schema(schema)
}

/// Render a country page, or a 404 page when the code is unknown.
pub async fn country_page(State(state): State<AppState>, Path(code): Path<String>) -> Response {
    let outcome = state.directory.fetch_one(&code).await;
    let notice = fallback_notice(outcome.reason());

    match outcome.into_value() {
        Some(country) => CountryTemplate {
            meta: country_meta(&state, &country),
            country,
            notice,
        }
        .into_response(),
        None => {
            let code = code.trim().to_uppercase();
            not_found_page(
                &state,
                &format!("/country/{}", urlencoding::encode(&code)),
                format!("We have no economic profile for \"{}\".", code),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use country_data::{CountryDirectory, FallbackTable, SourceConfig, WorldBankClient};

    #[test]
    fn test_country_meta() {
        let client = WorldBankClient::new(SourceConfig::default()).unwrap();
        let state = AppState::new(
            CountryDirectory::new(client, FallbackTable::builtin()),
            "https://country-profiles.com",
        );
        let country = CountryRecord::new("IND", "India", "Middle East & South Asia", "New Delhi", "Lower middle income");

        let meta = country_meta(&state, &country);
        assert_eq!(meta.full_title(), "India Economic Overview & Statistics | Global Economic Insights");
        assert_eq!(
            meta.description,
            "Discover comprehensive economic data for India. Explore regional insights, its capital New Delhi, and current income classification: Lower middle income."
        );
        assert_eq!(meta.url, "https://country-profiles.com/country/IND");
        assert_eq!(meta.og_type, "article");
        assert!(meta.schema_json().unwrap().contains("\"identifier\":\"IND\""));
    }
}
